//! # sv-ledger — SpinVault Atomic Balance Ledger
//!
//! Applies a spin's net effect (debit bet, credit win) to a user's balance
//! as one indivisible operation, appending immutable transaction records.
//! Guarantees: a bet is never charged without its matching win credit,
//! balances never go negative, and the materialized balance never diverges
//! from the transaction log.
//!
//! The engine computes outcomes (`sv-engine`); this crate is the only place
//! balances change.

pub mod error;
pub mod ledger;
pub mod transaction;

pub use error::{LedgerError, LedgerResult};
pub use ledger::Ledger;
pub use transaction::{LedgerTransaction, TransactionKind};
