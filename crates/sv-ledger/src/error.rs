//! Error types for the balance ledger

use sv_core::{Amount, UserId};
use thiserror::Error;

/// Ledger error type
///
/// All variants are terminal for the request that produced them; a rejected
/// mutation leaves no partial state behind.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("no wallet for user {0}")]
    WalletNotFound(UserId),

    #[error("wallet already open for user {0}")]
    WalletExists(UserId),

    #[error("insufficient balance for user {user_id}: balance {balance}, change {change}")]
    InsufficientBalance {
        user_id: UserId,
        balance: Amount,
        change: Amount,
    },

    #[error("invalid amount: {0}")]
    InvalidAmount(Amount),
}

/// Result type alias
pub type LedgerResult<T> = Result<T, LedgerError>;
