//! # sv-core — SpinVault shared vocabulary
//!
//! Foundation crate for the SpinVault game core. Defines the fixed-point
//! money type, the identifier aliases shared between the spin engine and the
//! balance ledger, and the game event + notifier capability used to wire the
//! core into an embedding service without global lookups.

pub mod amount;
pub mod event;
pub mod ids;
pub mod notify;

pub use amount::{Amount, format_amount};
pub use event::{BalanceChanged, GameEvent, SpinCompleted};
pub use ids::{SpinId, SymbolId, TransactionId, UserId};
pub use notify::{ChannelNotifier, EventNotifier, NullNotifier};
