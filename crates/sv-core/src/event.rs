//! Game events emitted by the core
//!
//! Events describe things that already happened; they carry enough payload
//! for an embedding service to push balance updates and spin results to
//! clients without re-reading core state.

use serde::{Deserialize, Serialize};

use crate::amount::Amount;
use crate::ids::{SpinId, TransactionId, UserId};

/// Payload for a settled fresh spin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpinCompleted {
    pub spin_id: SpinId,
    pub total_win: Amount,
    pub bonus_triggered: bool,
    pub jackpot_won: bool,
}

/// Payload for a wallet mutation that went through the ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceChanged {
    pub user_id: UserId,
    pub new_balance: Amount,
    pub transaction_id: TransactionId,
}

/// An event emitted by the spin engine or the balance ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    SpinCompleted(SpinCompleted),
    BalanceChanged(BalanceChanged),
}

impl GameEvent {
    /// Short type tag, useful for log lines and routing.
    pub fn type_name(&self) -> &'static str {
        match self {
            GameEvent::SpinCompleted(_) => "spin_completed",
            GameEvent::BalanceChanged(_) => "balance_changed",
        }
    }
}

impl From<SpinCompleted> for GameEvent {
    fn from(event: SpinCompleted) -> Self {
        GameEvent::SpinCompleted(event)
    }
}

impl From<BalanceChanged> for GameEvent {
    fn from(event: BalanceChanged) -> Self {
        GameEvent::BalanceChanged(event)
    }
}
