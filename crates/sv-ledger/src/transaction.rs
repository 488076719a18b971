//! Ledger transaction records
//!
//! Transactions are append-only: once written they are never mutated or
//! deleted. Each record snapshots the balance after its own application, so
//! the log alone reconstructs any historical balance, and the newest
//! record's `balance_after` must always agree with the wallet's
//! materialized balance.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use sv_core::{Amount, TransactionId, UserId};

/// Classification of a balance mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    /// Stake debited for a spin
    BetDebit,
    /// Winnings credited for a spin
    WinCredit,
    /// Manual adjustment (admin, correction, opening balance)
    Manual,
    /// Reward credit (achievements, referrals)
    Bonus,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::BetDebit => "bet_debit",
            TransactionKind::WinCredit => "win_credit",
            TransactionKind::Manual => "manual",
            TransactionKind::Bonus => "bonus",
        }
    }
}

/// One immutable ledger record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerTransaction {
    /// Monotonically increasing ID, unique across all users
    pub id: TransactionId,
    pub user_id: UserId,
    /// Signed amount: negative debits, positive credits
    pub amount: Amount,
    pub kind: TransactionKind,
    /// Wallet balance after this record applied
    pub balance_after: Amount,
    /// External reference, e.g. the spin ID that caused the mutation
    pub reference: Option<String>,
    pub reason: String,
    pub created_at: DateTime<Utc>,
}
