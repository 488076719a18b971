//! Atomic balance ledger
//!
//! The ledger is the single authority over balances: no other component
//! mutates one. Every mutation happens under the owning wallet's lock as one
//! indivisible unit: balance check, record append and materialized-balance
//! update either all happen or none do. Spins for the same user therefore
//! serialize, while wallets of different users never contend.
//!
//! Outcome computation must be finished before a ledger call is made; the
//! wallet lock is scoped to the read-check-write-append sequence only.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use parking_lot::{Mutex, RwLock};

use sv_core::{
    Amount, BalanceChanged, EventNotifier, NullNotifier, TransactionId, UserId, format_amount,
};

use crate::error::{LedgerError, LedgerResult};
use crate::transaction::{LedgerTransaction, TransactionKind};

#[derive(Debug, Default)]
struct Wallet {
    /// Materialized balance; always equals the newest record's
    /// `balance_after`
    balance: Amount,
    /// Append-only history
    transactions: Vec<LedgerTransaction>,
}

impl Wallet {
    fn append(&mut self, tx: LedgerTransaction) {
        self.balance = tx.balance_after;
        self.transactions.push(tx);
    }
}

/// In-process balance ledger with per-user atomicity.
pub struct Ledger {
    wallets: RwLock<HashMap<UserId, Arc<Mutex<Wallet>>>>,
    next_tx_id: AtomicU64,
    notifier: Arc<dyn EventNotifier>,
}

impl Ledger {
    /// Create a ledger wired to an event notifier.
    pub fn new(notifier: Arc<dyn EventNotifier>) -> Self {
        Self {
            wallets: RwLock::new(HashMap::new()),
            next_tx_id: AtomicU64::new(1),
            notifier,
        }
    }

    /// Open a wallet. A positive opening balance is posted as a `Manual`
    /// credit so the running-sum invariant holds from the first record.
    pub fn open_wallet(&self, user_id: &str, opening: Amount) -> LedgerResult<Amount> {
        if opening < 0 {
            return Err(LedgerError::InvalidAmount(opening));
        }

        let mut wallet = Wallet::default();
        let opening_tx = (opening > 0).then(|| {
            self.build_tx(
                user_id,
                opening,
                TransactionKind::Manual,
                "opening balance",
                None,
                opening,
            )
        });
        let notify_tx_id = opening_tx.as_ref().map(|tx| tx.id);
        if let Some(tx) = opening_tx {
            wallet.append(tx);
        }

        {
            let mut wallets = self.wallets.write();
            if wallets.contains_key(user_id) {
                return Err(LedgerError::WalletExists(user_id.to_string()));
            }
            wallets.insert(user_id.to_string(), Arc::new(Mutex::new(wallet)));
        }

        log::info!(
            "opened wallet for {user_id} with balance {}",
            format_amount(opening)
        );
        if let Some(tx_id) = notify_tx_id {
            self.notify(user_id, opening, tx_id);
        }
        Ok(opening)
    }

    /// Apply a settled spin's net effect as one atomic unit: debit the bet,
    /// credit the win, reject with no partial state if the net result would
    /// take the balance negative.
    pub fn apply_spin(
        &self,
        user_id: &str,
        bet: Amount,
        win: Amount,
        spin_ref: &str,
    ) -> LedgerResult<Amount> {
        if bet <= 0 {
            return Err(LedgerError::InvalidAmount(bet));
        }
        if win < 0 {
            return Err(LedgerError::InvalidAmount(win));
        }

        let handle = self.wallet_handle(user_id)?;
        let mut wallet = handle.lock();

        let net = win - bet;
        let new_balance = wallet.balance + net;
        if new_balance < 0 {
            log::warn!(
                "rejecting spin {spin_ref} for {user_id}: balance {}, net {net}",
                wallet.balance
            );
            return Err(LedgerError::InsufficientBalance {
                user_id: user_id.to_string(),
                balance: wallet.balance,
                change: net,
            });
        }

        // Records carry running balances in bet-then-win order.
        let after_debit = wallet.balance - bet;
        let debit = self.build_tx(
            user_id,
            -bet,
            TransactionKind::BetDebit,
            "spin stake",
            Some(spin_ref),
            after_debit,
        );
        let mut last_tx_id = debit.id;
        wallet.append(debit);

        if win > 0 {
            let credit = self.build_tx(
                user_id,
                win,
                TransactionKind::WinCredit,
                "spin win",
                Some(spin_ref),
                after_debit + win,
            );
            last_tx_id = credit.id;
            wallet.append(credit);
        }
        debug_assert_eq!(wallet.balance, new_balance);
        drop(wallet);

        log::debug!("applied spin {spin_ref} for {user_id}: net {net}, balance {new_balance}");
        self.notify(user_id, new_balance, last_tx_id);
        Ok(new_balance)
    }

    /// General-purpose atomic adjustment: the public choke point for every
    /// balance mutation outside the spin path (rewards, referrals, admin
    /// corrections).
    pub fn execute_transaction(
        &self,
        user_id: &str,
        amount: Amount,
        kind: TransactionKind,
        reason: &str,
        reference: Option<&str>,
    ) -> LedgerResult<(Amount, TransactionId)> {
        let handle = self.wallet_handle(user_id)?;
        let mut wallet = handle.lock();

        let new_balance = wallet.balance + amount;
        if new_balance < 0 {
            log::warn!(
                "rejecting {} for {user_id}: balance {}, change {amount}",
                kind.as_str(),
                wallet.balance
            );
            return Err(LedgerError::InsufficientBalance {
                user_id: user_id.to_string(),
                balance: wallet.balance,
                change: amount,
            });
        }

        let tx = self.build_tx(user_id, amount, kind, reason, reference, new_balance);
        let tx_id = tx.id;
        wallet.append(tx);
        drop(wallet);

        log::debug!(
            "executed {} for {user_id}: change {amount}, balance {new_balance}",
            kind.as_str()
        );
        self.notify(user_id, new_balance, tx_id);
        Ok((new_balance, tx_id))
    }

    /// Current materialized balance.
    pub fn balance(&self, user_id: &str) -> LedgerResult<Amount> {
        Ok(self.wallet_handle(user_id)?.lock().balance)
    }

    /// Snapshot of the user's transaction history, oldest first.
    pub fn transactions(&self, user_id: &str) -> LedgerResult<Vec<LedgerTransaction>> {
        Ok(self.wallet_handle(user_id)?.lock().transactions.clone())
    }

    /// Service-side pre-check before outcome computation. Advisory only:
    /// `apply_spin` re-checks under the wallet lock.
    pub fn check_funds(&self, user_id: &str, bet: Amount) -> LedgerResult<()> {
        let handle = self.wallet_handle(user_id)?;
        let wallet = handle.lock();
        if wallet.balance < bet {
            return Err(LedgerError::InsufficientBalance {
                user_id: user_id.to_string(),
                balance: wallet.balance,
                change: -bet,
            });
        }
        Ok(())
    }

    /// Reconciliation check: the materialized balance must equal both the
    /// newest record's `balance_after` and the running sum of all amounts.
    pub fn verify_consistency(&self, user_id: &str) -> LedgerResult<bool> {
        let handle = self.wallet_handle(user_id)?;
        let wallet = handle.lock();

        let last_after = wallet
            .transactions
            .last()
            .map(|tx| tx.balance_after)
            .unwrap_or(0);
        let running_sum: Amount = wallet.transactions.iter().map(|tx| tx.amount).sum();

        Ok(wallet.balance == last_after && wallet.balance == running_sum)
    }

    fn wallet_handle(&self, user_id: &str) -> LedgerResult<Arc<Mutex<Wallet>>> {
        self.wallets
            .read()
            .get(user_id)
            .cloned()
            .ok_or_else(|| LedgerError::WalletNotFound(user_id.to_string()))
    }

    fn build_tx(
        &self,
        user_id: &str,
        amount: Amount,
        kind: TransactionKind,
        reason: &str,
        reference: Option<&str>,
        balance_after: Amount,
    ) -> LedgerTransaction {
        LedgerTransaction {
            id: self.next_tx_id.fetch_add(1, Ordering::Relaxed),
            user_id: user_id.to_string(),
            amount,
            kind,
            balance_after,
            reference: reference.map(str::to_string),
            reason: reason.to_string(),
            created_at: Utc::now(),
        }
    }

    fn notify(&self, user_id: &str, new_balance: Amount, transaction_id: TransactionId) {
        self.notifier.notify_balance_changed(BalanceChanged {
            user_id: user_id.to_string(),
            new_balance,
            transaction_id,
        });
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new(Arc::new(NullNotifier))
    }
}
