//! Event notifier capability
//!
//! The engine and ledger never look up an event sink globally; they receive
//! an [`EventNotifier`] at construction. Notification is fire-and-forget: a
//! full or disconnected sink must not fail the game operation that produced
//! the event.

use std::sync::Arc;

use crossbeam_channel::{Receiver, Sender, unbounded};

use crate::event::{BalanceChanged, GameEvent, SpinCompleted};

/// Capability for pushing core events to the embedding service.
pub trait EventNotifier: Send + Sync {
    fn notify_spin_completed(&self, event: SpinCompleted);
    fn notify_balance_changed(&self, event: BalanceChanged);
}

/// Notifier that drops every event. Default for tests and batch simulation.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullNotifier;

impl EventNotifier for NullNotifier {
    fn notify_spin_completed(&self, _event: SpinCompleted) {}
    fn notify_balance_changed(&self, _event: BalanceChanged) {}
}

/// Notifier backed by an unbounded channel.
pub struct ChannelNotifier {
    tx: Sender<GameEvent>,
}

impl ChannelNotifier {
    /// Create a notifier together with the receiving end.
    pub fn new() -> (Arc<Self>, Receiver<GameEvent>) {
        let (tx, rx) = unbounded();
        (Arc::new(Self { tx }), rx)
    }

    fn send(&self, event: GameEvent) {
        if self.tx.send(event).is_err() {
            log::warn!("event receiver dropped, discarding event");
        }
    }
}

impl EventNotifier for ChannelNotifier {
    fn notify_spin_completed(&self, event: SpinCompleted) {
        self.send(event.into());
    }

    fn notify_balance_changed(&self, event: BalanceChanged) {
        self.send(event.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_notifier_delivers() {
        let (notifier, rx) = ChannelNotifier::new();
        notifier.notify_spin_completed(SpinCompleted {
            spin_id: "spin-1".into(),
            total_win: 500,
            bonus_triggered: false,
            jackpot_won: false,
        });

        let event = rx.try_recv().unwrap();
        assert_eq!(event.type_name(), "spin_completed");
    }

    #[test]
    fn test_dropped_receiver_does_not_panic() {
        let (notifier, rx) = ChannelNotifier::new();
        drop(rx);
        notifier.notify_balance_changed(BalanceChanged {
            user_id: "u-1".into(),
            new_balance: 0,
            transaction_id: 1,
        });
    }
}
