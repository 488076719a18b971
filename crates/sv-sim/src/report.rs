//! Aggregated simulation statistics

use serde::{Deserialize, Serialize};

use sv_core::Amount;
use sv_engine::SpinOutcome;

/// Aggregate over a batch of simulated spins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimReport {
    pub spins: u64,
    pub total_bet: Amount,
    pub total_win: Amount,
    pub wins: u64,
    pub bonus_triggers: u64,
    pub jackpots: u64,
    pub max_win: Amount,
}

impl SimReport {
    /// Fold one outcome into the aggregate.
    pub fn absorb(&mut self, outcome: &SpinOutcome) {
        self.spins += 1;
        self.total_bet += outcome.bet;
        self.total_win += outcome.total_win;
        if outcome.is_win() {
            self.wins += 1;
        }
        if outcome.bonus_triggered {
            self.bonus_triggers += 1;
        }
        if outcome.jackpot_won {
            self.jackpots += 1;
        }
        if outcome.total_win > self.max_win {
            self.max_win = outcome.total_win;
        }
    }

    /// Combine two partial aggregates (parallel reduce step).
    pub fn merge(&mut self, other: &SimReport) {
        self.spins += other.spins;
        self.total_bet += other.total_bet;
        self.total_win += other.total_win;
        self.wins += other.wins;
        self.bonus_triggers += other.bonus_triggers;
        self.jackpots += other.jackpots;
        self.max_win = self.max_win.max(other.max_win);
    }

    /// Return-to-player ratio over the batch.
    pub fn rtp(&self) -> f64 {
        if self.total_bet > 0 {
            self.total_win as f64 / self.total_bet as f64
        } else {
            0.0
        }
    }

    /// Share of spins that won anything.
    pub fn hit_rate(&self) -> f64 {
        if self.spins > 0 {
            self.wins as f64 / self.spins as f64
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(spins: u64, total_bet: Amount, total_win: Amount, wins: u64) -> SimReport {
        SimReport {
            spins,
            total_bet,
            total_win,
            wins,
            ..Default::default()
        }
    }

    #[test]
    fn test_ratios() {
        let r = report(100, 1000, 950, 28);
        assert!((r.rtp() - 0.95).abs() < 1e-12);
        assert!((r.hit_rate() - 0.28).abs() < 1e-12);
    }

    #[test]
    fn test_empty_report_ratios() {
        let r = SimReport::default();
        assert_eq!(r.rtp(), 0.0);
        assert_eq!(r.hit_rate(), 0.0);
    }

    #[test]
    fn test_report_export_round_trip() {
        let mut r = report(100, 1000, 950, 28);
        r.max_win = 400;
        let json = serde_json::to_string(&r).unwrap();
        let back: SimReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }

    #[test]
    fn test_merge_sums_fields() {
        let mut a = report(10, 100, 40, 3);
        a.max_win = 25;
        let mut b = report(5, 50, 90, 2);
        b.max_win = 60;

        a.merge(&b);
        assert_eq!(a.spins, 15);
        assert_eq!(a.total_bet, 150);
        assert_eq!(a.total_win, 130);
        assert_eq!(a.wins, 5);
        assert_eq!(a.max_win, 60);
    }
}
