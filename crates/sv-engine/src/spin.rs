//! Spin outcome record

use serde::{Deserialize, Serialize};

use sv_core::{Amount, SpinId};

use crate::grid::Grid;
use crate::payout::{Evaluation, WinningLine};
use crate::rng::Seed;

/// Complete result of one spin, immutable once produced.
///
/// The engine holds no state across calls; the caller owns the outcome and
/// persists it (seed included) as the audit record. Replaying the seed
/// against the same theme and bet must reproduce `grid` and `total_win`
/// bit-for-bit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpinOutcome {
    /// Spin ID, derived from the seed
    pub spin_id: SpinId,
    /// Bet staked, smallest currency unit
    pub bet: Amount,
    /// Generated symbol matrix (columns x rows)
    pub grid: Grid,
    /// Total win after bonus multiplier and jackpot
    pub total_win: Amount,
    /// Line wins in payline declared order
    pub winning_lines: Vec<WinningLine>,
    pub bonus_triggered: bool,
    /// Free spins awarded by the bonus trigger (0 when not triggered)
    pub free_spins_awarded: u32,
    pub jackpot_won: bool,
    /// The seed this outcome derives from, persisted verbatim for replay
    pub seed: Seed,
}

impl SpinOutcome {
    pub(crate) fn assemble(seed: Seed, bet: Amount, grid: Grid, eval: Evaluation) -> Self {
        Self {
            spin_id: spin_id_for(&seed),
            bet,
            grid,
            total_win: eval.total_win,
            winning_lines: eval.winning_lines,
            bonus_triggered: eval.bonus_triggered,
            free_spins_awarded: eval.free_spins_awarded,
            jackpot_won: eval.jackpot_won,
            seed,
        }
    }

    pub fn is_win(&self) -> bool {
        self.total_win > 0
    }

    /// Net balance effect of this spin.
    pub fn net_change(&self) -> Amount {
        self.total_win - self.bet
    }
}

/// Spin IDs are a seed prefix: stable across replays of the same seed.
fn spin_id_for(seed: &Seed) -> SpinId {
    format!("spin-{}", &seed.to_hex()[..12])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SEED_LEN;

    #[test]
    fn test_spin_id_is_seed_stable() {
        let seed = Seed::from_bytes([0x5au8; SEED_LEN]);
        assert_eq!(spin_id_for(&seed), "spin-5a5a5a5a5a5a");
        assert_eq!(spin_id_for(&seed), spin_id_for(&seed));
    }

    #[test]
    fn test_net_change() {
        let outcome = SpinOutcome {
            spin_id: "spin-1".into(),
            bet: 100,
            grid: vec![],
            total_win: 30,
            winning_lines: vec![],
            bonus_triggered: false,
            free_spins_awarded: 0,
            jackpot_won: false,
            seed: Seed::from_bytes([0u8; SEED_LEN]),
        };
        assert_eq!(outcome.net_change(), -70);
        assert!(outcome.is_win());
    }
}
