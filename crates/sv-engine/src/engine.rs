//! Spin orchestrator
//!
//! Ties the seeded random source, grid generator and payout evaluator into
//! the two entry points the surrounding service calls: `spin` (fresh seed)
//! and `replay` (caller-supplied seed, audit only). The orchestrator
//! performs no I/O and holds no mutable state; a single instance may be
//! shared across any number of threads.

use std::sync::Arc;

use sv_core::{Amount, EventNotifier, NullNotifier, SpinCompleted};

use crate::error::{EngineError, EngineResult};
use crate::grid;
use crate::payout;
use crate::rng::Seed;
use crate::spin::SpinOutcome;
use crate::theme::ThemeConfig;

/// Stateless spin engine.
pub struct SpinEngine {
    notifier: Arc<dyn EventNotifier>,
}

impl SpinEngine {
    /// Create an engine wired to an event notifier.
    pub fn new(notifier: Arc<dyn EventNotifier>) -> Self {
        Self { notifier }
    }

    /// Execute a fresh spin: generate a seed, materialize the grid,
    /// evaluate payouts. The seed is embedded in the returned outcome and
    /// must be persisted with it.
    pub fn spin(&self, theme: &ThemeConfig, bet: Amount) -> EngineResult<SpinOutcome> {
        self.check_preconditions(theme, bet)?;

        let seed = Seed::generate();
        let outcome = run_pipeline(theme, bet, seed);

        log::debug!(
            "spin {} settled: win={} lines={} bonus={} jackpot={}",
            outcome.spin_id,
            outcome.total_win,
            outcome.winning_lines.len(),
            outcome.bonus_triggered,
            outcome.jackpot_won
        );
        self.notifier.notify_spin_completed(SpinCompleted {
            spin_id: outcome.spin_id.clone(),
            total_win: outcome.total_win,
            bonus_triggered: outcome.bonus_triggered,
            jackpot_won: outcome.jackpot_won,
        });

        Ok(outcome)
    }

    /// Re-run the pipeline with a previously issued seed. Audit path: no
    /// event is emitted and nothing is persisted.
    pub fn replay(&self, theme: &ThemeConfig, bet: Amount, seed: Seed) -> EngineResult<SpinOutcome> {
        self.check_preconditions(theme, bet)?;
        Ok(run_pipeline(theme, bet, seed))
    }

    /// Replay a stored spin and compare against the recorded outcome.
    /// Returns true when grid and total win both reproduce.
    pub fn verify(
        &self,
        theme: &ThemeConfig,
        recorded: &SpinOutcome,
    ) -> EngineResult<bool> {
        let replayed = self.replay(theme, recorded.bet, recorded.seed)?;
        let matches = replayed.grid == recorded.grid && replayed.total_win == recorded.total_win;
        if !matches {
            log::warn!(
                "audit mismatch for {}: recorded win={}, replayed win={}",
                recorded.spin_id,
                recorded.total_win,
                replayed.total_win
            );
        }
        Ok(matches)
    }

    fn check_preconditions(&self, theme: &ThemeConfig, bet: Amount) -> EngineResult<()> {
        if bet <= 0 {
            return Err(EngineError::InvalidBet(bet));
        }
        theme.validate()
    }
}

impl Default for SpinEngine {
    fn default() -> Self {
        Self::new(Arc::new(NullNotifier))
    }
}

/// Shared fresh-spin / replay pipeline. The seed is the only varying input;
/// everything downstream is deterministic.
fn run_pipeline(theme: &ThemeConfig, bet: Amount, seed: Seed) -> SpinOutcome {
    let grid = grid::generate(theme, &seed);
    let eval = payout::evaluate(&grid, theme, bet);
    SpinOutcome::assemble(seed, bet, grid, eval)
}
