//! Parallel batch simulation
//!
//! Spins a theme many times with fresh seeds and aggregates the results.
//! Used to validate a theme's emergent RTP and hit rate before it ships,
//! and to check weighted-sampling fairness against the declared weights.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use rayon::prelude::*;

use sv_core::{Amount, SymbolId};
use sv_engine::{EngineError, Seed, SpinEngine, ThemeConfig, grid};

use crate::error::SimResult;
use crate::report::SimReport;

/// Progress log cadence, in spins.
const LOG_EVERY: u64 = 100_000;

/// Batch simulation parameters.
#[derive(Debug, Clone)]
pub struct SimConfig {
    pub theme: ThemeConfig,
    /// Bet per spin, smallest currency unit
    pub bet: Amount,
    pub spins: u64,
}

/// Run the batch. Each spin draws its own fresh seed; spins are independent
/// so the batch parallelizes across all cores.
pub fn run(config: &SimConfig) -> SimResult<SimReport> {
    if config.bet <= 0 {
        return Err(EngineError::InvalidBet(config.bet).into());
    }
    config.theme.validate()?;

    let engine = SpinEngine::default();
    let done = AtomicU64::new(0);

    let report = (0..config.spins)
        .into_par_iter()
        .map(|_| {
            let outcome = engine.spin(&config.theme, config.bet);
            let n = done.fetch_add(1, Ordering::Relaxed) + 1;
            if n % LOG_EVERY == 0 {
                log::info!("simulated {n}/{} spins", config.spins);
            }
            outcome
        })
        .try_fold(SimReport::default, |mut acc, outcome| {
            acc.absorb(&outcome?);
            Ok::<_, EngineError>(acc)
        })
        .try_reduce(SimReport::default, |mut a, b| {
            a.merge(&b);
            Ok(a)
        })?;

    log::info!(
        "batch complete: {} spins, rtp {:.4}, hit rate {:.4}",
        report.spins,
        report.rtp(),
        report.hit_rate()
    );
    Ok(report)
}

/// Empirical symbol frequencies over freshly seeded grids.
#[derive(Debug, Clone, Default)]
pub struct SymbolCensus {
    counts: HashMap<SymbolId, u64>,
    total: u64,
}

impl SymbolCensus {
    /// Observed share of one symbol across all sampled cells.
    pub fn frequency(&self, id: SymbolId) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.counts.get(&id).copied().unwrap_or(0) as f64 / self.total as f64
    }

    /// Total cells sampled.
    pub fn total_draws(&self) -> u64 {
        self.total
    }

    fn absorb_grid(&mut self, grid: &grid::Grid) {
        for column in grid {
            for &id in column {
                *self.counts.entry(id).or_insert(0) += 1;
                self.total += 1;
            }
        }
    }

    fn merge(&mut self, other: SymbolCensus) {
        for (id, count) in other.counts {
            *self.counts.entry(id).or_insert(0) += count;
        }
        self.total += other.total;
    }
}

/// Sample `grids` freshly seeded grids and tally every cell. The draw count
/// is `grids * rows * columns`.
pub fn symbol_census(theme: &ThemeConfig, grids: u64) -> SimResult<SymbolCensus> {
    theme.validate()?;

    let census = (0..grids)
        .into_par_iter()
        .fold(SymbolCensus::default, |mut acc, _| {
            acc.absorb_grid(&grid::generate(theme, &Seed::generate()));
            acc
        })
        .reduce(SymbolCensus::default, |mut a, b| {
            a.merge(b);
            a
        });
    Ok(census)
}
