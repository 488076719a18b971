//! Payout evaluation
//!
//! Scans paylines, scatter and jackpot rules against a generated grid. All
//! payout math is integer, in the smallest currency unit; the evaluation is
//! pure and runs identically on the fresh-spin and replay paths.
//!
//! Order matters for replay comparison: paylines are evaluated strictly in
//! declared order and results appended in that order.

use serde::{Deserialize, Serialize};

use sv_core::{Amount, SymbolId};

use crate::grid::Grid;
use crate::theme::{Payline, ThemeConfig};

/// A win on a single payline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinningLine {
    /// Payline ID
    pub payline_id: u16,
    /// Winning (anchor) symbol ID
    pub symbol_id: SymbolId,
    /// Symbol name
    pub symbol_name: String,
    /// Consecutive matches from the line's first position
    pub match_count: u8,
    /// Line payout (multiplier x bet)
    pub payout: Amount,
}

/// Result of evaluating a grid against a theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Total win after bonus multiplier and jackpot
    pub total_win: Amount,
    /// Line wins in payline declared order
    pub winning_lines: Vec<WinningLine>,
    pub bonus_triggered: bool,
    /// Free spins awarded by the bonus trigger (0 when not triggered)
    pub free_spins_awarded: u32,
    pub jackpot_won: bool,
}

impl Evaluation {
    pub fn is_win(&self) -> bool {
        self.total_win > 0
    }
}

/// Evaluate a grid. The theme must already be validated; `bet` is in the
/// smallest currency unit.
pub fn evaluate(grid: &Grid, theme: &ThemeConfig, bet: Amount) -> Evaluation {
    let mut winning_lines = Vec::new();
    let mut line_total: Amount = 0;
    let mut full_line_hit = false;

    for payline in &theme.paylines {
        if let Some(win) = evaluate_line(grid, payline, theme, bet) {
            if win.match_count as usize == payline.positions.len() {
                full_line_hit = true;
            }
            line_total += win.payout;
            winning_lines.push(win);
        }
    }

    // Scatters count anywhere in the grid; the multiplier applies to the
    // summed line total, not per line.
    let mut total_win = line_total;
    let mut bonus_triggered = false;
    let mut free_spins_awarded = 0;
    if let Some(ref bonus) = theme.bonus {
        let scatters = grid
            .iter()
            .flatten()
            .filter(|&&id| id == bonus.scatter)
            .count();
        if scatters >= bonus.trigger_count as usize {
            bonus_triggered = true;
            free_spins_awarded = bonus.free_spins;
            total_win *= bonus.multiplier as Amount;
        }
    }

    // Jackpot pays on top of the multiplied total: added, never multiplied.
    // Eligibility is a winning line that filled its own full length.
    let mut jackpot_won = false;
    if let Some(ref jackpot) = theme.jackpot {
        if full_line_hit {
            jackpot_won = true;
            total_win += jackpot.value;
        }
    }

    Evaluation {
        total_win,
        winning_lines,
        bonus_triggered,
        free_spins_awarded,
        jackpot_won,
    }
}

/// Walk one payline: the symbol at the first position anchors the match,
/// subsequent positions extend it while they equal the anchor or either side
/// is the wild. Stops at the first mismatch; pays from three of a kind.
fn evaluate_line(
    grid: &Grid,
    payline: &Payline,
    theme: &ThemeConfig,
    bet: Amount,
) -> Option<WinningLine> {
    let (row0, col0) = payline.positions[0];
    let anchor = grid[col0 as usize][row0 as usize];

    let mut match_count = 1u8;
    for &(row, col) in &payline.positions[1..] {
        let symbol = grid[col as usize][row as usize];
        let matches = symbol == anchor
            || theme
                .wild
                .is_some_and(|wild| symbol == wild || anchor == wild);
        if !matches {
            break;
        }
        match_count += 1;
    }

    if match_count < 3 {
        return None;
    }

    let symbol = theme.symbol(anchor)?;
    let multiplier = symbol.multiplier_for(match_count);
    if multiplier == 0 {
        return None;
    }

    Some(WinningLine {
        payline_id: payline.id,
        symbol_id: anchor,
        symbol_name: symbol.name.clone(),
        match_count,
        payout: multiplier as Amount * bet,
    })
}
