//! Theme configuration
//!
//! A theme is authored by the configuration subsystem and handed to the
//! engine read-only. The declared order of `symbols` and `paylines` is part
//! of the reproducibility contract: weighted sampling walks symbols in
//! declared order and payline results are appended in declared order, so
//! reordering either list changes outcomes for the same seed.

use serde::{Deserialize, Serialize};

use sv_core::{Amount, SymbolId};

use crate::error::{EngineError, EngineResult};

/// A paying (or decorative) reel symbol.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Symbol {
    /// Unique symbol ID within the theme
    pub id: SymbolId,
    /// Display name (e.g., "ACE", "WILD")
    pub name: String,
    /// Relative selection weight (positive)
    pub weight: u32,
    /// Payout multipliers; index `i` pays for a match count of `i + 2`,
    /// so position 0 (two of a kind) is conventionally zero
    pub paytable: Vec<u32>,
}

impl Symbol {
    pub fn new(id: SymbolId, name: impl Into<String>, weight: u32, paytable: &[u32]) -> Self {
        Self {
            id,
            name: name.into(),
            weight,
            paytable: paytable.to_vec(),
        }
    }

    /// Payout multiplier for a consecutive-match count. Zero below three of
    /// a kind and beyond the table.
    pub fn multiplier_for(&self, match_count: u8) -> u32 {
        if match_count < 3 {
            return 0;
        }
        let idx = (match_count - 2) as usize;
        self.paytable.get(idx).copied().unwrap_or(0)
    }
}

/// An ordered sequence of grid coordinates checked for consecutive matches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payline {
    /// Payline ID within the theme
    pub id: u16,
    /// (row, column) positions, theme-authored; minimum length 3
    pub positions: Vec<(u8, u8)>,
}

impl Payline {
    pub fn new(id: u16, positions: Vec<(u8, u8)>) -> Self {
        Self { id, positions }
    }

    /// Straight horizontal line across all columns of a grid.
    pub fn straight(id: u16, row: u8, columns: u8) -> Self {
        Self {
            id,
            positions: (0..columns).map(|col| (row, col)).collect(),
        }
    }
}

/// Scatter-driven bonus feature rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BonusRules {
    /// Symbol counted anywhere in the grid
    pub scatter: SymbolId,
    /// Occurrences needed to trigger (at least 2)
    pub trigger_count: u8,
    /// Free spins awarded on trigger
    pub free_spins: u32,
    /// Multiplier applied to the total line win on trigger
    pub multiplier: u32,
}

/// Jackpot funding model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JackpotKind {
    /// Fixed prize paid from the house
    Fixed,
    /// Snapshot of a progressive pool managed outside the engine
    Progressive,
}

/// Jackpot rules. The engine adds `value` to the total win when the jackpot
/// hits; for a progressive pool the configuration subsystem supplies the
/// current pool value here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JackpotRules {
    pub kind: JackpotKind,
    pub value: Amount,
}

/// Complete theme configuration, immutable engine input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Visible rows (at least 3)
    pub rows: u8,
    /// Reel columns (at least 3)
    pub columns: u8,
    /// Symbols in declared order
    pub symbols: Vec<Symbol>,
    /// Paylines in declared order
    pub paylines: Vec<Payline>,
    /// Wild symbol, substitutes for any other in line matching
    #[serde(default)]
    pub wild: Option<SymbolId>,
    #[serde(default)]
    pub bonus: Option<BonusRules>,
    #[serde(default)]
    pub jackpot: Option<JackpotRules>,
}

impl ThemeConfig {
    /// Sum of symbol weights.
    pub fn total_weight(&self) -> u64 {
        self.symbols.iter().map(|s| s.weight as u64).sum()
    }

    /// Look up a symbol by ID.
    pub fn symbol(&self, id: SymbolId) -> Option<&Symbol> {
        self.symbols.iter().find(|s| s.id == id)
    }

    fn contains_symbol(&self, id: SymbolId) -> bool {
        self.symbols.iter().any(|s| s.id == id)
    }

    /// Structural validation, run before any RNG draw. Reports the first
    /// violation found; a theme that passes can be spun without further
    /// checks anywhere in the pipeline.
    pub fn validate(&self) -> EngineResult<()> {
        if self.rows < 3 || self.columns < 3 {
            return Err(invalid(format!(
                "grid must be at least 3x3, got {}x{}",
                self.rows, self.columns
            )));
        }
        if self.symbols.is_empty() {
            return Err(invalid("theme has no symbols"));
        }
        if self.paylines.is_empty() {
            return Err(invalid("theme has no paylines"));
        }
        if self.total_weight() == 0 {
            return Err(invalid("symbol weights sum to zero"));
        }
        for symbol in &self.symbols {
            if symbol.weight == 0 {
                return Err(invalid(format!("symbol {} has zero weight", symbol.id)));
            }
        }

        for payline in &self.paylines {
            if payline.positions.len() < 3 {
                return Err(invalid(format!(
                    "payline {} has {} positions, minimum is 3",
                    payline.id,
                    payline.positions.len()
                )));
            }
            for &(row, col) in &payline.positions {
                if row >= self.rows || col >= self.columns {
                    return Err(invalid(format!(
                        "payline {} position ({}, {}) outside {}x{} grid",
                        payline.id, row, col, self.rows, self.columns
                    )));
                }
            }
        }

        if let Some(wild) = self.wild {
            if !self.contains_symbol(wild) {
                return Err(invalid(format!("wild symbol {wild} not in symbol list")));
            }
        }
        if let Some(ref bonus) = self.bonus {
            if !self.contains_symbol(bonus.scatter) {
                return Err(invalid(format!(
                    "scatter symbol {} not in symbol list",
                    bonus.scatter
                )));
            }
            if bonus.trigger_count < 2 {
                return Err(invalid("scatter trigger count must be at least 2"));
            }
        }

        Ok(())
    }
}

fn invalid(msg: impl Into<String>) -> EngineError {
    EngineError::InvalidConfiguration(msg.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_reel_theme() -> ThemeConfig {
        ThemeConfig {
            rows: 3,
            columns: 3,
            symbols: vec![
                Symbol::new(1, "A", 8, &[0, 5, 20]),
                Symbol::new(2, "K", 8, &[0, 4, 15]),
                Symbol::new(3, "Q", 9, &[0, 3, 10]),
            ],
            paylines: vec![Payline::straight(0, 1, 3)],
            wild: None,
            bonus: None,
            jackpot: None,
        }
    }

    #[test]
    fn test_valid_theme() {
        assert!(three_reel_theme().validate().is_ok());
    }

    #[test]
    fn test_multiplier_indexing() {
        let symbol = Symbol::new(1, "A", 8, &[0, 5, 20]);
        assert_eq!(symbol.multiplier_for(2), 0);
        assert_eq!(symbol.multiplier_for(3), 5);
        assert_eq!(symbol.multiplier_for(4), 20);
        assert_eq!(symbol.multiplier_for(5), 0); // beyond table
    }

    #[test]
    fn test_rejects_small_grid() {
        let mut theme = three_reel_theme();
        theme.rows = 2;
        assert!(theme.validate().is_err());
    }

    #[test]
    fn test_rejects_empty_symbols() {
        let mut theme = three_reel_theme();
        theme.symbols.clear();
        assert!(theme.validate().is_err());
    }

    #[test]
    fn test_rejects_short_payline() {
        let mut theme = three_reel_theme();
        theme.paylines = vec![Payline::new(0, vec![(0, 0), (0, 1)])];
        assert!(theme.validate().is_err());
    }

    #[test]
    fn test_rejects_out_of_bounds_payline() {
        let mut theme = three_reel_theme();
        theme.paylines = vec![Payline::new(0, vec![(0, 0), (1, 1), (3, 2)])];
        assert!(theme.validate().is_err());
    }

    #[test]
    fn test_rejects_unknown_scatter() {
        let mut theme = three_reel_theme();
        theme.bonus = Some(BonusRules {
            scatter: 99,
            trigger_count: 3,
            free_spins: 10,
            multiplier: 2,
        });
        let err = theme.validate().unwrap_err();
        assert!(matches!(err, EngineError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_straight_payline() {
        let line = Payline::straight(0, 1, 5);
        assert_eq!(line.positions, vec![(1, 0), (1, 1), (1, 2), (1, 3), (1, 4)]);
    }
}
