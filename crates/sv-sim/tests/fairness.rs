//! Weighted-sampling fairness over a statistically meaningful draw count.

use sv_engine::{Payline, Symbol, ThemeConfig};
use sv_sim::symbol_census;

/// One symbol carries 99 of 101 total weight; over 100k+ draws its observed
/// frequency must converge on the theoretical share.
#[test]
fn dominant_weight_converges_to_theoretical_share() {
    let theme = ThemeConfig {
        rows: 3,
        columns: 5,
        symbols: vec![
            Symbol::new(1, "DOM", 99, &[0, 5, 10, 20]),
            Symbol::new(2, "RARE1", 1, &[0, 5, 10, 20]),
            Symbol::new(3, "RARE2", 1, &[0, 5, 10, 20]),
        ],
        paylines: vec![Payline::straight(0, 1, 5)],
        wild: None,
        bonus: None,
        jackpot: None,
    };

    // 8000 grids x 15 cells = 120k draws.
    let census = symbol_census(&theme, 8_000).unwrap();
    assert!(census.total_draws() >= 100_000);

    let expected = 99.0 / 101.0;
    let observed = census.frequency(1);
    assert!(
        (observed - expected).abs() < 0.005,
        "dominant symbol frequency {observed:.5} deviates from {expected:.5}"
    );

    let rare = census.frequency(2) + census.frequency(3);
    assert!((rare - 2.0 / 101.0).abs() < 0.005);
}
