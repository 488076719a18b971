//! Replay determinism and the reference payout scenario, exercised through
//! the public API the audit endpoint uses.

use sv_engine::{Payline, SEED_LEN, Seed, SpinEngine, Symbol, ThemeConfig};

fn reference_theme() -> ThemeConfig {
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

fn seed_from_index(i: u64) -> Seed {
    let mut bytes = [0u8; SEED_LEN];
    bytes[SEED_LEN - 8..].copy_from_slice(&i.to_be_bytes());
    Seed::from_bytes(bytes)
}

#[test]
fn replay_is_deterministic_across_calls() {
    let engine = SpinEngine::default();
    let theme = reference_theme();

    for i in 0..50u64 {
        let seed = seed_from_index(i);
        let first = engine.replay(&theme, 10, seed).unwrap();
        let second = engine.replay(&theme, 10, seed).unwrap();
        assert_eq!(first, second, "seed {i} diverged between replays");
    }
}

#[test]
fn replay_matches_fresh_spin() {
    let engine = SpinEngine::default();
    let theme = reference_theme();

    let outcome = engine.spin(&theme, 25).unwrap();
    let replayed = engine.replay(&theme, 25, outcome.seed).unwrap();
    assert_eq!(replayed, outcome);
    assert!(engine.verify(&theme, &outcome).unwrap());
}

/// Reference scenario: a seed producing [A, A, A] on the single payline at
/// bet 10 pays exactly one line (A, 3 of a kind, x5) for a total win of 50.
#[test]
fn three_aces_pay_fifty() {
    let engine = SpinEngine::default();
    let theme = reference_theme();

    // Deterministic seed search; with A weighted 8 of 25 roughly one seed
    // in thirty produces the target line, so this never comes close to the
    // bound in practice.
    let outcome = (0..10_000u64)
        .map(|i| engine.replay(&theme, 10, seed_from_index(i)).unwrap())
        .find(|outcome| outcome.grid.iter().all(|col| col[1] == 1))
        .expect("no seed in range produced [A, A, A]");

    assert_eq!(outcome.winning_lines.len(), 1);
    let line = &outcome.winning_lines[0];
    assert_eq!(line.payline_id, 0);
    assert_eq!(line.symbol_id, 1);
    assert_eq!(line.match_count, 3);
    assert_eq!(line.payout, 50);
    assert_eq!(outcome.total_win, 50);
}

#[test]
fn outcome_survives_persistence_round_trip() {
    let engine = SpinEngine::default();
    let theme = reference_theme();

    let outcome = engine.spin(&theme, 10).unwrap();
    let json = serde_json::to_string(&outcome).unwrap();
    let restored: sv_engine::SpinOutcome = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, outcome);
    assert!(engine.verify(&theme, &restored).unwrap());
}
