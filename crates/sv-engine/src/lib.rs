//! # sv-engine — SpinVault Spin Outcome Engine
//!
//! Pure computation core for the reel game: every spin outcome is derived
//! from a persisted seed and is bit-for-bit reproducible for regulatory
//! audit, while remaining unpredictable to players without that seed.
//!
//! ## Architecture
//!
//! ```text
//! SpinEngine
//!     │
//!     ├── ThemeConfig (symbols, paylines, bonus/jackpot rules)
//!     ├── Seed + SeededRng (HMAC-SHA256 counter stream)
//!     ├── grid::generate (weighted symbol sampling)
//!     └── payout::evaluate (paylines, scatter bonus, jackpot)
//!           │
//!           v
//!     SpinOutcome (immutable, seed embedded, caller-persisted)
//! ```
//!
//! The engine holds no mutable state and performs no I/O; balance effects
//! are applied separately through `sv-ledger`.

pub mod engine;
pub mod error;
pub mod grid;
pub mod payout;
pub mod rng;
pub mod spin;
pub mod theme;

pub use engine::SpinEngine;
pub use error::{EngineError, EngineResult};
pub use grid::Grid;
pub use payout::{Evaluation, WinningLine};
pub use rng::{SEED_LEN, Seed, SeededRng};
pub use spin::SpinOutcome;
pub use theme::{BonusRules, JackpotKind, JackpotRules, Payline, Symbol, ThemeConfig};
