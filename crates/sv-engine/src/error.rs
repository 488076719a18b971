//! Error types for the spin engine

use sv_core::Amount;
use thiserror::Error;

/// Engine error type
///
/// Both variants are caller errors recognized before any RNG draw; no side
/// effect has occurred when they are returned, so retry-after-fix is safe.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("invalid theme configuration: {0}")]
    InvalidConfiguration(String),

    #[error("invalid bet amount: {0}")]
    InvalidBet(Amount),
}

/// Result type alias
pub type EngineResult<T> = Result<T, EngineError>;
