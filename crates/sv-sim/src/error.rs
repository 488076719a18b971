//! Error types for the simulator

use sv_engine::EngineError;
use thiserror::Error;

/// Simulator error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimError {
    #[error("engine error: {0}")]
    Engine(#[from] EngineError),
}

/// Result type alias
pub type SimResult<T> = Result<T, SimError>;
