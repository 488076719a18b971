//! Identifier aliases shared across the core

/// Numeric symbol identifier, unique within a theme.
pub type SymbolId = u32;

/// User identifier as issued by the account subsystem.
pub type UserId = String;

/// Spin identifier, derived from the spin's seed.
pub type SpinId = String;

/// Monotonically increasing ledger transaction identifier.
pub type TransactionId = u64;
