//! Catalogue error types.
//!
//! These all indicate that the loader handed the catalogue inconsistent
//! data. They are surfaced loudly rather than repaired.

/// Errors raised while populating a catalogue.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogueError {
    /// A stop with this name was already added
    #[error("duplicate stop: {0}")]
    DuplicateStop(String),

    /// A bus with this name was already added
    #[error("duplicate bus: {0}")]
    DuplicateBus(String),

    /// A bus or distance entry references a stop that was never added
    #[error("unknown stop: {0}")]
    UnknownStop(String),

    /// A bus was given no stops
    #[error("bus {0} has no stops")]
    EmptyBus(String),

    /// A road distance is negative, infinite or NaN
    #[error("invalid road distance from {from} to {to}: {metres}")]
    InvalidDistance {
        from: String,
        to: String,
        metres: f64,
    },
}
