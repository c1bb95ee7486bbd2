//! Router error types.

/// Errors raised when building a router.
///
/// Queries never fail: an unreachable destination is an absent route.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RouterError {
    /// Wait time outside the accepted range
    #[error("invalid bus wait time: {0} minutes (expected 1..=1000)")]
    InvalidWaitTime(u32),

    /// Velocity outside the accepted range, or not a finite number
    #[error("invalid bus velocity: {0} km/h (expected 1..=1000)")]
    InvalidVelocity(f64),
}
