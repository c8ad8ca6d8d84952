//! Fleet storage error types.

/// Errors from a fleet repository.
#[derive(Debug, Clone, thiserror::Error)]
pub enum FleetError {
    /// The backing store could not be reached or rejected the operation
    #[error("fleet store unavailable: {0}")]
    Unavailable(String),
}
