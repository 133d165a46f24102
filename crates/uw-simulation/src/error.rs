/// Result alias for simulation operations.
pub type ClockResult<T> = Result<T, ClockError>;

/// Errors raised while configuring the simulation.
#[derive(Debug, thiserror::Error)]
pub enum ClockError {
    /// The legacy manual/continuous flag pair was set simultaneously.
    #[error("manual and continuous time sources are mutually exclusive")]
    ConflictingModes,
}
