//! Error types for log post-processing

/// Core errors
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PlanLogError {
    /// No plan left after splitting (and skipping empty segments)
    #[error("log contains no plans")]
    EmptyLog,
}

/// Result type for core operations
pub type PlanLogResult<T> = Result<T, PlanLogError>;
