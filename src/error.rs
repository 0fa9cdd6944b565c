//! Error types for the sequential thinking service.

/// Failure raised while computing a step analysis.
///
/// The dispatcher does not recover from these; the HTTP boundary converts
/// them into an `ErrorResponse` with a 500 status.
#[derive(Debug, thiserror::Error)]
pub enum ProcessingError {
    #[error("Sequential thinking processing failed: {0}")]
    Analysis(String),
}

/// Result type alias for the thinking core.
pub type Result<T> = std::result::Result<T, ProcessingError>;
