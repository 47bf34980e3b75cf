use thiserror::Error;

/// Failures surfaced to the caller of the aggregation pipeline.
///
/// Malformed rows are never reported here; they are dropped as a [`Discard`].
#[derive(Debug, Error)]
pub enum SpendError {
    #[error("No valid data found")]
    NoValidData,
    #[error("Numeric overflow while summing {0}")]
    Overflow(String),
    #[error("Failed to read CSV input: {0}")]
    Io(#[from] std::io::Error),
    #[error("Background task failed: {0}")]
    Task(#[from] tokio::task::JoinError)
}

/// The rule that caused a row to be dropped.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum Discard {
    #[error("missing [{0}] column")]
    MissingField(&'static str),
    #[error("label marks a non-spend transaction")]
    NonSpendLabel,
    #[error("amount is not a finite decimal")]
    InvalidAmount,
    #[error("date does not match the configured format")]
    InvalidDate
}
