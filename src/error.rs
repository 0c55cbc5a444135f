use thiserror::Error;

/// The external classifier failed for a frame (no usable face, backend
/// error, or output outside the fixed schema).
#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct ClassificationError(pub String);

/// Insight generation failed. Best-effort: never blocks report export.
#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct InsightError(pub String);

/// Error taxonomy of the aggregation engine.
///
/// A failing session never corrupts the store or other sessions; none of
/// these are fatal to the process.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("session not found: {0}")]
    NotFound(String),

    #[error("session {0} is closed and no longer accepts frames")]
    InvalidState(String),

    #[error("session {0} has no frames yet")]
    EmptySession(String),

    #[error("classification failed: {0}")]
    Classification(#[from] ClassificationError),

    #[error("insight generation failed: {0}")]
    InsightUnavailable(#[from] InsightError),
}
