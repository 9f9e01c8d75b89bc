use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum CoreError {
    #[error("Please select your pantry first.")]
    EmptyPantry,

    #[error("Could not extract recipe from video")]
    ExtractionFailed,

    #[error("Failed to analyze video")]
    AnalysisFailed,

    #[error("Failed to fetch captions")]
    CaptionsUnavailable,

    #[error("Invalid request: {0}")]
    Invalid(String),

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Internal server error")]
    InternalServerError,
}
