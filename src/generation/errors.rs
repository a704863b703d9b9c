use thiserror::Error;

/// Errors that can occur while generating a summary through the chat API
///
/// The response shape is validated explicitly instead of signalling failure
/// through the returned line sequence, so every failure carries a reason.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("generation credentials are not configured")]
    MissingCredentials,

    #[error("chat API request failed: {0}")]
    Transport(String),

    #[error("chat API returned status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("chat API returned an empty completion")]
    EmptyCompletion,

    #[error("expected exactly 3 summary lines, got {line_count}")]
    MalformedResponse { line_count: usize },
}

pub type GenerationResult<T> = Result<T, GenerationError>;
