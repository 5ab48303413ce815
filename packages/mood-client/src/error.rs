//! Mood classification client error types

use thiserror::Error;

/// Errors raised by the mood classification client
#[derive(Error, Debug)]
pub enum MoodClientError {
    /// Could not connect to the model server
    #[error("connection refused to model server at {0}")]
    ConnectionRefused(String),

    /// Request timed out
    #[error("model request timed out after {0} seconds")]
    Timeout(u64),

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing failed
    #[error("failed to parse model response: {0}")]
    Parse(#[from] serde_json::Error),

    /// Model server returned an error response
    #[error("model API error: {0}")]
    Api(String),

    /// Requested model is not available on the server
    #[error("model not found: {0}")]
    ModelNotFound(String),

    /// The model returned an empty response
    #[error("model returned an empty response")]
    EmptyResponse,
}

/// Result type for mood classification operations
pub type MoodClientResult<T> = Result<T, MoodClientError>;
