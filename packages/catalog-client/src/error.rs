//! Catalog provider error types

use thiserror::Error;

/// Errors raised by catalog provider clients
///
/// Every variant except `MissingCredentials` is recoverable from the
/// resolver's point of view: it advances the fallback chain rather than
/// surfacing to the caller. `MissingCredentials` is a configuration
/// failure raised at client construction, before any network call.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Required credentials are missing or empty
    #[error("missing credentials for {0}")]
    MissingCredentials(&'static str),

    /// Seed combination is invalid or exceeds the provider's budget
    #[error("invalid seed combination: {0}")]
    InvalidSeeds(String),

    /// The provider does not expose this capability
    #[error("operation not supported by this provider: {0}")]
    Unsupported(&'static str),

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing failed
    #[error("failed to parse provider response: {0}")]
    Parse(#[from] serde_json::Error),

    /// Provider API returned an error response
    #[error("provider API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Provider rejected the credentials
    #[error("provider rejected credentials: {0}")]
    AuthRejected(String),

    /// Rate limited by the provider
    #[error("rate limited by provider API")]
    RateLimited,

    /// Request timeout
    #[error("request to provider timed out")]
    Timeout,
}

impl ProviderError {
    /// Whether this error indicates a configuration problem that cannot
    /// be recovered by falling back to another strategy
    pub fn is_configuration(&self) -> bool {
        matches!(self, ProviderError::MissingCredentials(_))
    }
}

/// Result type for catalog provider operations
pub type ProviderResult<T> = Result<T, ProviderError>;
