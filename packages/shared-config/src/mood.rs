//! Mood classification model configuration types

use crate::{get_env_or_default, parse_env, ConfigResult};

/// Configuration for the Ollama-backed mood classification model
#[derive(Debug, Clone)]
pub struct MoodModelConfig {
    /// Ollama server URL
    pub url: String,

    /// LLM model for classification (e.g., mistral, llama2)
    pub model: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// Maximum tokens for generation
    pub max_tokens: u32,

    /// Temperature for generation (0.0 - 1.0)
    pub temperature: f32,
}

impl MoodModelConfig {
    /// Load mood model configuration from environment variables
    pub fn from_env() -> ConfigResult<Self> {
        Ok(Self {
            url: get_env_or_default("OLLAMA_URL", "http://localhost:11434"),
            model: get_env_or_default("OLLAMA_MODEL", "mistral"),
            timeout_secs: parse_env("OLLAMA_TIMEOUT", 30)?,
            max_tokens: parse_env("OLLAMA_MAX_TOKENS", 16)?,
            temperature: parse_env("OLLAMA_TEMPERATURE", 0.0)?,
        })
    }

    /// Create a configuration with a custom URL (useful for testing)
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// Get the full URL for the chat endpoint
    pub fn chat_url(&self) -> String {
        format!("{}/api/chat", self.url.trim_end_matches('/'))
    }

    /// Get the full URL for the model listing endpoint
    pub fn tags_url(&self) -> String {
        format!("{}/api/tags", self.url.trim_end_matches('/'))
    }
}

impl Default for MoodModelConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:11434".to_string(),
            model: "mistral".to_string(),
            timeout_secs: 30,
            // A single mood word is all we ever ask for
            max_tokens: 16,
            temperature: 0.0,
        }
    }
}
