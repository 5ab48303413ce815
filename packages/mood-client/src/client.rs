//! Ollama-backed mood classification client

use std::time::Duration;

use cadenza_shared_config::MoodModelConfig;
use reqwest::Client;
use tracing::{debug, instrument};

use crate::error::{MoodClientError, MoodClientResult};
use crate::models::{ChatMessage, ChatOptions, ChatRequest, ChatResponse};

/// Maximum error body size kept for diagnostics
const MAX_ERROR_BODY_SIZE: usize = 1000;

/// System prompt constraining the model to the closed mood vocabulary
///
/// The client does not validate the answer against the list; that is the
/// caller's job, so the coercion-to-default policy lives in exactly one
/// place.
const CLASSIFY_SYSTEM_PROMPT: &str = "You classify the mood of a short journal entry.\n\
    Choose the single most dominant mood from this list: Happy, Energetic, Relaxed, Calm, \
    Sad, Anxious, Focused, Romantic, Nostalgic, Excited, Sleepy, Angry.\n\
    Respond with only the mood name, one word from the list above, and nothing else.";

/// Mood classification client
///
/// A thin wrapper over an Ollama-style chat endpoint. `Clone + Send +
/// Sync`; the underlying HTTP connection pool is shared across clones.
#[derive(Debug, Clone)]
pub struct MoodClient {
    http_client: Client,
    config: MoodModelConfig,
}

impl MoodClient {
    /// Create a new mood classification client from configuration
    pub fn new(config: &MoodModelConfig) -> MoodClientResult<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .pool_max_idle_per_host(5)
            .build()
            .map_err(MoodClientError::Http)?;

        Ok(Self {
            http_client,
            config: config.clone(),
        })
    }

    /// Get the configuration
    pub fn config(&self) -> &MoodModelConfig {
        &self.config
    }

    /// Truncate error body to keep diagnostics bounded
    /// Safely handles UTF-8 boundaries to avoid panics on multi-byte characters
    fn truncate_error_body(body: String) -> String {
        if body.len() <= MAX_ERROR_BODY_SIZE {
            return body;
        }

        let truncate_at = body
            .char_indices()
            .map(|(i, _)| i)
            .take_while(|i| *i <= MAX_ERROR_BODY_SIZE)
            .last()
            .unwrap_or(0);

        format!("{}... (truncated)", &body[..truncate_at])
    }

    /// Check if the model server is reachable
    pub async fn health_check(&self) -> MoodClientResult<bool> {
        match self.http_client.get(self.config.tags_url()).send().await {
            Ok(response) => Ok(response.status().is_success()),
            Err(e) if e.is_connect() => {
                Err(MoodClientError::ConnectionRefused(self.config.url.clone()))
            }
            Err(e) => Err(MoodClientError::Http(e)),
        }
    }

    /// Classify the mood of a free-text journal entry
    ///
    /// Sends a single chat request and returns the model's raw answer,
    /// trimmed to its first line. The answer may be any string; callers
    /// must validate it against their closed mood set and substitute a
    /// default on mismatch.
    #[instrument(skip(self, journal_text), fields(text_len = journal_text.len()))]
    pub async fn classify(&self, journal_text: &str) -> MoodClientResult<String> {
        let request = ChatRequest {
            model: self.config.model.clone(),
            messages: vec![
                ChatMessage::system(CLASSIFY_SYSTEM_PROMPT),
                ChatMessage::user(journal_text),
            ],
            stream: false,
            options: Some(ChatOptions {
                temperature: Some(self.config.temperature),
                num_predict: Some(self.config.max_tokens),
            }),
        };

        let response = self
            .http_client
            .post(self.config.chat_url())
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    MoodClientError::ConnectionRefused(self.config.url.clone())
                } else if e.is_timeout() {
                    MoodClientError::Timeout(self.config.timeout_secs)
                } else {
                    MoodClientError::Http(e)
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = Self::truncate_error_body(response.text().await.unwrap_or_default());

            if body.contains("model") && body.contains("not found") {
                return Err(MoodClientError::ModelNotFound(self.config.model.clone()));
            }

            return Err(MoodClientError::Api(format!("Status {}: {}", status, body)));
        }

        let chat_response: ChatResponse = response.json().await?;
        let label = chat_response
            .message
            .content
            .lines()
            .next()
            .unwrap_or_default()
            .trim()
            .to_string();

        if label.is_empty() {
            return Err(MoodClientError::EmptyResponse);
        }

        debug!(label = %label, "Mood classified");

        Ok(label)
    }
}
