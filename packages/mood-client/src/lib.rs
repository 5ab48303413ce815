//! LLM-backed mood classification client for Cadenza
//!
//! This crate provides a client for classifying free-text journal
//! entries into a mood label via an Ollama-style chat endpoint. The
//! model is treated as a black box: [`MoodClient::classify`] returns the
//! model's raw answer string, and the caller is responsible for
//! validating it against the closed mood set and applying a default on
//! mismatch or error.
//!
//! # Requirements
//!
//! - Ollama must be running and accessible at the configured URL
//! - The configured model must be pulled before use:
//!   ```bash
//!   ollama pull mistral
//!   ```
//!
//! # Example
//!
//! ```rust,no_run
//! use cadenza_mood_client::MoodClient;
//! use cadenza_shared_config::MoodModelConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = MoodModelConfig::from_env()?;
//! let client = MoodClient::new(&config)?;
//!
//! let label = client.classify("Finals are over and the sun is out!").await?;
//! println!("model says: {}", label);
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod models;

pub use client::MoodClient;
pub use error::{MoodClientError, MoodClientResult};
pub use models::{ChatMessage, ChatOptions, ChatRequest, ChatResponse, ChatRole};
