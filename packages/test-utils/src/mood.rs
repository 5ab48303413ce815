//! Mock Ollama-style server for mood classification tests

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Mock mood model server
///
/// Simulates the Ollama chat endpoint so classification can be tested
/// without a running model.
pub struct MockMoodServer {
    server: MockServer,
}

impl MockMoodServer {
    /// Start a new mock mood model server
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Get the server URL
    pub fn url(&self) -> String {
        self.server.uri()
    }

    /// Get reference to the underlying mock server for custom setups
    pub fn inner(&self) -> &MockServer {
        &self.server
    }

    /// Mount a mock that classifies every entry as the given label
    pub async fn mock_classification(&self, label: &str) {
        Mock::given(method("POST"))
            .and(path("/api/chat"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "model": "mistral",
                "message": {"role": "assistant", "content": label},
                "done": true
            })))
            .mount(&self.server)
            .await;
    }

    /// Mount a mock whose answer wraps the label in extra chatter,
    /// as smaller models tend to do
    pub async fn mock_verbose_classification(&self, label: &str) {
        let content = format!("{}\n\nI chose this because of the overall tone.", label);
        Mock::given(method("POST"))
            .and(path("/api/chat"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "model": "mistral",
                "message": {"role": "assistant", "content": content},
                "done": true
            })))
            .mount(&self.server)
            .await;
    }

    /// Mount a mock for chat failure with the given status
    pub async fn mock_failure(&self, status_code: u16, error_message: &str) {
        Mock::given(method("POST"))
            .and(path("/api/chat"))
            .respond_with(
                ResponseTemplate::new(status_code)
                    .set_body_json(json!({ "error": error_message })),
            )
            .mount(&self.server)
            .await;
    }

    /// Mount a mock for the model-not-found error
    pub async fn mock_model_not_found(&self) {
        Mock::given(method("POST"))
            .and(path("/api/chat"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "error": "model 'mistral' not found, try pulling it first"
            })))
            .mount(&self.server)
            .await;
    }

    /// Mount a mock for the /api/tags endpoint (health checks)
    pub async fn mock_list_models(&self, models: &[&str]) {
        let model_list: Vec<serde_json::Value> = models
            .iter()
            .map(|name| json!({"name": name, "size": 4_000_000_000_i64}))
            .collect();

        Mock::given(method("GET"))
            .and(path("/api/tags"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "models": model_list })))
            .mount(&self.server)
            .await;
    }
}
