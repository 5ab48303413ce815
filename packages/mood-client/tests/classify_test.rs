//! Integration tests for mood classification against a mock model server

use cadenza_mood_client::{MoodClient, MoodClientError};
use cadenza_shared_config::MoodModelConfig;
use cadenza_test_utils::MockMoodServer;

fn client_for(server: &MockMoodServer) -> MoodClient {
    MoodClient::new(&MoodModelConfig::with_url(server.url()))
        .expect("client construction should succeed")
}

#[tokio::test]
async fn test_classify_returns_model_label() {
    let server = MockMoodServer::start().await;
    server.mock_classification("Happy").await;

    let client = client_for(&server);

    let label = client
        .classify("Finals are over and the sun is out!")
        .await
        .unwrap();
    assert_eq!(label, "Happy");
}

#[tokio::test]
async fn test_classify_keeps_first_line_of_verbose_answers() {
    let server = MockMoodServer::start().await;
    server.mock_verbose_classification("Nostalgic").await;

    let client = client_for(&server);

    let label = client
        .classify("Found my old mixtapes in a drawer today")
        .await
        .unwrap();
    assert_eq!(label, "Nostalgic");
}

#[tokio::test]
async fn test_classify_does_not_validate_the_label() {
    let server = MockMoodServer::start().await;
    // The model may answer anything; validation is the caller's job
    server.mock_classification("Bored").await;

    let client = client_for(&server);

    let label = client.classify("meh").await.unwrap();
    assert_eq!(label, "Bored");
}

#[tokio::test]
async fn test_classify_server_error() {
    let server = MockMoodServer::start().await;
    server.mock_failure(500, "model crashed").await;

    let client = client_for(&server);

    let result = client.classify("anything").await;
    assert!(matches!(result, Err(MoodClientError::Api(_))));
}

#[tokio::test]
async fn test_classify_model_not_found() {
    let server = MockMoodServer::start().await;
    server.mock_model_not_found().await;

    let client = client_for(&server);

    let result = client.classify("anything").await;
    assert!(matches!(result, Err(MoodClientError::ModelNotFound(_))));
}

#[tokio::test]
async fn test_classify_empty_answer_is_an_error() {
    let server = MockMoodServer::start().await;
    server.mock_classification("").await;

    let client = client_for(&server);

    let result = client.classify("anything").await;
    assert!(matches!(result, Err(MoodClientError::EmptyResponse)));
}

#[tokio::test]
async fn test_health_check() {
    let server = MockMoodServer::start().await;
    server.mock_list_models(&["mistral"]).await;

    let client = client_for(&server);

    assert!(client.health_check().await.unwrap());
}
