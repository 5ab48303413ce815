//! Integration tests for the Spotify client against a mock server

use assert_matches::assert_matches;
use cadenza_catalog_client::{CatalogClient, ProviderError, SpotifyClient};
use cadenza_shared_config::SpotifyConfig;
use cadenza_test_utils::MockSpotifyServer;

fn client_for(server: &MockSpotifyServer) -> SpotifyClient {
    let config = SpotifyConfig::new("test-id", "test-secret").with_base_url(server.url());
    SpotifyClient::new(&config).expect("client construction should succeed")
}

fn seeds() -> (Vec<String>, Vec<String>, Vec<String>) {
    (
        vec!["pop".to_string()],
        vec!["artist-1".to_string()],
        vec!["track-1".to_string()],
    )
}

#[tokio::test]
async fn test_recommend_parses_tracks() {
    let server = MockSpotifyServer::start().await;
    server.mock_token_success().await;
    server
        .mock_recommendations(&[("Cruel Summer", "Taylor Swift"), ("Faded", "Alan Walker")])
        .await;

    let client = client_for(&server);
    let (genres, artists, tracks) = seeds();

    let result = client
        .recommend(&genres, &artists, &tracks, 10)
        .await
        .unwrap();

    assert_eq!(result.len(), 2);
    assert_eq!(result[0].title.as_deref(), Some("Cruel Summer"));
    assert_eq!(result[0].artist.as_deref(), Some("Taylor Swift"));
    // All three artwork renditions are surfaced, largest first
    assert_eq!(result[0].artwork.len(), 3);
    assert_eq!(result[0].artwork[0].width, Some(640));
    assert!(result[0].preview_url.is_some());
}

#[tokio::test]
async fn test_recommend_empty_body_is_ok_empty() {
    let server = MockSpotifyServer::start().await;
    server.mock_token_success().await;
    server.mock_recommendations(&[]).await;

    let client = client_for(&server);
    let (genres, artists, tracks) = seeds();

    let result = client
        .recommend(&genres, &artists, &tracks, 10)
        .await
        .unwrap();

    assert!(result.is_empty());
}

#[tokio::test]
async fn test_recommend_surfaces_api_error() {
    let server = MockSpotifyServer::start().await;
    server.mock_token_success().await;
    server
        .mock_recommendations_failure(404, "Not Found")
        .await;

    let client = client_for(&server);
    let (genres, artists, tracks) = seeds();

    let result = client.recommend(&genres, &artists, &tracks, 10).await;
    assert_matches!(result, Err(ProviderError::Api { status: 404, .. }));
}

#[tokio::test]
async fn test_rejected_credentials_surface_as_auth_error() {
    let server = MockSpotifyServer::start().await;
    server.mock_token_rejected().await;

    let client = client_for(&server);
    let (genres, artists, tracks) = seeds();

    let result = client.recommend(&genres, &artists, &tracks, 10).await;
    assert_matches!(result, Err(ProviderError::AuthRejected(_)));
}

#[tokio::test]
async fn test_rate_limit_is_typed() {
    let server = MockSpotifyServer::start().await;
    server.mock_token_success().await;
    server.mock_rate_limited().await;

    let client = client_for(&server);

    let result = client.search_tracks("Taylor Swift", "happy", 10).await;
    assert_matches!(result, Err(ProviderError::RateLimited));
}

#[tokio::test]
async fn test_search_parses_nested_page() {
    let server = MockSpotifyServer::start().await;
    server.mock_token_success().await;
    server.mock_search(&[("Perfect", "Ed Sheeran")]).await;

    let client = client_for(&server);

    let result = client.search_tracks("Ed Sheeran", "love", 10).await.unwrap();
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].title.as_deref(), Some("Perfect"));
    assert_eq!(result[0].album.as_deref(), Some("Test Album"));
}

#[tokio::test]
async fn test_artist_top_tracks_truncates_to_limit() {
    let server = MockSpotifyServer::start().await;
    server.mock_token_success().await;
    server
        .mock_artist_top_tracks(
            "artist-1",
            &[("One", "A"), ("Two", "A"), ("Three", "A"), ("Four", "A")],
        )
        .await;

    let client = client_for(&server);

    let result = client.artist_top_tracks("artist-1", 2).await.unwrap();
    assert_eq!(result.len(), 2);
}

#[tokio::test]
async fn test_token_is_fetched_once_and_reused() {
    let server = MockSpotifyServer::start().await;
    server.mock_token_success().await;
    server.mock_search(&[("Stay", "Justin Bieber")]).await;

    let client = client_for(&server);

    client.search_tracks("Justin Bieber", "pop", 5).await.unwrap();
    client.search_tracks("Justin Bieber", "pop", 5).await.unwrap();

    let token_requests = server
        .inner()
        .received_requests()
        .await
        .unwrap()
        .iter()
        .filter(|r| r.url.path() == "/api/token")
        .count();
    assert_eq!(token_requests, 1);
}

#[tokio::test]
async fn test_chart_by_genre_is_unsupported() {
    let server = MockSpotifyServer::start().await;
    let client = client_for(&server);

    let result = client.chart_by_genre("pop", 10).await;
    assert_matches!(result, Err(ProviderError::Unsupported(_)));
}
