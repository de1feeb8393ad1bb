/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for pointshub-adapter tests

use pointshub_adapter::{ClientConfig, PointsHubClient};
use wiremock::MockServer;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// API key fixture accepted by the mocked endpoints
pub fn mock_api_key() -> String {
    "phk_c29tZS10ZXN0LWtleQ".to_string()
}

/// Open a client pointed at the mock server, carrying the fixture key
pub fn connected_client(server: &MockServer) -> PointsHubClient {
    connected_client_with_config(server, ClientConfig::default())
}

/// Open a client pointed at the mock server with a custom configuration
pub fn connected_client_with_config(
    server: &MockServer,
    config: ClientConfig,
) -> PointsHubClient {
    let mut client = PointsHubClient::with_config_and_base_url(config, &server.uri())
        .expect("client init");
    client.set_api_key(mock_api_key());
    client.open().expect("open session");
    client
}
