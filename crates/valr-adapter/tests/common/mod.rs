/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for valr-adapter tests

use valr_adapter::{ClientConfig, Credentials, ValrClient};
use wiremock::MockServer;

/// Secret used by VALR's published signing examples
pub const TEST_API_SECRET: &str =
    "4961b74efac86b25cce8fbe4c9811c4c7a787b7a5996660afcc2e287ad864363";

pub const TEST_API_KEY: &str = "test-api-key";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

pub fn test_credentials() -> Credentials {
    Credentials::new(TEST_API_KEY, TEST_API_SECRET)
}

/// Client pointed at the mock server, mounted under `/v1` like the live API
pub fn private_client(server: &MockServer) -> ValrClient {
    ValrClient::with_config(
        ClientConfig::default().with_base_url(format!("{}/v1", server.uri())),
        Some(test_credentials()),
    )
    .expect("client should build against mock server")
}

#[allow(dead_code)]
pub fn public_client(server: &MockServer) -> ValrClient {
    private_client(server).to_public()
}

/// Balances payload as documented for GET /v1/account/balances
#[allow(dead_code)]
pub fn balances_fixture() -> serde_json::Value {
    serde_json::json!([
        {
            "currency": "ETH",
            "available": "0.01626594758",
            "reserved": "0.49",
            "total": "0.50626594758",
            "updatedAt": "2020-05-31T05:10:16.522Z"
        },
        {
            "currency": "ZAR",
            "available": "450.01",
            "reserved": "0",
            "total": "450.01",
            "updatedAt": "2020-05-31T05:10:16.522Z"
        }
    ])
}
