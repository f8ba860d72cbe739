//! Shared helpers for the client integration tests.
//!
//! Fixtures are loaded from the crate's `fixtures/` directory. Mock servers
//! are set up with wiremock directly in each test.

use std::time::Duration;

#[allow(unused_imports)]
pub use ism_client::testing::{error_envelope, load_fixture, ok_envelope};
#[allow(unused_imports)]
pub use ism_client::{AuthStrategy, IsmClient, endpoints};
#[allow(unused_imports)]
pub use reqwest::Client;
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

use secrecy::SecretString;

/// Bearer token credentials used by every mock.
#[allow(dead_code)]
pub fn test_auth() -> AuthStrategy {
    AuthStrategy::ApiToken {
        token: SecretString::new("test-token".to_string().into()),
    }
}

/// An [`IsmClient`] pointed at the mock server.
#[allow(dead_code)]
pub fn test_client(server: &MockServer) -> IsmClient {
    IsmClient::builder()
        .base_url(server.uri())
        .auth_strategy(test_auth())
        .max_retries(3)
        .build()
        .expect("client builds")
}

/// Advance Tokio's paused clock and yield so sleepers can observe the change.
#[allow(dead_code)]
pub async fn advance_and_yield(duration: Duration) {
    tokio::time::advance(duration).await;
    tokio::task::yield_now().await;
}

/// Assert that a task has not completed after yielding to the scheduler.
#[allow(dead_code)]
pub async fn assert_pending<T>(handle: &tokio::task::JoinHandle<T>, context: &str) {
    tokio::task::yield_now().await;
    assert!(!handle.is_finished(), "Expected pending task: {}", context);
}
