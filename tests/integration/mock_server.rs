//! Mock HTTP server setup for integration tests

use std::sync::Arc;
use std::time::Duration;

use eventstreams_admin::auth::Authenticator;
use eventstreams_admin::transport::RetryConfig;
use eventstreams_admin::{AdminrestV1, SchemaregistryV1};
use mockito::{Matcher, Mock, Server, ServerGuard};
use tokio::sync::Mutex;

/// Test fixture that manages a mock server
pub struct MockServerFixture {
    pub server: Arc<Mutex<ServerGuard>>,
    pub base_url: String,
}

impl MockServerFixture {
    pub async fn new() -> Self {
        let server = Server::new_async().await;
        let base_url = server.url();
        Self {
            server: Arc::new(Mutex::new(server)),
            base_url,
        }
    }

    /// Admin client pointed at the mock server
    pub fn admin_client(&self, authenticator: Authenticator) -> AdminrestV1 {
        AdminrestV1::builder()
            .service_url(&self.base_url)
            .authenticator(authenticator)
            .timeout(Duration::from_secs(5))
            .build()
            .expect("admin client")
    }

    /// Admin client that retries quickly
    pub fn retrying_admin_client(&self, max_retries: u32) -> AdminrestV1 {
        AdminrestV1::builder()
            .service_url(&self.base_url)
            .enable_retries(RetryConfig {
                max_retries,
                min_interval: Duration::from_millis(10),
                max_interval: Duration::from_millis(50),
            })
            .build()
            .expect("retrying admin client")
    }

    pub fn registry_client(&self) -> SchemaregistryV1 {
        SchemaregistryV1::builder()
            .service_url(&self.base_url)
            .build()
            .expect("registry client")
    }

    /// Create a mock for a successful JSON response
    pub async fn mock_json_response(&self, method: &str, path: &str, status: usize, body: &str) -> Mock {
        let mut server = self.server.lock().await;
        server
            .mock(method, path)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await
    }

    /// Create a mock for an error response hit exactly `hits` times
    pub async fn mock_error_response(
        &self,
        method: &str,
        path: &str,
        status: usize,
        error_body: &str,
        hits: usize,
    ) -> Mock {
        let mut server = self.server.lock().await;
        server
            .mock(method, path)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(error_body)
            .expect(hits)
            .create_async()
            .await
    }

    /// Create a mock that only matches a given `Authorization` header
    pub async fn mock_authorized(&self, method: &str, path: &str, authorization: &str) -> Mock {
        let mut server = self.server.lock().await;
        server
            .mock(method, path)
            .match_header("authorization", authorization)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("{}")
            .create_async()
            .await
    }

    /// Create a mock that checks the JSON body and query of a request
    pub async fn mock_matching(
        &self,
        method: &str,
        path: &str,
        query: Matcher,
        body: Matcher,
        status: usize,
    ) -> Mock {
        let mut server = self.server.lock().await;
        server
            .mock(method, path)
            .match_query(query)
            .match_body(body)
            .with_status(status)
            .create_async()
            .await
    }
}
