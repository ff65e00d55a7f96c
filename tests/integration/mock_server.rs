//! Mock SignalWire space for integration tests.

use mockito::{Matcher, Mock, Server, ServerGuard};
use signalwire_rest::{Client, ClientConfig};
use std::sync::Arc;
use tokio::sync::Mutex;

pub const PROJECT_ID: &str = "PJ0000000000000000000000000000000";

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

    /// Create a client whose space is the mock server.
    pub fn client(&self) -> Client {
        let config = ClientConfig::new(PROJECT_ID, "secret-token").base_url_override(&self.base_url);
        Client::new(config).expect("client against mock server")
    }

    /// Mock a GET returning `body` with `status`, for requests whose query
    /// matches `query`, expected exactly `hits` times.
    pub async fn mock_get(&self, path: &str, query: Matcher, status: usize, body: &str, hits: usize) -> Mock {
        let mut server = self.server.lock().await;
        server
            .mock("GET", path)
            .match_query(query)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .expect(hits)
            .create_async()
            .await
    }
}
