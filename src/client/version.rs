use crate::endpoint::SpaceUrl;
use crate::transport::HttpTransport;
use crate::Result;
use serde_json::Value;
use std::sync::Arc;

/// Version path of the classic REST API.
pub const API_VERSION: &str = "2010-04-01";

/// One versioned API root: `<space>/<path>`, plus the transport used to reach it.
#[derive(Clone)]
pub struct Version {
    transport: Arc<HttpTransport>,
    space: SpaceUrl,
    path: String,
}

impl Version {
    pub(crate) fn new(transport: Arc<HttpTransport>, space: SpaceUrl, path: impl Into<String>) -> Self {
        Self {
            transport,
            space,
            path: path.into().trim_matches('/').to_string(),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn space(&self) -> &SpaceUrl {
        &self.space
    }

    /// Full URL of a resource URI relative to this version (`/Accounts/AC1.json`).
    pub fn url(&self, uri: &str) -> String {
        format!("{}/{}/{}", self.space.as_str(), self.path, uri.trim_start_matches('/'))
    }

    /// Full URL of a server-relative URI such as a `next_page_uri`.
    pub fn absolute_url(&self, uri: &str) -> String {
        self.space.absolute_url(uri)
    }

    pub async fn get(&self, url: &str, params: &[(&'static str, String)]) -> Result<Value> {
        self.transport.get(url, params).await
    }
}

impl std::fmt::Debug for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Version")
            .field("space", &self.space.as_str())
            .field("path", &self.path)
            .finish()
    }
}
