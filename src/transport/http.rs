use crate::config::ClientConfig;
use crate::rest_error::RestError;
use crate::Result;
use reqwest::{Method, Proxy};
use serde_json::Value;
use tracing::debug;

/// Authenticated JSON transport shared by every domain of a client.
pub struct HttpTransport {
    client: reqwest::Client,
    project_id: String,
    auth_token: String,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("signalwire-rest/", env!("CARGO_PKG_VERSION")));

        if let Some(proxy_url) = &config.proxy_url {
            let proxy = Proxy::all(proxy_url).map_err(|e| {
                crate::Error::configuration_with_context(
                    format!("invalid proxy URL '{proxy_url}'"),
                    crate::ErrorContext::new()
                        .with_field_path("proxy_url")
                        .with_details(e.to_string())
                        .with_source("http_transport"),
                )
            })?;
            builder = builder.proxy(proxy);
        }

        let client = builder
            .build()
            .map_err(|e| crate::Error::Transport(TransportError::Other(e.to_string())))?;

        Ok(Self {
            client,
            project_id: config.project_id.clone(),
            auth_token: config.auth_token.clone(),
        })
    }

    pub async fn get(&self, url: &str, params: &[(&'static str, String)]) -> Result<Value> {
        self.execute(Method::GET, url, params).await
    }

    /// Send one request and decode the JSON body. Non-2xx replies become
    /// [`crate::Error::Rest`].
    pub async fn execute(
        &self,
        method: Method,
        url: &str,
        params: &[(&'static str, String)],
    ) -> Result<Value> {
        debug!(method = %method, url, params = params.len(), "signalwire request");

        let mut request = self
            .client
            .request(method.clone(), url)
            .basic_auth(&self.project_id, Some(&self.auth_token))
            .header("accept", "application/json");
        if !params.is_empty() {
            request = request.query(params);
        }

        let response = request
            .send()
            .await
            .map_err(|e| crate::Error::Transport(TransportError::Http(e)))?;

        let status = response.status();
        // Error bodies name the request as sent, query string included.
        let sent_url = response.url().to_string();
        let body = response
            .text()
            .await
            .map_err(|e| crate::Error::Transport(TransportError::Http(e)))?;

        if !status.is_success() {
            debug!(status = status.as_u16(), url = %sent_url, "signalwire request rejected");
            return Err(RestError::from_response(status, method.as_str(), &sent_url, &body).into());
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Transport error: {0}")]
    Other(String),
}
