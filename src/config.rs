//! Client configuration.
//!
//! [`ClientConfig`] is a plain value. The process environment is consulted
//! only by [`ClientConfig::from_env`] and [`ClientConfig::with_env`], so the
//! facade and transport never read globals.

use crate::{Error, ErrorContext, Result};
use std::time::Duration;

pub const SPACE_URL_ENV: &str = "SIGNALWIRE_SPACE_URL";
pub const PROJECT_ID_ENV: &str = "SIGNALWIRE_PROJECT_ID";
pub const TOKEN_ENV: &str = "SIGNALWIRE_TOKEN";
pub const HTTP_TIMEOUT_ENV: &str = "SIGNALWIRE_HTTP_TIMEOUT_SECS";
pub const PROXY_URL_ENV: &str = "SIGNALWIRE_PROXY_URL";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Clone)]
pub struct ClientConfig {
    /// Project id; doubles as the account sid in resource paths.
    pub project_id: String,
    pub auth_token: String,
    /// Space host or URL. `None` means "not configured".
    pub space_url: Option<String>,
    pub timeout: Duration,
    pub proxy_url: Option<String>,
    /// Base URL used verbatim instead of the resolved space (mock servers).
    pub base_url_override: Option<String>,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("project_id", &self.project_id)
            .field("auth_token", &"<redacted>")
            .field("space_url", &self.space_url)
            .field("timeout", &self.timeout)
            .field("proxy_url", &self.proxy_url)
            .field("base_url_override", &self.base_url_override)
            .finish()
    }
}

impl ClientConfig {
    pub fn new(project_id: impl Into<String>, auth_token: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            auth_token: auth_token.into(),
            space_url: None,
            timeout: DEFAULT_TIMEOUT,
            proxy_url: None,
            base_url_override: None,
        }
    }

    /// Credentials and overrides taken entirely from the environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env) but over an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key).filter(|v| !v.trim().is_empty()).ok_or_else(|| {
                Error::configuration_with_context(
                    format!("{key} is not set"),
                    ErrorContext::new()
                        .with_field_path(key)
                        .with_source("client_config"),
                )
            })
        };
        let project_id = required(PROJECT_ID_ENV)?;
        let auth_token = required(TOKEN_ENV)?;
        Ok(Self::new(project_id, auth_token).with_lookup(&lookup))
    }

    pub fn with_space_url(mut self, space_url: impl Into<String>) -> Self {
        self.space_url = Some(space_url.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_proxy_url(mut self, proxy_url: impl Into<String>) -> Self {
        self.proxy_url = Some(proxy_url.into());
        self
    }

    /// Override the base URL, scheme included.
    ///
    /// This is primarily for testing with mock servers. In production, configure
    /// the space and let it resolve to `https`.
    pub fn base_url_override(mut self, base_url: impl Into<String>) -> Self {
        self.base_url_override = Some(base_url.into());
        self
    }

    /// Fill unset values from the process environment.
    pub fn with_env(self) -> Self {
        self.with_lookup(|key| std::env::var(key).ok())
    }

    /// Fill unset values from `lookup`. An explicit space always wins over
    /// `SIGNALWIRE_SPACE_URL`; the timeout is only overridden by a value that
    /// parses as whole seconds.
    pub fn with_lookup<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if self.space_url.is_none() {
            self.space_url = lookup(SPACE_URL_ENV).filter(|v| !v.trim().is_empty());
        }
        if let Some(secs) = lookup(HTTP_TIMEOUT_ENV).and_then(|s| s.trim().parse::<u64>().ok()) {
            self.timeout = Duration::from_secs(secs.max(1));
        }
        if self.proxy_url.is_none() {
            self.proxy_url = lookup(PROXY_URL_ENV).filter(|v| !v.trim().is_empty());
        }
        self
    }
}
