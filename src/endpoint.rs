//! Space resolution.
//!
//! A space is given either as a bare host (`example.signalwire.com`) or as a
//! URL (`http://example.com/foo`). Both resolve to an `https` base URL that the
//! API and fax domains share.

use crate::{Error, ErrorContext, Result};
use std::fmt;
use url::Url;

/// Host used when a space is given explicitly but blank.
pub const DEFAULT_SPACE_HOST: &str = "api.signalwire.com";

/// Resolved `https://host[:port][/path]` base URL, without a trailing slash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpaceUrl {
    base: String,
    host: String,
}

impl SpaceUrl {
    pub fn resolve(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let candidate = if trimmed.is_empty() {
            DEFAULT_SPACE_HOST
        } else {
            trimmed
        };

        // Whatever scheme was given is replaced; a bare host has none to strip.
        let rest = strip_scheme(candidate);

        let parsed = Url::parse(&format!("https://{rest}")).map_err(|e| invalid(input, e.to_string()))?;
        let host = parsed
            .host_str()
            .filter(|h| !h.is_empty())
            .ok_or_else(|| invalid(input, "no host".to_string()))?
            .to_string();

        let authority = match parsed.port() {
            Some(port) => format!("{host}:{port}"),
            None => host.clone(),
        };
        let path = parsed.path().trim_end_matches('/');

        Ok(Self {
            base: format!("https://{authority}{path}"),
            host,
        })
    }

    /// Use `base_url` as-is, scheme included. Meant for pointing a client at a
    /// local mock server; production code should go through [`resolve`](Self::resolve).
    pub fn verbatim(base_url: &str) -> Result<Self> {
        let parsed = Url::parse(base_url.trim()).map_err(|e| invalid(base_url, e.to_string()))?;
        let host = parsed
            .host_str()
            .ok_or_else(|| invalid(base_url, "no host".to_string()))?
            .to_string();
        Ok(Self {
            base: base_url.trim().trim_end_matches('/').to_string(),
            host,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.base
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// Join a server-relative URI (`/2010-04-01/...`) onto the base. Absolute
    /// URLs pass through unchanged.
    pub fn absolute_url(&self, uri: &str) -> String {
        if uri.starts_with("https://") || uri.starts_with("http://") {
            return uri.to_string();
        }
        format!("{}/{}", self.base, uri.trim_start_matches('/'))
    }
}

impl fmt::Display for SpaceUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.base)
    }
}

/// Drop a leading `scheme://`. Only a real scheme at the very start counts, so
/// a `://` inside a path or query never moves the host.
fn strip_scheme(input: &str) -> &str {
    let Some((scheme, rest)) = input.split_once("://") else {
        return input;
    };
    let mut chars = scheme.chars();
    let valid = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    if valid {
        rest
    } else {
        input
    }
}

fn invalid(input: &str, details: String) -> Error {
    Error::configuration_with_context(
        format!("cannot resolve space '{input}'"),
        ErrorContext::new()
            .with_field_path("space_url")
            .with_details(details)
            .with_source("space_resolver"),
    )
}
