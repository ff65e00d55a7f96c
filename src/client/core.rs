use super::{ApiDomain, FaxDomain, Version, API_VERSION};
use crate::config::ClientConfig;
use crate::endpoint::SpaceUrl;
use crate::transport::HttpTransport;
use crate::{Error, ErrorContext, Result};
use std::sync::Arc;
use tracing::info;

/// Entry point: one resolved space, one authenticated transport, and the
/// domains built on them. Cloning shares the transport.
#[derive(Debug, Clone)]
pub struct Client {
    space: SpaceUrl,
    project_id: String,
    api: ApiDomain,
    fax: FaxDomain,
}

impl Client {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let space = match (&config.base_url_override, &config.space_url) {
            (Some(base), _) => SpaceUrl::verbatim(base)?,
            (None, Some(space)) => SpaceUrl::resolve(space)?,
            (None, None) => {
                return Err(Error::configuration_with_context(
                    "no SignalWire space configured",
                    ErrorContext::new()
                        .with_field_path("space_url")
                        .with_details(format!("set it explicitly or via {}", crate::config::SPACE_URL_ENV))
                        .with_source("client"),
                ))
            }
        };

        let transport = Arc::new(HttpTransport::new(&config)?);
        let api = ApiDomain::new(
            Version::new(transport.clone(), space.clone(), API_VERSION),
            config.project_id.as_str(),
        );
        let fax = FaxDomain::new(Version::new(
            transport,
            space.clone(),
            FaxDomain::version_path(&config.project_id),
        ));

        info!(space = %space, project_id = %config.project_id, "signalwire client ready");

        Ok(Self {
            space,
            project_id: config.project_id,
            api,
            fax,
        })
    }

    /// Client configured from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    pub fn space(&self) -> &SpaceUrl {
        &self.space
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    pub fn api(&self) -> &ApiDomain {
        &self.api
    }

    pub fn fax(&self) -> &FaxDomain {
        &self.fax
    }
}
