use super::{ResourceContext, ResourceList, Version};
use crate::resources::{Fax, Solution};

/// Fax API. Its version path already carries the project, so fax URIs are
/// plain `/Faxes[/{sid}]`.
#[derive(Debug, Clone)]
pub struct FaxDomain {
    version: Version,
}

impl FaxDomain {
    pub(crate) fn new(version: Version) -> Self {
        Self { version }
    }

    /// Version path for `project_id`: `2010-04-01/Accounts/{project_id}`.
    pub fn version_path(project_id: &str) -> String {
        format!("{}/Accounts/{project_id}", super::API_VERSION)
    }

    pub fn version(&self) -> &Version {
        &self.version
    }

    pub fn faxes(&self) -> ResourceList<Fax> {
        ResourceList::new(self.version.clone(), "/Faxes".to_string(), Solution::new())
    }

    pub fn fax(&self, sid: &str) -> ResourceContext<Fax> {
        ResourceContext::new(
            self.version.clone(),
            format!("/Faxes/{sid}"),
            Solution::new().with("sid", sid),
        )
    }
}
