use super::{ResourceContext, ResourceList, Version};
use crate::resources::{
    Account, Application, IncomingPhoneNumber, Local, Recording, Solution, TollFree, Transcription,
};
use crate::search::NumberSearch;

/// The `2010-04-01` REST API, scoped to the project's own account.
#[derive(Debug, Clone)]
pub struct ApiDomain {
    version: Version,
    account_sid: String,
}

impl ApiDomain {
    pub(crate) fn new(version: Version, account_sid: impl Into<String>) -> Self {
        Self {
            version,
            account_sid: account_sid.into(),
        }
    }

    pub fn version(&self) -> &Version {
        &self.version
    }

    pub fn account_sid(&self) -> &str {
        &self.account_sid
    }

    fn scoped(&self) -> Solution {
        Solution::new().with("account_sid", self.account_sid.as_str())
    }

    fn list<K: crate::resources::ResourceKind>(&self, collection: &str) -> ResourceList<K> {
        ResourceList::new(
            self.version.clone(),
            format!("/Accounts/{}/{collection}.json", self.account_sid),
            self.scoped(),
        )
    }

    fn context<K: crate::resources::ResourceKind>(&self, collection: &str, sid: &str) -> ResourceContext<K> {
        ResourceContext::new(
            self.version.clone(),
            format!("/Accounts/{}/{collection}/{sid}.json", self.account_sid),
            self.scoped().with("sid", sid),
        )
    }

    /// The project's own account.
    pub fn account(&self) -> ResourceContext<Account> {
        self.account_by_sid(&self.account_sid)
    }

    pub fn account_by_sid(&self, sid: &str) -> ResourceContext<Account> {
        ResourceContext::new(
            self.version.clone(),
            format!("/Accounts/{sid}.json"),
            Solution::new().with("sid", sid),
        )
    }

    /// Accounts visible to the project (itself and its subprojects).
    pub fn accounts(&self) -> ResourceList<Account> {
        ResourceList::new(self.version.clone(), "/Accounts.json".to_string(), Solution::new())
    }

    pub fn applications(&self) -> ResourceList<Application> {
        self.list("Applications")
    }

    pub fn application(&self, sid: &str) -> ResourceContext<Application> {
        self.context("Applications", sid)
    }

    pub fn incoming_phone_numbers(&self) -> ResourceList<IncomingPhoneNumber> {
        self.list("IncomingPhoneNumbers")
    }

    pub fn incoming_phone_number(&self, sid: &str) -> ResourceContext<IncomingPhoneNumber> {
        self.context("IncomingPhoneNumbers", sid)
    }

    pub fn recordings(&self) -> ResourceList<Recording> {
        self.list("Recordings")
    }

    pub fn recording(&self, sid: &str) -> ResourceContext<Recording> {
        self.context("Recordings", sid)
    }

    pub fn transcriptions(&self) -> ResourceList<Transcription> {
        self.list("Transcriptions")
    }

    pub fn transcription(&self, sid: &str) -> ResourceContext<Transcription> {
        self.context("Transcriptions", sid)
    }

    /// Numbers available for purchase in `country_code` (ISO 3166-1 alpha-2).
    pub fn available_phone_numbers(&self, country_code: &str) -> AvailablePhoneNumbers {
        AvailablePhoneNumbers {
            version: self.version.clone(),
            account_sid: self.account_sid.clone(),
            country_code: country_code.to_string(),
        }
    }
}

/// `/Accounts/{account_sid}/AvailablePhoneNumbers/{country_code}`.
#[derive(Debug, Clone)]
pub struct AvailablePhoneNumbers {
    version: Version,
    account_sid: String,
    country_code: String,
}

impl AvailablePhoneNumbers {
    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    fn search<K: crate::resources::ResourceKind>(&self, number_type: &str) -> ResourceList<K, NumberSearch> {
        ResourceList::new(
            self.version.clone(),
            format!(
                "/Accounts/{}/AvailablePhoneNumbers/{}/{number_type}.json",
                self.account_sid, self.country_code
            ),
            Solution::new()
                .with("account_sid", self.account_sid.as_str())
                .with("country_code", self.country_code.as_str()),
        )
    }

    pub fn local(&self) -> ResourceList<Local, NumberSearch> {
        self.search("Local")
    }

    pub fn toll_free(&self) -> ResourceList<TollFree, NumberSearch> {
        self.search("TollFree")
    }
}
