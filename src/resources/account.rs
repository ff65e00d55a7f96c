use super::{IdentityKey, Instance, ResourceKind};
use crate::schema::{FieldSpec, Schema};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Account;

pub type AccountInstance = Instance<Account>;

const TABLE: Schema = Schema {
    resource: "account",
    fields: &[
        FieldSpec::required("auth_token"),
        FieldSpec::required("date_created").datetime(),
        FieldSpec::required("date_updated").datetime(),
        FieldSpec::required("friendly_name"),
        FieldSpec::optional("owner_account_sid"),
        FieldSpec::required("sid"),
        FieldSpec::required("status"),
        FieldSpec::required("subresource_uris"),
        FieldSpec::required("type"),
        FieldSpec::required("uri"),
    ],
};

impl ResourceKind for Account {
    const NAME: &'static str = "account";
    const SCHEMA: &'static Schema = &TABLE;
    const IDENTITY: &'static [IdentityKey] = &[IdentityKey::or_payload("sid", "sid")];
    const LIST_KEY: &'static str = "accounts";
}
