use super::{IdentityKey, Instance, ResourceKind};
use crate::schema::{FieldSpec, Schema};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Application;

pub type ApplicationInstance = Instance<Application>;

const TABLE: Schema = Schema {
    resource: "application",
    fields: &[
        FieldSpec::required("account_sid"),
        FieldSpec::required("api_version"),
        FieldSpec::required("date_created").datetime(),
        FieldSpec::required("date_updated").datetime(),
        FieldSpec::required("friendly_name"),
        FieldSpec::optional("message_status_callback"),
        FieldSpec::required("sid"),
        FieldSpec::required("sms_fallback_method"),
        FieldSpec::required("sms_fallback_url"),
        FieldSpec::required("sms_method"),
        FieldSpec::required("sms_status_callback"),
        FieldSpec::required("sms_url"),
        FieldSpec::required("status_callback"),
        FieldSpec::required("status_callback_method"),
        FieldSpec::required("uri"),
        FieldSpec::required("voice_caller_id_lookup"),
        FieldSpec::required("voice_fallback_method"),
        FieldSpec::required("voice_fallback_url"),
        FieldSpec::required("voice_method"),
        FieldSpec::required("voice_url"),
    ],
};

impl ResourceKind for Application {
    const NAME: &'static str = "application";
    const SCHEMA: &'static Schema = &TABLE;
    const IDENTITY: &'static [IdentityKey] = &[
        IdentityKey::param("account_sid"),
        IdentityKey::or_payload("sid", "sid"),
    ];
    const LIST_KEY: &'static str = "applications";
}
