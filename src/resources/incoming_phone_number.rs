use super::{IdentityKey, Instance, ResourceKind};
use crate::schema::{FieldSpec, Schema};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IncomingPhoneNumber;

pub type IncomingPhoneNumberInstance = Instance<IncomingPhoneNumber>;

const TABLE: Schema = Schema {
    resource: "incoming_phone_number",
    fields: &[
        FieldSpec::optional("account_sid"),
        FieldSpec::optional("address_sid"),
        FieldSpec::optional("address_requirements"),
        FieldSpec::required("api_version"),
        FieldSpec::required("beta"),
        FieldSpec::required("capabilities"),
        FieldSpec::required("date_created").datetime(),
        FieldSpec::required("date_updated").datetime(),
        FieldSpec::required("friendly_name"),
        FieldSpec::optional("identity_sid"),
        FieldSpec::required("phone_number"),
        FieldSpec::optional("origin"),
        FieldSpec::required("sid"),
        FieldSpec::required("sms_application_sid"),
        FieldSpec::required("sms_fallback_method"),
        FieldSpec::required("sms_fallback_url"),
        FieldSpec::required("sms_method"),
        FieldSpec::required("sms_url"),
        FieldSpec::required("status_callback"),
        FieldSpec::required("status_callback_method"),
        FieldSpec::optional("trunk_sid"),
        FieldSpec::required("uri"),
        FieldSpec::required("voice_application_sid"),
        FieldSpec::required("voice_caller_id_lookup"),
        FieldSpec::required("voice_fallback_method"),
        FieldSpec::required("voice_fallback_url"),
        FieldSpec::required("voice_method"),
        FieldSpec::required("voice_url"),
        FieldSpec::optional("emergency_status"),
        FieldSpec::optional("emergency_address_sid"),
    ],
};

impl ResourceKind for IncomingPhoneNumber {
    const NAME: &'static str = "incoming_phone_number";
    const SCHEMA: &'static Schema = &TABLE;
    const IDENTITY: &'static [IdentityKey] = &[
        IdentityKey::param("account_sid"),
        IdentityKey::or_payload("sid", "sid"),
    ];
    const LIST_KEY: &'static str = "incoming_phone_numbers";
}
