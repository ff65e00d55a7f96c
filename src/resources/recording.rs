use super::{IdentityKey, Instance, ResourceKind};
use crate::schema::{Fallback, FieldSpec, Schema};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recording;

pub type RecordingInstance = Instance<Recording>;

const TABLE: Schema = Schema {
    resource: "recording",
    fields: &[
        FieldSpec::required("account_sid"),
        FieldSpec::required("api_version"),
        FieldSpec::required("call_sid"),
        FieldSpec::required("conference_sid"),
        FieldSpec::required("date_created").datetime(),
        FieldSpec::required("date_updated").datetime(),
        FieldSpec::required("start_time").datetime(),
        FieldSpec::required("duration"),
        FieldSpec::required("sid"),
        FieldSpec::required("price").decimal(),
        FieldSpec::required("uri"),
        FieldSpec::optional("encryption_details"),
        FieldSpec::required("price_unit"),
        FieldSpec::required("status"),
        // Mono unless the server says otherwise.
        FieldSpec::optional("channels")
            .integer()
            .or_default(Fallback::Integer(1)),
        FieldSpec::required("source"),
        FieldSpec::required("error_code").integer(),
    ],
};

impl ResourceKind for Recording {
    const NAME: &'static str = "recording";
    const SCHEMA: &'static Schema = &TABLE;
    const IDENTITY: &'static [IdentityKey] = &[
        IdentityKey::param("account_sid"),
        IdentityKey::or_payload("sid", "sid"),
    ];
    const LIST_KEY: &'static str = "recordings";
}
