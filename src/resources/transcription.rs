use super::{IdentityKey, Instance, ResourceKind};
use crate::schema::{FieldSpec, Schema};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transcription;

pub type TranscriptionInstance = Instance<Transcription>;

const TABLE: Schema = Schema {
    resource: "transcription",
    fields: &[
        FieldSpec::required("account_sid"),
        FieldSpec::required("api_version"),
        FieldSpec::required("date_created").datetime(),
        FieldSpec::required("date_updated").datetime(),
        FieldSpec::required("duration"),
        FieldSpec::required("price").decimal(),
        FieldSpec::required("price_unit"),
        FieldSpec::required("recording_sid"),
        FieldSpec::required("sid"),
        FieldSpec::required("status"),
        FieldSpec::required("transcription_text"),
        FieldSpec::optional("type"),
        FieldSpec::required("uri"),
    ],
};

impl ResourceKind for Transcription {
    const NAME: &'static str = "transcription";
    const SCHEMA: &'static Schema = &TABLE;
    const IDENTITY: &'static [IdentityKey] = &[
        IdentityKey::param("account_sid"),
        IdentityKey::or_payload("sid", "sid"),
    ];
    const LIST_KEY: &'static str = "transcriptions";
}
