//! Faxes, served by the fax domain under the project's account path.

use super::{IdentityKey, Instance, ResourceKind};
use crate::schema::{FieldSpec, Schema};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fax;

pub type FaxInstance = Instance<Fax>;

const TABLE: Schema = Schema {
    resource: "fax",
    fields: &[
        FieldSpec::required("sid"),
        FieldSpec::required("account_sid"),
        FieldSpec::required("from"),
        FieldSpec::required("to"),
        FieldSpec::required("quality"),
        FieldSpec::required("media_url"),
        FieldSpec::required("num_pages").integer(),
        FieldSpec::required("duration").integer(),
        FieldSpec::required("status"),
        FieldSpec::required("direction"),
        FieldSpec::required("api_version"),
        FieldSpec::required("price").decimal(),
        FieldSpec::required("price_unit"),
        FieldSpec::required("date_created").datetime(),
        FieldSpec::required("date_updated").datetime(),
        FieldSpec::required("url"),
    ],
};

impl ResourceKind for Fax {
    const NAME: &'static str = "fax";
    const SCHEMA: &'static Schema = &TABLE;
    const IDENTITY: &'static [IdentityKey] = &[IdentityKey::or_payload("sid", "sid")];
    const LIST_KEY: &'static str = "faxes";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::testing::{check_presence_rules, full_payload};
    use crate::resources::Solution;
    use serde_json::json;

    fn payload() -> serde_json::Value {
        full_payload::<Fax>(&[
            ("sid", json!("FX0001")),
            ("num_pages", json!(3)),
            ("duration", json!("61")),
            ("price", json!("0.021")),
            ("date_created", json!("2018-11-26T16:49:24Z")),
            ("date_updated", json!("Mon, 26 Nov 2018 16:49:30 +0000")),
        ])
    }

    #[test]
    fn accepts_rfc3339_and_rfc2822_timestamps() {
        let fax = FaxInstance::from_payload(&payload(), &Solution::new()).unwrap();
        assert!(fax.datetime("date_created").is_some());
        assert!(fax.datetime("date_updated").is_some());
        assert_eq!(fax.integer("num_pages"), Some(3));
        assert_eq!(fax.integer("duration"), Some(61));
        assert_eq!(fax.solution().get("sid"), Some("FX0001"));
    }

    #[test]
    fn presence_rules() {
        check_presence_rules::<Fax>(&payload(), &Solution::new());
    }
}
