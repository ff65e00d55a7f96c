//! Numbers offered by the available-phone-number search, local and toll-free.
//! Both kinds share one field table and are addressed by account and country.

use super::{IdentityKey, Instance, ResourceKind};
use crate::schema::{FieldSpec, Schema};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Local;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TollFree;

pub type LocalInstance = Instance<Local>;
pub type TollFreeInstance = Instance<TollFree>;

const FIELDS: &[FieldSpec] = &[
    FieldSpec::required("friendly_name"),
    FieldSpec::required("phone_number"),
    FieldSpec::required("lata"),
    FieldSpec::optional("locality"),
    FieldSpec::required("rate_center"),
    FieldSpec::required("latitude").decimal(),
    FieldSpec::required("longitude").decimal(),
    FieldSpec::required("region"),
    FieldSpec::required("postal_code"),
    FieldSpec::required("iso_country"),
    FieldSpec::required("beta"),
    FieldSpec::required("capabilities"),
];

const LOCAL_TABLE: Schema = Schema {
    resource: "available_phone_number_local",
    fields: FIELDS,
};

const TOLL_FREE_TABLE: Schema = Schema {
    resource: "available_phone_number_toll_free",
    fields: FIELDS,
};

const IDENTITY: &[IdentityKey] = &[
    IdentityKey::param("account_sid"),
    IdentityKey::param("country_code"),
];

impl ResourceKind for Local {
    const NAME: &'static str = "available_phone_number_local";
    const SCHEMA: &'static Schema = &LOCAL_TABLE;
    const IDENTITY: &'static [IdentityKey] = IDENTITY;
    const LIST_KEY: &'static str = "available_phone_numbers";
}

impl ResourceKind for TollFree {
    const NAME: &'static str = "available_phone_number_toll_free";
    const SCHEMA: &'static Schema = &TOLL_FREE_TABLE;
    const IDENTITY: &'static [IdentityKey] = IDENTITY;
    const LIST_KEY: &'static str = "available_phone_numbers";
}
