//! Resource kinds and decoded instances.
//!
//! A kind is a zero-sized marker implementing [`ResourceKind`]: it names the
//! resource, points at its [`Schema`] and says which path parameters address
//! one instance. [`Instance<K>`] is the immutable result of decoding a
//! payload of that kind.

mod account;
mod application;
mod available_number;
mod fax;
mod incoming_phone_number;
mod recording;
mod transcription;

pub use account::{Account, AccountInstance};
pub use application::{Application, ApplicationInstance};
pub use available_number::{Local, LocalInstance, TollFree, TollFreeInstance};
pub use fax::{Fax, FaxInstance};
pub use incoming_phone_number::{IncomingPhoneNumber, IncomingPhoneNumberInstance};
pub use recording::{Recording, RecordingInstance};
pub use transcription::{Transcription, TranscriptionInstance};

use crate::schema::{FieldValue, Properties, Schema};
use crate::{Error, ErrorContext, Result};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;

/// One path parameter of an instance's identity.
#[derive(Debug, Clone, Copy)]
pub struct IdentityKey {
    pub name: &'static str,
    /// Payload field consulted when the caller did not supply the parameter.
    pub payload_field: Option<&'static str>,
}

impl IdentityKey {
    pub const fn param(name: &'static str) -> Self {
        Self {
            name,
            payload_field: None,
        }
    }

    pub const fn or_payload(name: &'static str, field: &'static str) -> Self {
        Self {
            name,
            payload_field: Some(field),
        }
    }
}

pub trait ResourceKind: 'static {
    const NAME: &'static str;
    const SCHEMA: &'static Schema;
    const IDENTITY: &'static [IdentityKey];
    /// Key holding the records array in list responses.
    const LIST_KEY: &'static str;
}

/// Path parameters addressing one resource (`account_sid`, `sid`, `country_code`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Solution(BTreeMap<String, String>);

impl Solution {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// A decoded resource plus the parameters that address it.
#[derive(Clone, PartialEq, Serialize)]
pub struct Instance<K> {
    properties: Properties,
    solution: Solution,
    #[serde(skip)]
    _kind: PhantomData<fn() -> K>,
}

impl<K: ResourceKind> Instance<K> {
    /// Decode `payload` and build the identity from `params`, falling back to
    /// payload fields where the kind allows it.
    pub fn from_payload(payload: &Value, params: &Solution) -> Result<Self> {
        let properties = K::SCHEMA.decode(payload)?;

        let mut solution = Solution::new();
        for key in K::IDENTITY {
            let value = params
                .get(key.name)
                .map(str::to_string)
                .or_else(|| {
                    key.payload_field
                        .and_then(|field| properties.get(field))
                        .and_then(FieldValue::as_str)
                        .map(str::to_string)
                })
                .ok_or_else(|| {
                    Error::validation_with_context(
                        format!("{} identity needs '{}'", K::NAME, key.name),
                        ErrorContext::new()
                            .with_field_path(key.name)
                            .with_source("resource_identity"),
                    )
                })?;
            solution = solution.with(key.name, value);
        }

        Ok(Self {
            properties,
            solution,
            _kind: PhantomData,
        })
    }

    pub fn kind(&self) -> &'static str {
        K::NAME
    }
}

impl<K> Instance<K> {
    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    pub fn solution(&self) -> &Solution {
        &self.solution
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.properties.get(field)
    }

    pub fn text(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(FieldValue::as_str)
    }

    pub fn flag(&self, field: &str) -> Option<bool> {
        self.get(field).and_then(FieldValue::as_bool)
    }

    pub fn integer(&self, field: &str) -> Option<i64> {
        self.get(field).and_then(FieldValue::as_i64)
    }

    pub fn decimal(&self, field: &str) -> Option<Decimal> {
        self.get(field).and_then(FieldValue::as_decimal)
    }

    pub fn datetime(&self, field: &str) -> Option<DateTime<Utc>> {
        self.get(field).and_then(FieldValue::as_datetime)
    }

    pub fn json(&self, field: &str) -> Option<&Value> {
        self.get(field).and_then(FieldValue::as_json)
    }

    /// The instance's own `sid`, when its kind has one.
    pub fn sid(&self) -> Option<&str> {
        self.text("sid")
    }
}

impl<K: ResourceKind> fmt::Debug for Instance<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(K::NAME)
            .field("solution", &self.solution)
            .field("properties", &self.properties)
            .finish()
    }
}
