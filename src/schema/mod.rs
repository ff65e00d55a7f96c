//! Schema-driven payload decoding.
//!
//! Every resource kind declares a static [`Schema`]: its field names, whether
//! each one is required or optional-with-fallback, and how the raw JSON value
//! is transformed. [`Schema::decode`] is the single routine that turns a
//! response payload into [`Properties`].
//!
//! Required fields that are absent fail the whole decode with
//! [`Error::MalformedResponse`](crate::Error::MalformedResponse). Absent
//! optional fields take their fallback and are reported at `debug` level, so
//! deployments can see which fields the live API has stopped sending.

pub mod deserialize;

use crate::{Error, Result};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::debug;

/// A decoded field value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Null,
    Bool(bool),
    Text(String),
    Integer(i64),
    Decimal(Decimal),
    DateTime(DateTime<Utc>),
    /// Objects, arrays and numbers that carry no transform.
    Json(Value),
}

impl FieldValue {
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Null => FieldValue::Null,
            Value::Bool(b) => FieldValue::Bool(*b),
            Value::String(s) => FieldValue::Text(s.clone()),
            other => FieldValue::Json(other.clone()),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            FieldValue::Decimal(d) => Some(*d),
            _ => None,
        }
    }

    pub fn as_datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            FieldValue::DateTime(dt) => Some(*dt),
            _ => None,
        }
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            FieldValue::Json(v) => Some(v),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }
}

/// Decoded fields, keyed by wire name.
pub type Properties = BTreeMap<&'static str, FieldValue>;

/// How a raw JSON value becomes a [`FieldValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decode {
    /// Strings, booleans and nulls map directly; everything else stays JSON.
    Raw,
    DateTime,
    Decimal,
    Integer,
}

impl Decode {
    fn apply(self, value: &Value) -> FieldValue {
        match self {
            Decode::Raw => FieldValue::from_json(value),
            Decode::DateTime => deserialize::rfc2822_datetime(value),
            Decode::Decimal => deserialize::decimal(value),
            Decode::Integer => deserialize::integer(value),
        }
    }
}

/// Value substituted for an absent optional field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    EmptyText,
    Integer(i64),
}

impl Fallback {
    fn value(self) -> FieldValue {
        match self {
            Fallback::EmptyText => FieldValue::Text(String::new()),
            Fallback::Integer(i) => FieldValue::Integer(i),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Required,
    Optional(Fallback),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub presence: Presence,
    pub decode: Decode,
}

impl FieldSpec {
    pub const fn required(name: &'static str) -> Self {
        Self {
            name,
            presence: Presence::Required,
            decode: Decode::Raw,
        }
    }

    /// Optional, defaulting to the empty string.
    pub const fn optional(name: &'static str) -> Self {
        Self {
            name,
            presence: Presence::Optional(Fallback::EmptyText),
            decode: Decode::Raw,
        }
    }

    pub const fn or_default(self, fallback: Fallback) -> Self {
        Self {
            presence: Presence::Optional(fallback),
            ..self
        }
    }

    pub const fn datetime(self) -> Self {
        Self {
            decode: Decode::DateTime,
            ..self
        }
    }

    pub const fn decimal(self) -> Self {
        Self {
            decode: Decode::Decimal,
            ..self
        }
    }

    pub const fn integer(self) -> Self {
        Self {
            decode: Decode::Integer,
            ..self
        }
    }

    pub fn is_required(&self) -> bool {
        matches!(self.presence, Presence::Required)
    }
}

/// Field table for one resource kind.
#[derive(Debug)]
pub struct Schema {
    pub resource: &'static str,
    pub fields: &'static [FieldSpec],
}

impl Schema {
    pub fn required_fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().filter(|f| f.is_required()).map(|f| f.name)
    }

    pub fn optional_fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().filter(|f| !f.is_required()).map(|f| f.name)
    }

    /// Decode `payload` against this schema. Fields the schema does not name
    /// are ignored.
    pub fn decode(&self, payload: &Value) -> Result<Properties> {
        let object = payload
            .as_object()
            .ok_or_else(|| Error::malformed(self.resource, "<root>"))?;

        let mut properties = Properties::new();
        for spec in self.fields {
            let value = match (object.get(spec.name), spec.presence) {
                (Some(raw), _) => spec.decode.apply(raw),
                (None, Presence::Optional(fallback)) => {
                    debug!(
                        resource = self.resource,
                        field = spec.name,
                        "optional field absent, using fallback"
                    );
                    fallback.value()
                }
                (None, Presence::Required) => {
                    return Err(Error::malformed(self.resource, spec.name));
                }
            };
            properties.insert(spec.name, value);
        }
        Ok(properties)
    }
}
