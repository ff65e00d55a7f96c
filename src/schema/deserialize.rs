//! Value transforms applied while decoding payload fields.

use super::FieldValue;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde_json::Value;
use std::str::FromStr;

/// RFC 2822 timestamp (`Tue, 31 Aug 2010 20:36:28 +0000`), with RFC 3339 as a
/// fallback. Anything else, `null` included, decodes to `Null`.
pub fn rfc2822_datetime(value: &Value) -> FieldValue {
    let Some(text) = value.as_str() else {
        return FieldValue::Null;
    };
    parse_timestamp(text)
        .map(FieldValue::DateTime)
        .unwrap_or(FieldValue::Null)
}

pub fn parse_timestamp(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();
    DateTime::parse_from_rfc2822(text)
        .or_else(|_| DateTime::parse_from_rfc3339(text))
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Exact decimal from text or a JSON number. Text that does not parse is kept
/// as text so callers still see what the server sent.
pub fn decimal(value: &Value) -> FieldValue {
    match value {
        Value::Null => FieldValue::Null,
        Value::String(text) => parse_decimal(text)
            .map(FieldValue::Decimal)
            .unwrap_or_else(|| FieldValue::Text(text.clone())),
        Value::Number(n) => parse_decimal(&n.to_string())
            .map(FieldValue::Decimal)
            .unwrap_or_else(|| FieldValue::Json(value.clone())),
        other => FieldValue::from_json(other),
    }
}

pub fn parse_decimal(text: &str) -> Option<Decimal> {
    let text = text.trim();
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
}

/// Integer from a JSON integer or numeric text; other text is kept as text.
pub fn integer(value: &Value) -> FieldValue {
    match value {
        Value::Null => FieldValue::Null,
        Value::Number(n) => n
            .as_i64()
            .map(FieldValue::Integer)
            .unwrap_or_else(|| FieldValue::Json(value.clone())),
        Value::String(text) => text
            .trim()
            .parse::<i64>()
            .map(FieldValue::Integer)
            .unwrap_or_else(|_| FieldValue::Text(text.clone())),
        other => FieldValue::from_json(other),
    }
}
