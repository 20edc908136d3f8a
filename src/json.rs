//! JSON conversion for [`Record`]s.
//!
//! Decoding keeps the field order of the JSON object. All decoded keys are [`Key::Str`]; numeric
//! object keys such as `"3"` stay strings. Numbers become [`Value::Int64`] when they fit in an
//! `i64`, otherwise [`Value::Float64`].
//!
//! Encoding renders integer keys in decimal and maps non-finite floats to `null`. A record holding
//! both `Key::Int(7)` and `Key::Str("7")` has no JSON form: encoding it fails with
//! [`FilterError::InvalidRecord`] instead of dropping one of the entries.

use serde_json::{Map, Number};

use crate::error::{FilterError, FilterResult};
use crate::types::{Key, Record, Value};

impl Record {
    /// Parse a record from a JSON object.
    pub fn from_json_str(input: &str) -> FilterResult<Self> {
        let v = serde_json::from_str::<serde_json::Value>(input)?;
        Self::try_from(v)
    }

    /// Encode this record as a JSON object.
    pub fn to_json(&self) -> FilterResult<serde_json::Value> {
        serde_json::Value::try_from(self)
    }
}

impl TryFrom<serde_json::Value> for Record {
    type Error = FilterError;

    fn try_from(v: serde_json::Value) -> FilterResult<Self> {
        match v {
            serde_json::Value::Object(map) => Ok(object_to_record(map)),
            other => Err(FilterError::InvalidRecord {
                message: format!("expected a json object, got {}", json_kind(&other)),
            }),
        }
    }
}

impl TryFrom<&Record> for serde_json::Value {
    type Error = FilterError;

    fn try_from(record: &Record) -> FilterResult<Self> {
        let mut map = Map::with_capacity(record.len());
        for (k, v) in record {
            let name = k.to_string();
            if map.contains_key(&name) {
                return Err(FilterError::InvalidRecord {
                    message: format!("duplicate key '{name}' after stringifying keys"),
                });
            }
            map.insert(name, value_to_json(v)?);
        }
        Ok(serde_json::Value::Object(map))
    }
}

fn object_to_record(map: Map<String, serde_json::Value>) -> Record {
    let mut record = Record::with_capacity(map.len());
    for (k, v) in map {
        record.insert(Key::Str(k), json_to_value(v));
    }
    record
}

fn json_to_value(v: serde_json::Value) -> Value {
    match v {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(b),
        serde_json::Value::Number(n) => number_to_value(&n),
        serde_json::Value::String(s) => Value::Utf8(s),
        serde_json::Value::Array(items) => {
            Value::Array(items.into_iter().map(json_to_value).collect())
        }
        serde_json::Value::Object(map) => Value::Record(object_to_record(map)),
    }
}

fn number_to_value(n: &Number) -> Value {
    if let Some(i) = n.as_i64() {
        Value::Int64(i)
    } else {
        // u64 beyond i64::MAX and all non-integers.
        n.as_f64().map(Value::Float64).unwrap_or(Value::Null)
    }
}

fn value_to_json(v: &Value) -> FilterResult<serde_json::Value> {
    Ok(match v {
        Value::Null => serde_json::Value::Null,
        Value::Int64(i) => serde_json::Value::from(*i),
        Value::Float64(f) => Number::from_f64(*f)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        Value::Bool(b) => serde_json::Value::Bool(*b),
        Value::Utf8(s) => serde_json::Value::String(s.clone()),
        Value::Array(items) => serde_json::Value::Array(
            items.iter().map(value_to_json).collect::<FilterResult<_>>()?,
        ),
        Value::Record(r) => serde_json::Value::try_from(r)?,
    })
}

fn json_kind(v: &serde_json::Value) -> &'static str {
    match v {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
