//! Nested source records as received from a data provider.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{ModelError, Result};
use crate::row::FlatRow;
use crate::value::Scalar;

/// A field value inside a [`SourceRecord`]: either a leaf or another record.
#[derive(Debug, Clone, PartialEq)]
pub enum SourceValue {
    Scalar(Scalar),
    Nested(SourceRecord),
}

impl SourceValue {
    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Self::Scalar(value) => Some(value),
            Self::Nested(_) => None,
        }
    }

    pub fn as_record(&self) -> Option<&SourceRecord> {
        match self {
            Self::Scalar(_) => None,
            Self::Nested(record) => Some(record),
        }
    }
}

impl From<Value> for SourceValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Scalar(Scalar::Null),
            Value::Bool(value) => Self::Scalar(Scalar::Bool(value)),
            Value::Number(value) => Self::Scalar(Scalar::Number(value)),
            Value::String(value) => Self::Scalar(Scalar::Text(value)),
            Value::Array(items) => Self::Nested(SourceRecord::from_array(items)),
            Value::Object(map) => Self::Nested(SourceRecord {
                fields: map
                    .into_iter()
                    .map(|(name, value)| (name, Self::from(value)))
                    .collect(),
            }),
        }
    }
}

impl From<Scalar> for SourceValue {
    fn from(value: Scalar) -> Self {
        Self::Scalar(value)
    }
}

impl From<&str> for SourceValue {
    fn from(value: &str) -> Self {
        Self::Scalar(Scalar::from(value))
    }
}

impl From<String> for SourceValue {
    fn from(value: String) -> Self {
        Self::Scalar(Scalar::from(value))
    }
}

impl From<i64> for SourceValue {
    fn from(value: i64) -> Self {
        Self::Scalar(Scalar::from(value))
    }
}

impl From<i32> for SourceValue {
    fn from(value: i32) -> Self {
        Self::Scalar(Scalar::from(value))
    }
}

impl From<f64> for SourceValue {
    fn from(value: f64) -> Self {
        Self::Scalar(Scalar::from(value))
    }
}

impl From<bool> for SourceValue {
    fn from(value: bool) -> Self {
        Self::Scalar(Scalar::from(value))
    }
}

impl From<SourceRecord> for SourceValue {
    fn from(record: SourceRecord) -> Self {
        Self::Nested(record)
    }
}

/// An arbitrarily nested record with fields in source enumeration order.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(try_from = "Value")]
pub struct SourceRecord {
    fields: Vec<(String, SourceValue)>,
}

impl SourceRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field, replacing the value of an existing field with the same name.
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<SourceValue>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((name, value)),
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&SourceValue> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value)
    }

    /// Resolve a dotted path such as `location.street`.
    pub fn get_path(&self, path: &str) -> Option<&SourceValue> {
        let mut parts = path.split('.');
        let mut current = self.get(parts.next()?)?;
        for part in parts {
            current = current.as_record()?.get(part)?;
        }
        Some(current)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &SourceValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    fn from_array(items: Vec<Value>) -> Self {
        Self {
            fields: items
                .into_iter()
                .enumerate()
                .map(|(index, item)| (index.to_string(), SourceValue::from(item)))
                .collect(),
        }
    }
}

impl TryFrom<Value> for SourceRecord {
    type Error = ModelError;

    fn try_from(value: Value) -> Result<Self> {
        let found = match &value {
            Value::Object(_) | Value::Array(_) => "",
            Value::Null => "null",
            Value::Bool(_) => "a boolean",
            Value::Number(_) => "a number",
            Value::String(_) => "a string",
        };
        match SourceValue::from(value) {
            SourceValue::Nested(record) => Ok(record),
            SourceValue::Scalar(_) => Err(ModelError::NotARecord { found }),
        }
    }
}

impl From<&FlatRow> for SourceRecord {
    fn from(row: &FlatRow) -> Self {
        Self {
            fields: row
                .iter()
                .map(|(name, value)| (name.to_string(), SourceValue::Scalar(value.clone())))
                .collect(),
        }
    }
}
