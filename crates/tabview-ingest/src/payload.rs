//! Payload parsing and record projection.

use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::{debug, info, warn};

use tabview_model::{SourceRecord, SourceValue};

use crate::error::{IngestError, Result};

/// Envelope key holding the record list in provider responses.
pub const RESULTS_KEY: &str = "results";

/// Parse a payload into records.
///
/// Accepts either a bare JSON array of records or an object whose
/// `results` field is such an array.
pub fn parse_payload(text: &str) -> Result<Vec<SourceRecord>> {
    let value: Value = serde_json::from_str(text)?;
    records_from_value(value)
}

pub fn records_from_value(value: Value) -> Result<Vec<SourceRecord>> {
    let items = match value {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove(RESULTS_KEY) {
            Some(Value::Array(items)) => items,
            Some(_) => {
                return Err(IngestError::Payload(format!(
                    "`{RESULTS_KEY}` is not an array"
                )));
            }
            None => {
                return Err(IngestError::Payload(format!(
                    "object payload has no `{RESULTS_KEY}` field"
                )));
            }
        },
        other => {
            return Err(IngestError::Payload(format!(
                "expected an array or an object, found {}",
                value_kind(&other)
            )));
        }
    };
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            SourceRecord::try_from(item).map_err(|source| IngestError::Record { index, source })
        })
        .collect()
}

/// Project every record onto the nested record at `path`.
///
/// Records where the path is missing or points at a scalar are skipped.
pub fn select_field(records: Vec<SourceRecord>, path: &str) -> Vec<SourceRecord> {
    let total = records.len();
    let selected: Vec<SourceRecord> = records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match record.get_path(path) {
            Some(SourceValue::Nested(nested)) => Some(nested.clone()),
            Some(SourceValue::Scalar(_)) => {
                warn!(index, path, "selected field is not a record, skipping");
                None
            }
            None => {
                warn!(index, path, "record has no selected field, skipping");
                None
            }
        })
        .collect();
    debug!(path, total, selected = selected.len(), "projected records");
    selected
}

/// Read records from a JSON file, optionally projecting them onto `select`.
pub fn load_records(path: &Path, select: Option<&str>) -> Result<Vec<SourceRecord>> {
    let text = fs::read_to_string(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let records = parse_payload(&text)?;
    let records = match select {
        Some(field) => select_field(records, field),
        None => records,
    };
    info!(
        source = %path.display(),
        record_count = records.len(),
        "loaded records from file"
    );
    Ok(records)
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
