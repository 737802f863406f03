//! Flattening of nested source records into table rows.

use std::time::Instant;

use tracing::{debug, info};

use tabview_model::{FlatRow, HeaderList, Scalar, SourceRecord, SourceValue};

use crate::keys::extract_keys;

/// Lift named children of a nested field to the top level of a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Splice {
    pub parent: String,
    pub children: Vec<String>,
}

impl Splice {
    pub fn new(parent: impl Into<String>, children: &[&str]) -> Self {
        Self {
            parent: parent.into(),
            children: children.iter().map(|child| (*child).to_string()).collect(),
        }
    }
}

/// Describes which nested fields are lifted into named columns.
///
/// Nested fields not claimed by a splice are expanded leaf by leaf.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlattenPlan {
    splices: Vec<Splice>,
}

impl FlattenPlan {
    /// No splices: every nested field is expanded in place.
    pub fn generic() -> Self {
        Self::default()
    }

    /// Shape of a location record: street, coordinates, and timezone objects.
    pub fn location() -> Self {
        Self::generic()
            .with_splice(Splice::new("street", &["number", "name"]))
            .with_splice(Splice::new("coordinates", &["latitude", "longitude"]))
            .with_splice(Splice::new("timezone", &["offset", "description"]))
    }

    #[must_use]
    pub fn with_splice(mut self, splice: Splice) -> Self {
        self.splices.push(splice);
        self
    }

    pub fn splices(&self) -> &[Splice] {
        &self.splices
    }

    fn claims(&self, field: &str) -> bool {
        self.splices.iter().any(|splice| splice.parent == field)
    }
}

/// Headers and rows produced from one batch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlatBatch {
    pub headers: HeaderList,
    pub rows: Vec<FlatRow>,
}

impl FlatBatch {
    /// Rows whose key set differs from the batch headers.
    pub fn ragged_rows(&self) -> usize {
        self.rows
            .iter()
            .filter(|row| !self.headers.matches_row(row))
            .count()
    }
}

/// Flatten a batch. Headers come from the first flattened row.
pub fn flatten_records(records: &[SourceRecord], plan: &FlattenPlan) -> FlatBatch {
    let start = Instant::now();
    let rows: Vec<FlatRow> = records
        .iter()
        .map(|record| flatten_record(record, plan))
        .collect();
    let headers = extract_keys(rows.first().map(SourceRecord::from).as_ref());
    let batch = FlatBatch { headers, rows };

    let ragged = batch.ragged_rows();
    if ragged > 0 {
        debug!(ragged_rows = ragged, "rows do not match batch headers");
    }
    info!(
        record_count = records.len(),
        header_count = batch.headers.len(),
        duration_ms = start.elapsed().as_millis(),
        "flatten complete"
    );
    batch
}

/// Flatten one record.
///
/// Unclaimed top-level fields are copied first, in order; spliced children
/// are then written on top, so they win name collisions with copied fields.
pub fn flatten_record(record: &SourceRecord, plan: &FlattenPlan) -> FlatRow {
    let mut row = FlatRow::new();
    for (name, value) in record.fields() {
        if plan.claims(name) {
            continue;
        }
        insert_value(&mut row, name, value);
    }
    for splice in plan.splices() {
        let Some(parent) = record.get(&splice.parent) else {
            debug!(field = %splice.parent, "record is missing spliced field");
            continue;
        };
        let nested = parent.as_record();
        for child in &splice.children {
            match nested.and_then(|nested| nested.get(child)) {
                Some(value) => insert_value(&mut row, child, value),
                None => row.insert(child.as_str(), Scalar::Null),
            }
        }
    }
    row
}

fn insert_value(row: &mut FlatRow, name: &str, value: &SourceValue) {
    match value {
        SourceValue::Scalar(scalar) => row.insert(name, scalar.clone()),
        SourceValue::Nested(nested) => {
            for (child, value) in nested.fields() {
                insert_value(row, child, value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location(city: &str, street_name: &str) -> SourceRecord {
        SourceRecord::new()
            .with_field(
                "street",
                SourceRecord::new()
                    .with_field("number", 12)
                    .with_field("name", street_name),
            )
            .with_field("city", city)
            .with_field(
                "coordinates",
                SourceRecord::new()
                    .with_field("latitude", "1.0")
                    .with_field("longitude", "2.0"),
            )
            .with_field(
                "timezone",
                SourceRecord::new()
                    .with_field("offset", "+1:00")
                    .with_field("description", "CET"),
            )
    }

    #[test]
    fn scalars_precede_spliced_fields() {
        let row = flatten_record(&location("Paris", "Oak St"), &FlattenPlan::location());
        let keys: Vec<&str> = row.keys().collect();
        assert_eq!(
            keys,
            vec![
                "city",
                "number",
                "name",
                "latitude",
                "longitude",
                "offset",
                "description"
            ]
        );
        assert_eq!(row.get("name"), Some(&Scalar::from("Oak St")));
    }

    #[test]
    fn spliced_value_wins_collision() {
        let record = SourceRecord::new()
            .with_field("name", "top-level")
            .with_field("street", SourceRecord::new().with_field("name", "Elm Rd"));
        let plan = FlattenPlan::generic().with_splice(Splice::new("street", &["name"]));
        let row = flatten_record(&record, &plan);
        assert_eq!(row.len(), 1);
        assert_eq!(row.get("name"), Some(&Scalar::from("Elm Rd")));
    }

    #[test]
    fn missing_parent_leaves_ragged_row() {
        let record = SourceRecord::new().with_field("city", "Rome");
        let row = flatten_record(&record, &FlattenPlan::location());
        assert_eq!(row.keys().collect::<Vec<_>>(), vec!["city"]);
    }

    #[test]
    fn missing_child_becomes_null() {
        let record = SourceRecord::new()
            .with_field("street", SourceRecord::new().with_field("number", 3));
        let plan = FlattenPlan::generic().with_splice(Splice::new("street", &["number", "name"]));
        let row = flatten_record(&record, &plan);
        assert_eq!(row.get("number"), Some(&Scalar::from(3)));
        assert_eq!(row.get("name"), Some(&Scalar::Null));
    }

    #[test]
    fn unclaimed_nested_fields_expand_in_place() {
        let record = SourceRecord::new()
            .with_field("id", 1)
            .with_field("geo", SourceRecord::new().with_field("lat", 4.5))
            .with_field("city", "Bern");
        let row = flatten_record(&record, &FlattenPlan::generic());
        assert_eq!(row.keys().collect::<Vec<_>>(), vec!["id", "lat", "city"]);
    }

    #[test]
    fn empty_batch_has_no_headers() {
        let batch = flatten_records(&[], &FlattenPlan::location());
        assert!(batch.headers.is_empty());
        assert!(batch.rows.is_empty());
    }

    #[test]
    fn ragged_rows_are_counted() {
        let records = vec![
            location("Paris", "Oak St"),
            SourceRecord::new().with_field("city", "Rome"),
        ];
        let batch = flatten_records(&records, &FlattenPlan::location());
        assert_eq!(batch.rows.len(), 2);
        assert_eq!(batch.ragged_rows(), 1);
    }
}
