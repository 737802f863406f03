//! Header discovery over nested records.

use tabview_model::{HeaderList, SourceRecord, SourceValue};

/// Collect the leaf field names of a record, depth-first.
///
/// Scalar fields contribute their own name. Nested fields contribute the
/// names of their leaves at the nested field's position, never the nested
/// field's own name. An absent or empty record yields no headers.
pub fn extract_keys(record: Option<&SourceRecord>) -> HeaderList {
    let mut headers = HeaderList::new();
    if let Some(record) = record {
        collect_leaf_names(record, &mut headers);
    }
    headers
}

fn collect_leaf_names(record: &SourceRecord, headers: &mut HeaderList) {
    for (name, value) in record.fields() {
        match value {
            SourceValue::Scalar(_) => headers.push(name),
            SourceValue::Nested(nested) => collect_leaf_names(nested, headers),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_keys_are_spliced_in_place() {
        let record = SourceRecord::new()
            .with_field("city", "Paris")
            .with_field(
                "street",
                SourceRecord::new()
                    .with_field("number", 12)
                    .with_field("name", "Oak St"),
            )
            .with_field("postcode", 75001);

        let headers = extract_keys(Some(&record));
        assert_eq!(headers.as_slice(), ["city", "number", "name", "postcode"]);
    }

    #[test]
    fn deep_nesting_is_fully_expanded() {
        let record = SourceRecord::new().with_field(
            "a",
            SourceRecord::new().with_field("b", SourceRecord::new().with_field("c", 1)),
        );
        assert_eq!(extract_keys(Some(&record)).as_slice(), ["c"]);
    }

    #[test]
    fn absent_record_has_no_headers() {
        assert!(extract_keys(None).is_empty());
        assert!(extract_keys(Some(&SourceRecord::new())).is_empty());
    }

    #[test]
    fn empty_nested_record_contributes_nothing() {
        let record = SourceRecord::new()
            .with_field("meta", SourceRecord::new())
            .with_field("city", "Oslo");
        assert_eq!(extract_keys(Some(&record)).as_slice(), ["city"]);
    }
}
