//! Case-insensitive substring search across every cell of a row.

use tabview_model::FlatRow;

/// Rows where any cell contains `term`, ignoring case. Order is preserved.
///
/// An empty term keeps every row.
pub fn filter_rows<'a>(rows: &'a [FlatRow], term: &str) -> Vec<&'a FlatRow> {
    if term.is_empty() {
        return rows.iter().collect();
    }
    let needle = term.to_lowercase();
    rows.iter().filter(|row| row_matches(row, &needle)).collect()
}

/// `needle` must already be lower-cased.
pub fn row_matches(row: &FlatRow, needle: &str) -> bool {
    row.values()
        .any(|value| value.to_search_text().to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabview_model::Scalar;

    fn people() -> Vec<FlatRow> {
        vec![
            FlatRow::new().with("name", "Alice").with("age", 30),
            FlatRow::new().with("name", "Bob").with("age", 25),
        ]
    }

    #[test]
    fn matches_text_case_insensitively() {
        let rows = people();
        let found = filter_rows(&rows, "al");
        assert_eq!(found, vec![&rows[0]]);
        assert_eq!(filter_rows(&rows, "AL"), vec![&rows[0]]);
    }

    #[test]
    fn matches_stringified_numbers() {
        let rows = people();
        assert_eq!(filter_rows(&rows, "5"), vec![&rows[1]]);
    }

    #[test]
    fn empty_term_keeps_everything() {
        let rows = people();
        assert_eq!(filter_rows(&rows, ""), vec![&rows[0], &rows[1]]);
    }

    #[test]
    fn null_cells_never_match_text() {
        let rows = vec![FlatRow::new().with("name", Scalar::Null)];
        assert!(filter_rows(&rows, "null").is_empty());
    }

    #[test]
    fn no_match_is_empty() {
        assert!(filter_rows(&people(), "zed").is_empty());
    }
}
