//! Column sorting with the three-state toggle.

use std::cmp::Ordering;

use serde_json::Number;

use tabview_model::{FlatRow, Scalar, SortDirection};

static MISSING: Scalar = Scalar::Null;

/// Sort a copy of `rows` by `header` and return it with the header's next direction.
///
/// `Unsorted` and `Ascending` sort ascending, `Descending` sorts descending.
/// Rows without the header sort as if the cell were `Null`.
pub fn sort_rows(
    rows: &[FlatRow],
    header: &str,
    direction: SortDirection,
) -> (Vec<FlatRow>, SortDirection) {
    let mut sorted = rows.to_vec();
    sorted.sort_by(|a, b| compare_rows(a, b, header, direction));
    (sorted, direction.next())
}

pub fn compare_rows(a: &FlatRow, b: &FlatRow, header: &str, direction: SortDirection) -> Ordering {
    let ordering = compare_scalars(cell(a, header), cell(b, header));
    if direction.sorts_ascending() {
        ordering
    } else {
        ordering.reverse()
    }
}

/// Native ordering of two cells.
///
/// Values of the same kind compare naturally (text by code point, numbers by
/// value). Mixed kinds fall back to `Null < Bool < Number < Text`.
pub fn compare_scalars(a: &Scalar, b: &Scalar) -> Ordering {
    match (a, b) {
        (Scalar::Null, Scalar::Null) => Ordering::Equal,
        (Scalar::Bool(a), Scalar::Bool(b)) => a.cmp(b),
        (Scalar::Number(a), Scalar::Number(b)) => compare_numbers(a, b),
        (Scalar::Text(a), Scalar::Text(b)) => a.cmp(b),
        _ => a.kind_rank().cmp(&b.kind_rank()),
    }
}

fn compare_numbers(a: &Number, b: &Number) -> Ordering {
    match (numeric(a), numeric(b)) {
        (Numeric::Int(a), Numeric::Int(b)) => a.cmp(&b),
        (Numeric::Int(a), Numeric::Float(b)) => compare_int_float(a, b),
        (Numeric::Float(a), Numeric::Int(b)) => compare_int_float(b, a).reverse(),
        (Numeric::Float(a), Numeric::Float(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

#[derive(Clone, Copy)]
enum Numeric {
    Int(i128),
    Float(f64),
}

fn numeric(number: &Number) -> Numeric {
    number
        .as_i64()
        .map(i128::from)
        .or_else(|| number.as_u64().map(i128::from))
        .map_or_else(|| Numeric::Float(number.as_f64().unwrap_or_default()), Numeric::Int)
}

// Exact comparison against a finite float; no rounding of `int`.
fn compare_int_float(int: i128, float: f64) -> Ordering {
    const ABOVE_INTS: f64 = 18_446_744_073_709_551_616.0; // 2^64
    const BELOW_INTS: f64 = -9_223_372_036_854_775_808.0; // -2^63
    if float >= ABOVE_INTS {
        return Ordering::Less;
    }
    if float < BELOW_INTS {
        return Ordering::Greater;
    }
    let whole = float.trunc();
    int.cmp(&(whole as i128))
        .then_with(|| whole.partial_cmp(&float).unwrap_or(Ordering::Equal))
}

fn cell<'a>(row: &'a FlatRow, header: &str) -> &'a Scalar {
    row.get(header).unwrap_or(&MISSING)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cities(rows: &[FlatRow]) -> Vec<String> {
        rows.iter()
            .map(|row| row.get("city").map(Scalar::to_search_text).unwrap_or_default())
            .collect()
    }

    fn sample() -> Vec<FlatRow> {
        ["Rome", "Berlin", "Oslo"]
            .into_iter()
            .map(|city| FlatRow::new().with("city", city))
            .collect()
    }

    #[test]
    fn unsorted_sorts_ascending_and_moves_to_descending() {
        let (rows, next) = sort_rows(&sample(), "city", SortDirection::Unsorted);
        assert_eq!(cities(&rows), vec!["Berlin", "Oslo", "Rome"]);
        assert_eq!(next, SortDirection::Descending);
    }

    #[test]
    fn descending_sorts_descending_and_moves_to_ascending() {
        let (rows, next) = sort_rows(&sample(), "city", SortDirection::Descending);
        assert_eq!(cities(&rows), vec!["Rome", "Oslo", "Berlin"]);
        assert_eq!(next, SortDirection::Ascending);
    }

    #[test]
    fn input_is_left_untouched() {
        let rows = sample();
        let _ = sort_rows(&rows, "city", SortDirection::Ascending);
        assert_eq!(cities(&rows), vec!["Rome", "Berlin", "Oslo"]);
    }

    #[test]
    fn numbers_compare_by_value() {
        assert_eq!(
            compare_scalars(&Scalar::from(9), &Scalar::from(10)),
            Ordering::Less
        );
        assert_eq!(
            compare_scalars(&Scalar::from(-1.5), &Scalar::from(2)),
            Ordering::Less
        );
    }

    #[test]
    fn large_integers_and_floats_order_consistently() {
        let below = Scalar::Number(Number::from(i64::MAX));
        let unsigned = Scalar::Number(Number::from(1_u64 << 63));
        let float = Scalar::Number(Number::from_f64(9_223_372_036_854_775_808.0).expect("finite"));

        assert_eq!(compare_scalars(&below, &unsigned), Ordering::Less);
        assert_eq!(compare_scalars(&below, &float), Ordering::Less);
        assert_eq!(compare_scalars(&float, &below), Ordering::Greater);
        assert_eq!(compare_scalars(&unsigned, &float), Ordering::Equal);
    }

    #[test]
    fn fractional_floats_sit_between_integers() {
        let one = Scalar::from(1);
        let half = Scalar::from(1.5);
        let two = Scalar::from(2);
        let negative = Scalar::from(-0.5);

        assert_eq!(compare_scalars(&one, &half), Ordering::Less);
        assert_eq!(compare_scalars(&half, &two), Ordering::Less);
        assert_eq!(compare_scalars(&Scalar::from(0), &negative), Ordering::Greater);
        assert_eq!(compare_scalars(&Scalar::from(-0.0), &Scalar::from(0)), Ordering::Equal);
    }

    #[test]
    fn mixed_numeric_column_sorts_non_decreasing() {
        let values = [
            Scalar::Number(Number::from(u64::MAX)),
            Scalar::from(1.5),
            Scalar::Number(Number::from(i64::MAX)),
            Scalar::from(-3),
            Scalar::Number(Number::from_f64(9_223_372_036_854_775_808.0).expect("finite")),
            Scalar::Number(Number::from(1_u64 << 63)),
            Scalar::from(1),
        ];
        let rows: Vec<FlatRow> = values
            .iter()
            .map(|value| FlatRow::new().with("n", value.clone()))
            .collect();
        let (sorted, _) = sort_rows(&rows, "n", SortDirection::Ascending);
        for pair in sorted.windows(2) {
            assert_ne!(
                compare_scalars(cell(&pair[0], "n"), cell(&pair[1], "n")),
                Ordering::Greater
            );
        }
        assert_eq!(cell(&sorted[0], "n"), &Scalar::from(-3));
        assert_eq!(cell(&sorted[6], "n"), &Scalar::Number(Number::from(u64::MAX)));
    }

    #[test]
    fn text_compares_lexically() {
        assert_eq!(
            compare_scalars(&Scalar::from("9"), &Scalar::from("10")),
            Ordering::Greater
        );
    }

    #[test]
    fn mixed_kinds_use_kind_rank() {
        assert_eq!(
            compare_scalars(&Scalar::from(100), &Scalar::from("1")),
            Ordering::Less
        );
        assert_eq!(
            compare_scalars(&Scalar::Null, &Scalar::from(false)),
            Ordering::Less
        );
    }

    #[test]
    fn missing_cells_sort_first_ascending() {
        let rows = vec![
            FlatRow::new().with("city", "Oslo"),
            FlatRow::new().with("country", "Norway"),
        ];
        let (sorted, _) = sort_rows(&rows, "city", SortDirection::Ascending);
        assert!(sorted[0].get("city").is_none());
    }
}
