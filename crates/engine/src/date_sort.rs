//! Date column comparator.
//!
//! Three-way ordering over raw cell strings for a generic sort engine.
//! Values may be empty or fail to parse under the column's date format;
//! the policy, in priority order:
//! 1. identical raw values compare equal (no swap)
//! 2. exactly one empty value: empties sort last unconditionally, unless
//!    `sort_empty_cells` is set, in which case they follow the sort order
//! 3. both non-empty: an unparsable value sorts after a parsable one;
//!    two parsable values compare chronologically, inverted for descending

use std::cmp::Ordering;

use chrono::NaiveDate;
use gridveil_core::SortOrder;

/// Per-column metadata the comparator needs.
#[derive(Debug, Clone)]
pub struct DateColumnMeta {
    /// chrono strftime format, e.g. "%Y-%m-%d".
    pub date_format: String,
    /// Whether empty cells participate in the configured order instead of
    /// always sorting last.
    pub sort_empty_cells: bool,
}

/// Build the compare function for one date column.
pub fn date_sort(order: SortOrder, meta: &DateColumnMeta) -> impl Fn(&str, &str) -> Ordering + '_ {
    move |value: &str, next_value: &str| {
        if value == next_value {
            return Ordering::Equal;
        }

        if value.is_empty() {
            if next_value.is_empty() {
                return Ordering::Equal;
            }
            return if meta.sort_empty_cells {
                order.apply(Ordering::Less)
            } else {
                Ordering::Greater
            };
        }

        if next_value.is_empty() {
            return if meta.sort_empty_cells {
                order.apply(Ordering::Greater)
            } else {
                Ordering::Less
            };
        }

        let first = NaiveDate::parse_from_str(value, &meta.date_format);
        let next = NaiveDate::parse_from_str(next_value, &meta.date_format);

        match (first, next) {
            (Err(_), _) => Ordering::Greater,
            (_, Err(_)) => Ordering::Less,
            (Ok(first), Ok(next)) => order.apply(first.cmp(&next)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(sort_empty_cells: bool) -> DateColumnMeta {
        DateColumnMeta {
            date_format: "%Y-%m-%d".to_string(),
            sort_empty_cells,
        }
    }

    #[test]
    fn test_chronological_ascending() {
        let m = meta(false);
        let cmp = date_sort(SortOrder::Ascending, &m);
        assert_eq!(cmp("2019-05-01", "2020-01-01"), Ordering::Less);
        assert_eq!(cmp("2020-01-01", "2019-05-01"), Ordering::Greater);
    }

    #[test]
    fn test_chronological_descending() {
        let m = meta(false);
        let cmp = date_sort(SortOrder::Descending, &m);
        assert_eq!(cmp("2019-05-01", "2020-01-01"), Ordering::Greater);
        assert_eq!(cmp("2020-01-01", "2019-05-01"), Ordering::Less);
    }

    #[test]
    fn test_identical_raw_values_do_not_swap() {
        let m = meta(false);
        let cmp = date_sort(SortOrder::Descending, &m);
        assert_eq!(cmp("garbage", "garbage"), Ordering::Equal);
        assert_eq!(cmp("", ""), Ordering::Equal);
    }

    #[test]
    fn test_empty_sorts_last_by_default() {
        // Regardless of direction when sort_empty_cells is off.
        let m = meta(false);
        let asc = date_sort(SortOrder::Ascending, &m);
        assert_eq!(asc("", "2020-01-01"), Ordering::Greater);
        assert_eq!(asc("2020-01-01", ""), Ordering::Less);

        let desc = date_sort(SortOrder::Descending, &m);
        assert_eq!(desc("", "2020-01-01"), Ordering::Greater);
        assert_eq!(desc("2020-01-01", ""), Ordering::Less);
    }

    #[test]
    fn test_empty_follows_order_when_enabled() {
        let m = meta(true);
        let asc = date_sort(SortOrder::Ascending, &m);
        assert_eq!(asc("", "2020-01-01"), Ordering::Less);
        assert_eq!(asc("2020-01-01", ""), Ordering::Greater);

        let desc = date_sort(SortOrder::Descending, &m);
        assert_eq!(desc("", "2020-01-01"), Ordering::Greater);
        assert_eq!(desc("2020-01-01", ""), Ordering::Less);
    }

    #[test]
    fn test_unparsable_sorts_after_parsable() {
        let m = meta(false);
        let cmp = date_sort(SortOrder::Ascending, &m);
        assert_eq!(cmp("not a date", "2020-01-01"), Ordering::Greater);
        assert_eq!(cmp("2020-01-01", "not a date"), Ordering::Less);
    }

    #[test]
    fn test_equal_dates_do_not_swap() {
        let m = DateColumnMeta {
            date_format: "%d/%m/%Y".to_string(),
            sort_empty_cells: false,
        };
        let cmp = date_sort(SortOrder::Ascending, &m);
        // Different raw strings, same parsed date under a lenient format.
        assert_eq!(cmp("1/2/2020", "01/02/2020"), Ordering::Equal);
    }
}
