//! Wildcard filter for table names.

use crate::model::TableDescriptor;

/// Check whether `value` matches `filter`.
///
/// A leading and/or trailing `*` turns the filter into an ends-with,
/// starts-with or contains check; without wildcards the whole value must match.
/// Comparison ignores case and a blank filter matches everything.
///
/// ```
/// use classgen_core::filter::matches_filter;
///
/// assert!(matches_filter("CustomerOrder", "customer*"));
/// assert!(matches_filter("CustomerOrder", "*order"));
/// assert!(matches_filter("CustomerOrder", "*MERO*"));
/// assert!(!matches_filter("CustomerOrder", "Customer"));
/// ```
pub fn matches_filter(value: &str, filter: &str) -> bool {
    if filter.trim().is_empty() {
        return true;
    }

    let starts = filter.starts_with('*');
    let ends = filter.ends_with('*');
    let needle = filter.replace('*', "").to_lowercase();
    let value = value.to_lowercase();

    match (starts, ends) {
        (true, true) => value.contains(&needle),
        (true, false) => value.ends_with(&needle),
        (false, true) => value.starts_with(&needle),
        (false, false) => value == needle,
    }
}

/// Keep the tables whose name matches `filter`, preserving order.
pub fn filter_tables(tables: Vec<TableDescriptor>, filter: &str) -> Vec<TableDescriptor> {
    tables
        .into_iter()
        .filter(|t| matches_filter(&t.name, filter))
        .collect()
}
