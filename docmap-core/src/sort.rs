//! Compact sort specifications.
//!
//! A sort spec is a comma-separated list of keys, where `field` sorts
//! ascending and `-field` sorts descending: `"name,-created_at"`.

use bson::{Bson, Document};

/// Key direction shared by sort specs and index keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Ascending order (A to Z, 0 to 9, earliest to latest).
    Ascending,
    /// Descending order (Z to A, 9 to 0, latest to earliest).
    Descending,
}

impl SortOrder {
    /// The driver-native direction value: 1 ascending, -1 descending.
    pub fn as_i32(self) -> i32 {
        match self {
            SortOrder::Ascending => 1,
            SortOrder::Descending => -1,
        }
    }
}

/// Splits one `field` / `-field` token into its name and direction.
pub(crate) fn parse_key(token: &str) -> (String, SortOrder) {
    match token.strip_prefix('-') {
        Some(field) => (field.to_string(), SortOrder::Descending),
        None => (token.to_string(), SortOrder::Ascending),
    }
}

/// Parses a compact sort spec into ordered (field, direction) pairs.
///
/// Whitespace around tokens is ignored. An empty or blank spec yields an
/// empty list, meaning "no sort".
pub fn parse_sort(spec: &str) -> Vec<(String, SortOrder)> {
    spec.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(parse_key)
        .collect()
}

/// Builds the ordered driver sort document (`{field: 1 | -1}`) for `keys`.
pub fn sort_document(keys: &[(String, SortOrder)]) -> Document {
    keys.iter()
        .map(|(field, order)| (field.clone(), Bson::Int32(order.as_i32())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::doc;

    #[test]
    fn parses_single_keys() {
        assert_eq!(parse_sort("a"), vec![("a".to_string(), SortOrder::Ascending)]);
        assert_eq!(parse_sort("-a"), vec![("a".to_string(), SortOrder::Descending)]);
    }

    #[test]
    fn parses_compound_keys() {
        assert_eq!(
            parse_sort("a,-b"),
            vec![
                ("a".to_string(), SortOrder::Ascending),
                ("b".to_string(), SortOrder::Descending),
            ]
        );
        assert_eq!(
            parse_sort("-a,-b"),
            vec![
                ("a".to_string(), SortOrder::Descending),
                ("b".to_string(), SortOrder::Descending),
            ]
        );
    }

    #[test]
    fn ignores_whitespace() {
        assert_eq!(parse_sort("a, b"), parse_sort("a,b"));
    }

    #[test]
    fn empty_spec_means_no_sort() {
        assert!(parse_sort("").is_empty());
        assert!(parse_sort("  ").is_empty());
    }

    #[test]
    fn builds_ordered_sort_document() {
        let keys = parse_sort("a,-b");
        assert_eq!(sort_document(&keys), doc! { "a": 1, "b": -1 });
    }
}
