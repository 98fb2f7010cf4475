//! Filter construction helpers.

use bson::{Bson, Document};

/// Builds a filter document from named values, dropping every field whose
/// value is null or an empty string, array, or document.
///
/// Falsy-but-meaningful values are kept: integer `0` and `false` filter as
/// themselves.
///
/// # Example
///
/// ```ignore
/// use bson::Bson;
/// use docmap_core::filter::clean_filter;
///
/// let filter = clean_filter([
///     ("status", Bson::from("active")),
///     ("owner", Bson::Null),
///     ("tag", Bson::from("")),
/// ]);
/// assert_eq!(filter, bson::doc! { "status": "active" });
/// ```
pub fn clean_filter<K, V, I>(fields: I) -> Document
where
    K: Into<String>,
    V: Into<Bson>,
    I: IntoIterator<Item = (K, V)>,
{
    fields
        .into_iter()
        .map(|(field, value)| (field.into(), value.into()))
        .filter(|(_, value)| !is_empty(value))
        .collect()
}

fn is_empty(value: &Bson) -> bool {
    match value {
        Bson::Null => true,
        Bson::String(s) => s.is_empty(),
        Bson::Array(values) => values.is_empty(),
        Bson::Document(doc) => doc.is_empty(),
        _ => false,
    }
}
