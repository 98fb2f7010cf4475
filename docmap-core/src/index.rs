//! Compact index declarations.
//!
//! Models declare indexes either as explicit [`IndexSpec`] values or through
//! the compact string grammar:
//!
//! ```text
//! specs := spec ("," spec)*
//! spec  := ["!"] key ("," key)*
//! key   := ["-"] fieldname
//! ```
//!
//! A leading `!` marks a unique index; a leading `-` on a key makes that key
//! descending. [`parse_indexes`] splits a comma-separated list of
//! single-field specs; [`IndexSpec::parse`] handles one spec, which may name
//! compound keys.

use crate::sort::{SortOrder, parse_key};

/// A single index declaration: ordered keys plus a uniqueness flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexSpec {
    /// Key fields in index order, each with its direction.
    pub keys: Vec<(String, SortOrder)>,
    /// Whether the index enforces uniqueness.
    pub unique: bool,
}

impl IndexSpec {
    /// Declares an index over `keys`, optionally unique.
    pub fn new(keys: impl IntoIterator<Item = (String, SortOrder)>, unique: bool) -> Self {
        IndexSpec {
            keys: keys.into_iter().collect(),
            unique,
        }
    }

    /// Parses one compact spec, e.g. `"!a,-b"` for a unique compound index
    /// on `a` ascending and `b` descending.
    pub fn parse(spec: &str) -> Self {
        let spec = spec.trim();
        let (unique, keys) = match spec.strip_prefix('!') {
            Some(rest) => (true, rest),
            None => (false, spec),
        };
        IndexSpec {
            keys: keys
                .split(',')
                .map(str::trim)
                .filter(|key| !key.is_empty())
                .map(parse_key)
                .collect(),
            unique,
        }
    }
}

/// Parses a comma-separated list of single-field specs, e.g. `"slug, !email"`.
///
/// An empty or blank string yields no indexes.
pub fn parse_indexes(specs: &str) -> Vec<IndexSpec> {
    specs
        .split(',')
        .map(str::trim)
        .filter(|spec| !spec.is_empty())
        .map(IndexSpec::parse)
        .collect()
}
