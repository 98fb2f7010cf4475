//! Convenient re-exports of the commonly used docmap types.
//!
//! ```ignore
//! use docmap::prelude::*;
//! ```

pub use docmap_core::{
    error::{DocMapError, DocMapResult},
    filter::clean_filter,
    index::{IndexSpec, parse_indexes},
    model::Model,
    sort::{SortOrder, parse_sort},
};
pub use docmap_mongodb::{collection::MongoCollection, connection::MongoConnection};
