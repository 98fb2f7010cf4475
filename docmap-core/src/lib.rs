//! Driver-independent half of the docmap document-mapping layer.
//!
//! This crate holds everything that translates between typed models and raw
//! BSON documents without touching the network:
//!
//! - **Model trait** ([`model`]) - Typed records bound to one collection, with
//!   document and JSON conversion helpers
//! - **Index specs** ([`index`]) - Compact index declarations and their parser
//! - **Sort specs** ([`sort`]) - Compact sort-string parsing and the ordered
//!   sort document builder
//! - **Filter helpers** ([`filter`]) - Query documents with nil/empty fields
//!   dropped
//! - **Field codecs** ([`codec`]) - Serde helpers for driver-native scalar
//!   types
//! - **Error handling** ([`error`]) - The error and result types shared by
//!   the whole layer
//!
//! # Example
//!
//! ```ignore
//! use docmap_core::{index::{parse_indexes, IndexSpec}, model::Model};
//! use bson::oid::ObjectId;
//! use serde::{Serialize, Deserialize};
//!
//! #[derive(Debug, Clone, Serialize, Deserialize)]
//! pub struct User {
//!     pub id: Option<ObjectId>,
//!     pub email: String,
//! }
//!
//! impl Model for User {
//!     type Id = ObjectId;
//!
//!     const COLLECTION: &'static str = "users";
//!
//!     fn indexes() -> Vec<IndexSpec> {
//!         parse_indexes("!email")
//!     }
//! }
//! ```

#[allow(unused_extern_crates)]
extern crate self as docmap_core;

pub mod codec;
pub mod error;
pub mod filter;
pub mod index;
pub mod model;
pub mod sort;
