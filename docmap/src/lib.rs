//! A typed document-mapping layer for MongoDB.
//!
//! Models declare their collection, optional indexes, and an optional
//! schema validator; a bound collection applies those declarations once
//! and then forwards every CRUD operation to the official driver,
//! translating between models and raw documents at the boundary.
//!
//! # Quick start
//!
//! ```ignore
//! use docmap::prelude::*;
//! use bson::{doc, oid::ObjectId};
//! use serde::{Serialize, Deserialize};
//!
//! #[derive(Debug, Clone, Serialize, Deserialize)]
//! pub struct User {
//!     pub id: Option<ObjectId>,
//!     pub email: String,
//!     pub name: String,
//! }
//!
//! impl Model for User {
//!     type Id = ObjectId;
//!
//!     const COLLECTION: &'static str = "users";
//!
//!     fn indexes() -> Vec<IndexSpec> {
//!         parse_indexes("!email, name")
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() -> DocMapResult<()> {
//!     let conn = MongoConnection::connect("mongodb://localhost:27017/app").await?;
//!     let users: MongoCollection<User> = MongoCollection::bind(&conn.database).await?;
//!
//!     users
//!         .insert_one(&User {
//!             id: None,
//!             email: "ana@example.com".to_string(),
//!             name: "Ana".to_string(),
//!         })
//!         .await?;
//!
//!     let ana = users
//!         .find_one(clean_filter([("email", "ana@example.com".into())]), None)
//!         .await?;
//!     println!("found: {ana:?}");
//!
//!     Ok(())
//! }
//! ```
//!
//! # What this layer does not do
//!
//! Connection pooling, retries, timeouts, transactions, and consistency
//! semantics all belong to the driver; docmap adds no coordination of its
//! own. Every method is a single forwarded driver call.

pub use docmap_core::{codec, error, filter, index, model, sort};
pub use docmap_mongodb::{collection, connection};

// Re-export BSON types for convenience
pub use bson;

pub mod prelude;
