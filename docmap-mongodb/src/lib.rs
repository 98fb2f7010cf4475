//! MongoDB driver binding for docmap.
//!
//! This crate connects the driver-independent translation layer in
//! `docmap-core` to the official `mongodb` driver. It owns nothing the
//! driver already does: pooling, retries, timeouts, and wire semantics are
//! the driver's; every operation here is one forwarded call with model ↔
//! document translation at the boundary.
//!
//! # Example
//!
//! ```ignore
//! use docmap_mongodb::{MongoCollection, MongoConnection};
//! use docmap_core::model::Model;
//! use bson::{doc, oid::ObjectId};
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
//!     const COLLECTION: &'static str = "users";
//! }
//!
//! # async fn example() -> docmap_core::error::DocMapResult<()> {
//! let conn = MongoConnection::connect("mongodb://localhost:27017/app").await?;
//! let users: MongoCollection<User> = MongoCollection::bind(&conn.database).await?;
//!
//! users.insert_one(&User { id: None, email: "ana@example.com".into() }).await?;
//! let ana = users.find_one(doc! { "email": "ana@example.com" }, None).await?;
//! # Ok(()) }
//! ```

#[allow(unused_extern_crates)]
extern crate self as docmap_mongodb;

pub mod collection;
pub mod connection;

pub use collection::MongoCollection;
pub use connection::MongoConnection;
