//! Error and result types for document-mapping operations.
//!
//! Use [`DocMapResult<T>`] as the return type for fallible operations.

use bson::error::Error as BsonError;
use serde_json::Error as SerdeJsonError;
use thiserror::Error;

/// Represents all possible errors produced by the mapping layer.
///
/// The layer itself only ever fails on a missing document, a bad model
/// declaration, or a model ↔ document conversion; everything else is a
/// driver failure carried through untouched.
#[derive(Error, Debug)]
pub enum DocMapError {
    /// A single-document fetch or atomic update-and-fetch matched nothing.
    /// The first argument is the requested identifier, the second is the
    /// collection name.
    #[error("document not found: {0} in collection {1}")]
    NotFound(String, String),
    /// A model declaration cannot be applied: empty collection name, a
    /// validator-modify command that did not report success, or a
    /// connection URL naming no database.
    #[error("configuration error: {0}")]
    Config(String),
    /// Conversion between a model and its document representation failed.
    #[error("serialization error: {0}")]
    Serialization(String),
    /// A failure reported by the underlying driver, unmodified.
    #[error("driver error: {0}")]
    Driver(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// A specialized `Result` type for document-mapping operations.
pub type DocMapResult<T> = Result<T, DocMapError>;

impl DocMapError {
    /// Wraps a driver failure without retrying, suppressing, or translating it.
    pub fn driver(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        DocMapError::Driver(Box::new(err))
    }
}

impl From<BsonError> for DocMapError {
    fn from(err: BsonError) -> Self {
        DocMapError::Serialization(err.to_string())
    }
}

impl From<SerdeJsonError> for DocMapError {
    fn from(err: SerdeJsonError) -> Self {
        DocMapError::Serialization(err.to_string())
    }
}
