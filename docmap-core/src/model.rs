//! The model trait: a typed record bound to one document collection.

use bson::{Bson, Document, de::deserialize_from_document, ser::serialize_to_document};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use std::fmt::Debug;

use crate::{error::DocMapResult, index::IndexSpec};

/// A typed record mapped to one document collection.
///
/// The implementing struct must carry its identifier in a field that
/// serializes under the name `id`; on the storage side the same value lives
/// under the primary-key field `_id`, and the provided
/// [`to_document`](Model::to_document) / [`from_document`](Model::from_document)
/// helpers perform the rename in both directions. Declare the identifier
/// field as an `Option` when the server should assign ids.
///
/// # Example
///
/// ```ignore
/// use docmap_core::{index::{parse_indexes, IndexSpec}, model::Model};
/// use bson::oid::ObjectId;
/// use serde::{Serialize, Deserialize};
///
/// #[derive(Debug, Clone, Serialize, Deserialize)]
/// pub struct User {
///     pub id: Option<ObjectId>,
///     pub email: String,
///     pub name: String,
/// }
///
/// impl Model for User {
///     type Id = ObjectId;
///
///     const COLLECTION: &'static str = "users";
///
///     fn indexes() -> Vec<IndexSpec> {
///         parse_indexes("!email, name")
///     }
/// }
/// ```
pub trait Model: Serialize + DeserializeOwned + Send + Sync + Sized + 'static {
    /// The identifier type: `ObjectId`, an integer, a string, a `Uuid`, or
    /// any other comparable type the driver accepts as a primary key.
    type Id: Serialize + DeserializeOwned + Clone + Debug + Send + Sync;

    /// Name of the collection this model is stored in.
    const COLLECTION: &'static str;

    /// Indexes to ensure when the collection is bound. Defaults to none.
    fn indexes() -> Vec<IndexSpec> {
        Vec::new()
    }

    /// Optional `$jsonSchema` validator applied when the collection is
    /// bound. Enforcement happens entirely on the server.
    fn validator() -> Option<Document> {
        None
    }

    /// Serializes this model to a storage document, renaming `id` to `_id`.
    ///
    /// A null identifier is omitted entirely so the server assigns one.
    fn to_document(&self) -> DocMapResult<Document> {
        let mut doc = serialize_to_document(self)?;
        match doc.remove("id") {
            Some(Bson::Null) | None => {}
            Some(id) => {
                doc.insert("_id", id);
            }
        }
        Ok(doc)
    }

    /// Rebuilds a model from a storage document, renaming `_id` back to
    /// `id`. A deserialization failure (schema mismatch) propagates to the
    /// caller.
    fn from_document(mut doc: Document) -> DocMapResult<Self> {
        if let Some(id) = doc.remove("_id") {
            doc.insert("id", id);
        }
        Ok(deserialize_from_document(doc)?)
    }

    /// Renders this model as a JSON value.
    fn to_json(&self) -> DocMapResult<Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Rebuilds a model from a JSON value.
    fn from_json(value: Value) -> DocMapResult<Self> {
        Ok(serde_json::from_value(value)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::{doc, oid::ObjectId};
    use chrono::{DateTime, Utc};
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Reporter {
        id: Option<ObjectId>,
        name: String,
    }

    impl Model for Reporter {
        type Id = ObjectId;

        const COLLECTION: &'static str = "reporters";
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Ticket {
        id: i64,
        title: String,
        opened_at: DateTime<Utc>,
        tags: Vec<String>,
        reporter: Reporter,
    }

    impl Model for Ticket {
        type Id = i64;

        const COLLECTION: &'static str = "tickets";
    }

    fn ticket() -> Ticket {
        Ticket {
            id: 7,
            title: "stuck import".to_string(),
            opened_at: Utc::now(),
            tags: vec!["import".to_string(), "urgent".to_string()],
            reporter: Reporter {
                id: Some(ObjectId::new()),
                name: "ana".to_string(),
            },
        }
    }

    #[test]
    fn to_document_renames_id_to_primary_key() {
        let doc = ticket().to_document().unwrap();
        assert_eq!(doc.get("_id"), Some(&Bson::Int64(7)));
        assert!(doc.get("id").is_none());
    }

    #[test]
    fn to_document_omits_null_id() {
        let reporter = Reporter {
            id: None,
            name: "ana".to_string(),
        };
        let doc = reporter.to_document().unwrap();
        assert!(doc.get("_id").is_none());
        assert!(doc.get("id").is_none());
    }

    #[test]
    fn from_document_renames_primary_key_back() {
        let model = Ticket::from_document(doc! {
            "_id": 3_i64,
            "title": "t",
            "opened_at": "2026-08-01T09:30:00Z",
            "tags": [],
            "reporter": { "name": "ana" },
        })
        .unwrap();
        assert_eq!(model.id, 3);
        assert_eq!(model.reporter.id, None);
    }

    #[test]
    fn document_round_trip_preserves_all_fields() {
        let original = ticket();
        let back = Ticket::from_document(original.to_document().unwrap()).unwrap();
        assert_eq!(back, original);
    }

    #[test]
    fn from_document_rejects_schema_mismatch() {
        let result = Ticket::from_document(doc! { "_id": 1_i64, "title": 42 });
        assert!(result.is_err());
    }

    #[test]
    fn json_round_trip() {
        let original = ticket();
        let back = Ticket::from_json(original.to_json().unwrap()).unwrap();
        assert_eq!(back, original);
    }
}
