//! Typed collection binding and the forwarded CRUD surface.

use bson::{Bson, Document, doc, ser::serialize_to_bson};
use futures::TryStreamExt;
use mongodb::{
    Collection, Database, IndexModel,
    options::{FindOneOptions, FindOptions, IndexOptions, ReturnDocument},
    results::{DeleteResult, InsertManyResult, InsertOneResult, UpdateResult},
};
use std::marker::PhantomData;

use docmap_core::{
    error::{DocMapError, DocMapResult},
    index::IndexSpec,
    model::Model,
    sort::{parse_sort, sort_document},
};

/// Binds a [`Model`] type to one driver collection for its lifetime.
///
/// Declared indexes and the schema validator are applied once, at bind
/// time. Every method afterwards is a single forwarded driver call, with
/// model → document translation on the way in and document → model
/// translation on the way out. Sort parameters are compact sort-spec
/// strings (`"name,-created_at"`).
#[derive(Debug)]
pub struct MongoCollection<M: Model> {
    collection: Collection<Document>,
    _marker: PhantomData<M>,
}

impl<M: Model> MongoCollection<M> {
    /// Binds `M` to its collection in `database`.
    ///
    /// Ensures declared indexes (create-if-absent) and, when the model
    /// declares a validator, attaches it: an existing collection is
    /// modified in place, a missing one is created with the validator
    /// attached. Fails with [`DocMapError::Config`] on an empty collection
    /// name or a validator-modify command that does not report success.
    pub async fn bind(database: &Database) -> DocMapResult<Self> {
        if M::COLLECTION.is_empty() {
            return Err(DocMapError::Config("empty collection name".to_string()));
        }
        let collection = database.collection::<Document>(M::COLLECTION);

        let indexes = M::indexes();
        if !indexes.is_empty() {
            collection
                .create_indexes(indexes.iter().map(index_model))
                .await
                .map_err(DocMapError::driver)?;
            tracing::debug!(collection = M::COLLECTION, count = indexes.len(), "ensured indexes");
        }

        if let Some(validator) = M::validator() {
            apply_validator(database, M::COLLECTION, validator).await?;
        }

        Ok(MongoCollection {
            collection,
            _marker: PhantomData,
        })
    }

    /// Returns the name of the bound collection.
    pub fn name(&self) -> &str {
        M::COLLECTION
    }

    /// Inserts one model; the driver result carries the inserted id.
    pub async fn insert_one(&self, model: &M) -> DocMapResult<InsertOneResult> {
        self.collection
            .insert_one(model.to_document()?)
            .await
            .map_err(DocMapError::driver)
    }

    /// Inserts a batch. With `ordered`, the driver stops at the first
    /// failure; otherwise it attempts every document.
    pub async fn insert_many(&self, models: &[M], ordered: bool) -> DocMapResult<InsertManyResult> {
        let documents = models
            .iter()
            .map(|model| model.to_document())
            .collect::<DocMapResult<Vec<_>>>()?;
        self.collection
            .insert_many(documents)
            .ordered(ordered)
            .await
            .map_err(DocMapError::driver)
    }

    /// Fetches the model with this identifier, if any.
    pub async fn get_or_none(&self, id: &M::Id) -> DocMapResult<Option<M>> {
        self.collection
            .find_one(Self::id_filter(id)?)
            .await
            .map_err(DocMapError::driver)?
            .map(M::from_document)
            .transpose()
    }

    /// Fetches the model with this identifier, or fails with
    /// [`DocMapError::NotFound`].
    pub async fn get(&self, id: &M::Id) -> DocMapResult<M> {
        self.get_or_none(id).await?.ok_or_else(|| Self::not_found(id))
    }

    /// Finds every model matching `filter`, with an optional sort spec and
    /// row limit.
    pub async fn find(
        &self,
        filter: Document,
        sort: Option<&str>,
        limit: Option<u64>,
    ) -> DocMapResult<Vec<M>> {
        let mut options = FindOptions::default();
        options.sort = sort_option(sort);
        options.limit = limit.map(|n| n as i64);

        self.collection
            .find(filter)
            .with_options(options)
            .await
            .map_err(DocMapError::driver)?
            .try_collect::<Vec<Document>>()
            .await
            .map_err(DocMapError::driver)?
            .into_iter()
            .map(M::from_document)
            .collect()
    }

    /// Finds the first model matching `filter`, with an optional sort spec.
    pub async fn find_one(&self, filter: Document, sort: Option<&str>) -> DocMapResult<Option<M>> {
        let mut options = FindOneOptions::default();
        options.sort = sort_option(sort);

        self.collection
            .find_one(filter)
            .with_options(options)
            .await
            .map_err(DocMapError::driver)?
            .map(M::from_document)
            .transpose()
    }

    /// Applies `update` to the document with this identifier and returns
    /// the post-update model, in one atomic driver operation. Fails with
    /// [`DocMapError::NotFound`] when nothing matched.
    pub async fn update_and_get(&self, id: &M::Id, update: Document) -> DocMapResult<M> {
        let updated = self
            .collection
            .find_one_and_update(Self::id_filter(id)?, update)
            .return_document(ReturnDocument::After)
            .await
            .map_err(DocMapError::driver)?;
        match updated {
            Some(doc) => M::from_document(doc),
            None => Err(Self::not_found(id)),
        }
    }

    /// [`update_and_get`](Self::update_and_get) with the update wrapped in
    /// `$set`.
    pub async fn set_and_get(&self, id: &M::Id, fields: Document) -> DocMapResult<M> {
        self.update_and_get(id, doc! { "$set": fields }).await
    }

    /// Applies `update` to the document with this identifier.
    pub async fn update(
        &self,
        id: &M::Id,
        update: Document,
        upsert: bool,
    ) -> DocMapResult<UpdateResult> {
        self.collection
            .update_one(Self::id_filter(id)?, update)
            .upsert(upsert)
            .await
            .map_err(DocMapError::driver)
    }

    /// `$set`s fields on the document with this identifier.
    pub async fn set(
        &self,
        id: &M::Id,
        fields: Document,
        upsert: bool,
    ) -> DocMapResult<UpdateResult> {
        self.update(id, doc! { "$set": fields }, upsert).await
    }

    /// `$set`s fields and `$push`es array values on the document with this
    /// identifier, in one update.
    pub async fn set_and_push(
        &self,
        id: &M::Id,
        fields: Document,
        push: Document,
    ) -> DocMapResult<UpdateResult> {
        self.collection
            .update_one(Self::id_filter(id)?, doc! { "$set": fields, "$push": push })
            .await
            .map_err(DocMapError::driver)
    }

    /// Applies `update` to the first document matching `filter`.
    pub async fn update_one(
        &self,
        filter: Document,
        update: Document,
        upsert: bool,
    ) -> DocMapResult<UpdateResult> {
        self.collection
            .update_one(filter, update)
            .upsert(upsert)
            .await
            .map_err(DocMapError::driver)
    }

    /// Applies `update` to every document matching `filter`.
    pub async fn update_many(
        &self,
        filter: Document,
        update: Document,
        upsert: bool,
    ) -> DocMapResult<UpdateResult> {
        self.collection
            .update_many(filter, update)
            .upsert(upsert)
            .await
            .map_err(DocMapError::driver)
    }

    /// `$set`s fields on every document matching `filter`.
    pub async fn set_many(&self, filter: Document, fields: Document) -> DocMapResult<UpdateResult> {
        self.update_many(filter, doc! { "$set": fields }, false).await
    }

    /// Deletes the document with this identifier.
    pub async fn delete(&self, id: &M::Id) -> DocMapResult<DeleteResult> {
        self.collection
            .delete_one(Self::id_filter(id)?)
            .await
            .map_err(DocMapError::driver)
    }

    /// Deletes the first document matching `filter`.
    pub async fn delete_one(&self, filter: Document) -> DocMapResult<DeleteResult> {
        self.collection
            .delete_one(filter)
            .await
            .map_err(DocMapError::driver)
    }

    /// Deletes every document matching `filter`.
    pub async fn delete_many(&self, filter: Document) -> DocMapResult<DeleteResult> {
        self.collection
            .delete_many(filter)
            .await
            .map_err(DocMapError::driver)
    }

    /// Counts documents matching `filter`.
    pub async fn count(&self, filter: Document) -> DocMapResult<u64> {
        self.collection
            .count_documents(filter)
            .await
            .map_err(DocMapError::driver)
    }

    /// Whether any document matches `filter`.
    pub async fn exists(&self, filter: Document) -> DocMapResult<bool> {
        Ok(self.count(filter).await? > 0)
    }

    /// Drops the bound collection and everything in it.
    pub async fn drop_collection(&self) -> DocMapResult<()> {
        self.collection.drop().await.map_err(DocMapError::driver)
    }

    fn id_filter(id: &M::Id) -> DocMapResult<Document> {
        Ok(doc! { "_id": serialize_to_bson(id)? })
    }

    fn not_found(id: &M::Id) -> DocMapError {
        DocMapError::NotFound(format!("{id:?}"), M::COLLECTION.to_string())
    }
}

fn sort_option(sort: Option<&str>) -> Option<Document> {
    let keys = parse_sort(sort?);
    if keys.is_empty() {
        None
    } else {
        Some(sort_document(&keys))
    }
}

fn index_model(spec: &IndexSpec) -> IndexModel {
    let keys: Document = spec
        .keys
        .iter()
        .map(|(field, order)| (field.clone(), Bson::Int32(order.as_i32())))
        .collect();
    if spec.unique {
        IndexModel::builder()
            .keys(keys)
            .options(IndexOptions::builder().unique(true).build())
            .build()
    } else {
        IndexModel::builder().keys(keys).build()
    }
}

async fn apply_validator(
    database: &Database,
    name: &str,
    validator: Document,
) -> DocMapResult<()> {
    let existing = database
        .list_collection_names()
        .await
        .map_err(DocMapError::driver)?;
    if existing.iter().any(|collection| collection == name) {
        let reply = database
            .run_command(doc! { "collMod": name, "validator": validator })
            .await
            .map_err(DocMapError::driver)?;
        if !reply.contains_key("ok") {
            return Err(DocMapError::Config(format!(
                "cannot set schema validator on {name}"
            )));
        }
    } else {
        database
            .create_collection(name)
            .validator(validator)
            .await
            .map_err(DocMapError::driver)?;
    }
    tracing::debug!(collection = name, "applied schema validator");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use docmap_core::index::parse_indexes;

    #[test]
    fn index_model_maps_keys_and_uniqueness() {
        let specs = parse_indexes("a, !b");
        let plain = index_model(&specs[0]);
        assert_eq!(plain.keys, doc! { "a": 1 });
        assert!(plain.options.is_none());

        let unique = index_model(&specs[1]);
        assert_eq!(unique.keys, doc! { "b": 1 });
        assert_eq!(unique.options.unwrap().unique, Some(true));
    }

    #[test]
    fn index_model_preserves_compound_key_order() {
        let model = index_model(&IndexSpec::parse("!a,-b"));
        assert_eq!(model.keys, doc! { "a": 1, "b": -1 });
        assert_eq!(model.options.unwrap().unique, Some(true));
    }

    #[test]
    fn sort_option_parses_specs() {
        assert_eq!(sort_option(None), None);
        assert_eq!(sort_option(Some("")), None);
        assert_eq!(sort_option(Some("a,-b")), Some(doc! { "a": 1, "b": -1 }));
    }
}
