use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};
use serde_json::{Map, Value};

use crate::server::{
    model::document::{DeletedDocument, Document, Filter},
    util::id::document_id,
};

/// Repository over the document store.
///
/// Every resource lives in the single `document` table, addressed by collection name and
/// document id, with its body kept as a JSON object. The repository stamps `created_at` and
/// `updated_at` on every write and converts rows to [`Document`] at the boundary.
pub struct DocumentRepository<'a> {
    /// Database connection for executing queries.
    db: &'a DatabaseConnection,
}

impl<'a> DocumentRepository<'a> {
    /// Creates a new repository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection reference
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Writes a document under a caller-chosen id, replacing any existing document.
    ///
    /// Both timestamps are stamped with the current time, including when an existing
    /// document is overwritten.
    ///
    /// # Arguments
    /// - `collection` - Collection the document belongs to
    /// - `id` - Document id, unique within the collection
    /// - `data` - Document body
    ///
    /// # Returns
    /// - `Ok(Document)` - The stored document
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create_with_id(
        &self,
        collection: &str,
        id: &str,
        data: Value,
    ) -> Result<Document, DbErr> {
        let now = Utc::now();

        let entity = entity::prelude::Document::insert(entity::document::ActiveModel {
            collection: ActiveValue::Set(collection.to_string()),
            id: ActiveValue::Set(id.to_string()),
            data: ActiveValue::Set(data),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        })
        .on_conflict(
            OnConflict::columns([
                entity::document::Column::Collection,
                entity::document::Column::Id,
            ])
            .update_columns([
                entity::document::Column::Data,
                entity::document::Column::CreatedAt,
                entity::document::Column::UpdatedAt,
            ])
            .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(Document::from_entity(entity))
    }

    /// Writes a document under a freshly generated 20-character id.
    ///
    /// # Arguments
    /// - `collection` - Collection the document belongs to
    /// - `data` - Document body
    ///
    /// # Returns
    /// - `Ok(Document)` - The stored document with its generated id
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, collection: &str, data: Value) -> Result<Document, DbErr> {
        self.create_with_id(collection, &document_id(), data).await
    }

    /// Lists documents of a collection in id order.
    ///
    /// Filters are ANDed and evaluated against the document body. The cursor is the id of
    /// the last document of the previous page; a cursor naming a document that does not
    /// exist is ignored and the listing starts from the beginning.
    ///
    /// # Arguments
    /// - `collection` - Collection to list
    /// - `filters` - Conditions every returned document satisfies
    /// - `limit` - Maximum number of documents returned
    /// - `start_after` - Optional cursor
    ///
    /// # Returns
    /// - `Ok(Vec<Document>)` - Up to `limit` matching documents
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_all(
        &self,
        collection: &str,
        filters: &[Filter],
        limit: u64,
        start_after: Option<&str>,
    ) -> Result<Vec<Document>, DbErr> {
        let mut query = entity::prelude::Document::find()
            .filter(entity::document::Column::Collection.eq(collection))
            .order_by_asc(entity::document::Column::Id);

        if let Some(cursor) = start_after {
            if self.find_one(collection, cursor).await?.is_some() {
                query = query.filter(entity::document::Column::Id.gt(cursor));
            }
        }

        // Filters run in memory, so the limit can only be pushed down without them.
        if filters.is_empty() {
            query = query.limit(limit);
        }

        let documents = query
            .all(self.db)
            .await?
            .into_iter()
            .map(Document::from_entity)
            .filter(|document| filters.iter().all(|filter| filter.matches(document)))
            .take(limit as usize)
            .collect();

        Ok(documents)
    }

    /// Gets a document by id.
    ///
    /// # Returns
    /// - `Ok(Some(Document))` - Document found
    /// - `Ok(None)` - No document with that id in the collection
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_one(&self, collection: &str, id: &str) -> Result<Option<Document>, DbErr> {
        let entity = entity::prelude::Document::find_by_id((collection.to_string(), id.to_string()))
            .one(self.db)
            .await?;

        Ok(entity.map(Document::from_entity))
    }

    /// Merges `patch` into a document's body and re-stamps `updated_at`.
    ///
    /// The merge is top-level: each key of `patch` replaces the stored value of that key
    /// as a whole, and keys not in `patch` keep their stored values.
    ///
    /// # Arguments
    /// - `collection` - Collection the document belongs to
    /// - `id` - Document id
    /// - `patch` - Top-level fields to write
    ///
    /// # Returns
    /// - `Ok(Some(Document))` - The updated document
    /// - `Ok(None)` - No document with that id in the collection
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn update(
        &self,
        collection: &str,
        id: &str,
        patch: Map<String, Value>,
    ) -> Result<Option<Document>, DbErr> {
        let Some(existing) = self.find_one(collection, id).await? else {
            return Ok(None);
        };

        let mut data = existing.data;
        data.extend(patch);

        let entity = entity::document::ActiveModel {
            collection: ActiveValue::Unchanged(collection.to_string()),
            id: ActiveValue::Unchanged(id.to_string()),
            data: ActiveValue::Set(Value::Object(data)),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(Some(Document::from_entity(entity)))
    }

    /// Deletes a document.
    ///
    /// # Returns
    /// - `Ok(Some(DeletedDocument))` - The document was deleted
    /// - `Ok(None)` - No document with that id in the collection
    /// - `Err(DbErr)` - Database error during delete
    pub async fn remove(&self, collection: &str, id: &str) -> Result<Option<DeletedDocument>, DbErr> {
        let result =
            entity::prelude::Document::delete_by_id((collection.to_string(), id.to_string()))
                .exec(self.db)
                .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        Ok(Some(DeletedDocument {
            id: id.to_string(),
            deleted: true,
        }))
    }

    /// Checks that the store answers queries.
    ///
    /// # Returns
    /// - `Ok(())` - The store is reachable
    /// - `Err(DbErr)` - Connection failure
    pub async fn ping(&self) -> Result<(), DbErr> {
        self.db.ping().await
    }
}
