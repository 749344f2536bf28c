//! Shared helper utilities for factory methods.

use chrono::Utc;
use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait};
use serde_json::Value;

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Generates an 8-character document id shaped like the ids the services generate.
pub fn next_short_id() -> String {
    format!("{:08x}", next_id())
}

/// Inserts a raw document into the store, stamping both timestamps with the current time.
///
/// # Arguments
/// - `db` - Database connection
/// - `collection` - Collection the document belongs to
/// - `id` - Document id, unique within the collection
/// - `data` - JSON object stored as the document body
///
/// # Returns
/// - `Ok(entity::document::Model)` - The inserted row
/// - `Err(DbErr)` - Database error during insert (e.g. duplicate id)
pub async fn insert_document(
    db: &DatabaseConnection,
    collection: &str,
    id: &str,
    data: Value,
) -> Result<entity::document::Model, DbErr> {
    let now = Utc::now();

    entity::prelude::Document::insert(entity::document::ActiveModel {
        collection: ActiveValue::Set(collection.to_string()),
        id: ActiveValue::Set(id.to_string()),
        data: ActiveValue::Set(data),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
    })
    .exec_with_returning(db)
    .await
}
