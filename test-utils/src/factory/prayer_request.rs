//! Prayer request factory for inserting flat prayer request documents.

use sea_orm::{DatabaseConnection, DbErr};

use crate::factory::helpers::{insert_document, next_id};
use crate::fixture::document::{prayer_request_data, PRAYER_REQUESTS};

/// Factory for creating prayer request documents.
pub struct PrayerRequestFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    requester: Option<String>,
    title: String,
    description: String,
}

impl<'a> PrayerRequestFactory<'a> {
    /// Creates a factory with a unique id and placeholder title and description.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let n = next_id();

        Self {
            db,
            id: format!("request{}", n),
            requester: None,
            title: format!("Request {}", n),
            description: "Please pray for us".to_string(),
        }
    }

    /// Sets the requester name.
    pub fn requester(mut self, requester: impl Into<String>) -> Self {
        self.requester = Some(requester.into());
        self
    }

    /// Sets the request title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Builds and inserts the prayer request document.
    pub async fn build(self) -> Result<entity::document::Model, DbErr> {
        let data = prayer_request_data(self.requester.as_deref(), &self.title, &self.description);

        insert_document(self.db, PRAYER_REQUESTS, &self.id, data).await
    }
}

/// Creates an anonymous prayer request with placeholder content.
pub async fn create_prayer_request(
    db: &DatabaseConnection,
) -> Result<entity::document::Model, DbErr> {
    PrayerRequestFactory::new(db).build().await
}
