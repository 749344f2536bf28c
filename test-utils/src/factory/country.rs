//! Country factory for inserting flat country documents.

use sea_orm::{DatabaseConnection, DbErr};
use serde_json::Value;

use crate::factory::helpers::{insert_document, next_id};
use crate::fixture::document::{country_data, COUNTRIES};

/// Factory for creating country documents with overridable fields.
pub struct CountryFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    data: Value,
}

impl<'a> CountryFactory<'a> {
    /// Creates a factory with a unique id and the fixture defaults.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = format!("country{}", next_id());
        let data = country_data(&id, &format!("Country {}", id));

        Self { db, id, data }
    }

    /// Overrides the generated document id.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Sets the country name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.data["name"] = Value::String(name.into());
        self
    }

    /// Sets the `region` field used by region lookups.
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.data["region"] = Value::String(region.into());
        self
    }

    /// Replaces the `continents` array used by continent lookups.
    pub fn continents(mut self, continents: &[&str]) -> Self {
        self.data["continents"] = Value::from(continents.to_vec());
        self
    }

    /// Builds and inserts the country document.
    pub async fn build(self) -> Result<entity::document::Model, DbErr> {
        insert_document(self.db, COUNTRIES, &self.id, self.data).await
    }
}

/// Creates a country with the fixture defaults.
pub async fn create_country(db: &DatabaseConnection) -> Result<entity::document::Model, DbErr> {
    CountryFactory::new(db).build().await
}
