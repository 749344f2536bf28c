//! Mission factory for inserting mission documents with embedded cities.

use sea_orm::{DatabaseConnection, DbErr};

use crate::factory::helpers::{insert_document, next_short_id};
use crate::fixture::document::{city, mission_data, DEFAULT_MISSION_COUNTRY, MISSIONS};

/// Factory for creating mission documents.
///
/// Cities added without an explicit order receive `elem_<missionId>_<index>`.
pub struct MissionFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    country: String,
    cities: Vec<(Option<String>, String)>,
}

impl<'a> MissionFactory<'a> {
    /// Creates a factory with a unique id, the default country and no cities.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            id: next_short_id(),
            country: DEFAULT_MISSION_COUNTRY.to_string(),
            cities: Vec::new(),
        }
    }

    /// Overrides the generated document id.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Sets the mission country.
    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    /// Appends a city whose order key is derived from its position.
    pub fn city(mut self, place: impl Into<String>) -> Self {
        self.cities.push((None, place.into()));
        self
    }

    /// Appends a city with an explicit order key.
    pub fn city_with_order(mut self, order: impl Into<String>, place: impl Into<String>) -> Self {
        self.cities.push((Some(order.into()), place.into()));
        self
    }

    /// Builds and inserts the mission document.
    pub async fn build(self) -> Result<entity::document::Model, DbErr> {
        let cities = self
            .cities
            .iter()
            .enumerate()
            .map(|(index, (order, place))| {
                let order = order
                    .clone()
                    .unwrap_or_else(|| format!("elem_{}_{}", self.id, index));
                city(&order, place, "", "")
            })
            .collect();

        insert_document(
            self.db,
            MISSIONS,
            &self.id,
            mission_data(&self.country, cities),
        )
        .await
    }
}

/// Creates a mission to Chile with two cities, Santiago and Valparaíso.
pub async fn create_mission(db: &DatabaseConnection) -> Result<entity::document::Model, DbErr> {
    MissionFactory::new(db)
        .city("Santiago")
        .city("Valparaíso")
        .build()
        .await
}
