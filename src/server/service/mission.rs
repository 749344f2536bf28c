use sea_orm::DatabaseConnection;
use serde_json::{Map, Value};

use crate::server::{
    data::document::DocumentRepository,
    error::{collection::CollectionError, AppError, StoreContext},
    model::{
        document::{DeletedDocument, Document},
        mission::{City, CityPatch, CreateMissionParams, Mission, NewCityParams, UpdateMissionParams},
        PageParams, ReorderParams,
    },
    service::{field_patch, malformed, to_json},
    util::{
        id::{child_id, fresh_child_id, indexed_timestamp_id, short_id},
        ordered::{self, Keyed},
    },
};

/// Collection holding mission documents.
pub const MISSIONS: &str = "missions";

/// Mission operations, including edits of the embedded cities array.
pub struct MissionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MissionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a mission under a new short id.
    ///
    /// Cities receive order keys `elem_<missionId>_<index>` in the order given; orders sent
    /// by the client are not used on creation.
    ///
    /// # Returns
    /// - `Ok(Mission)` - The stored mission
    /// - `Err(AppError::StoreErr)` - Store failure
    pub async fn create(&self, params: CreateMissionParams) -> Result<Mission, AppError> {
        let repo = DocumentRepository::new(self.db);

        let mission_id = short_id();
        let cities: Vec<City> = params
            .cities
            .into_iter()
            .enumerate()
            .map(|(index, city)| city.into_city(child_id(&mission_id, index)))
            .collect();

        let mut data = Map::new();
        data.insert("country".to_string(), Value::String(params.country));
        data.insert("cities".to_string(), to_json(&cities)?);
        if let Some(map) = params.map {
            data.insert("map".to_string(), Value::String(map));
        }
        if let Some(post) = params.post {
            data.insert("post".to_string(), Value::String(post));
        }

        let document = repo
            .create_with_id(MISSIONS, &mission_id, Value::Object(data))
            .await
            .context("Failed to create mission")?;

        tracing::info!("Created mission {} with {} cities", mission_id, cities.len());

        read_mission(document)
    }

    /// Lists missions in id order.
    pub async fn find_all(&self, page: PageParams) -> Result<Vec<Mission>, AppError> {
        let repo = DocumentRepository::new(self.db);

        let documents = repo
            .find_all(MISSIONS, &[], page.limit, page.start_after.as_deref())
            .await
            .context("Failed to fetch missions")?;

        documents.into_iter().map(read_mission).collect()
    }

    /// Gets a mission by id.
    ///
    /// # Returns
    /// - `Ok(Mission)` - The mission
    /// - `Err(AppError::NotFound)` - No mission with that id
    /// - `Err(AppError::StoreErr)` - Store failure
    pub async fn find_one(&self, id: &str) -> Result<Mission, AppError> {
        let repo = DocumentRepository::new(self.db);

        let document = repo
            .find_one(MISSIONS, id)
            .await
            .context("Failed to fetch mission")?
            .ok_or_else(|| not_found(id))?;

        read_mission(document)
    }

    /// Updates a mission's top-level fields and/or replaces its whole cities array.
    ///
    /// Cities without an order receive `elem_<millis>_<index>`.
    pub async fn update(&self, id: &str, params: UpdateMissionParams) -> Result<Mission, AppError> {
        let mut patch = Map::new();

        if let Some(country) = params.country {
            patch.insert("country".to_string(), Value::String(country));
        }
        if let Some(map) = params.map {
            patch.insert("map".to_string(), Value::String(map));
        }
        if let Some(post) = params.post {
            patch.insert("post".to_string(), Value::String(post));
        }
        if let Some(drafts) = params.cities {
            let cities: Vec<City> = drafts
                .into_iter()
                .enumerate()
                .map(|(index, draft)| {
                    let order = draft
                        .order
                        .clone()
                        .unwrap_or_else(|| indexed_timestamp_id(index));
                    draft.into_city(order)
                })
                .collect();
            patch.insert("cities".to_string(), to_json(&cities)?);
        }

        let mission = self.write(id, patch, "Failed to update mission").await?;

        tracing::debug!("Updated mission {}", id);

        Ok(mission)
    }

    /// Deletes a mission together with its cities.
    pub async fn remove(&self, id: &str) -> Result<DeletedDocument, AppError> {
        let repo = DocumentRepository::new(self.db);

        let deleted = repo
            .remove(MISSIONS, id)
            .await
            .context("Failed to delete mission")?
            .ok_or_else(|| not_found(id))?;

        tracing::info!("Deleted mission {}", id);

        Ok(deleted)
    }

    /// Appends a city.
    ///
    /// A client-supplied order is kept when unused; otherwise a fresh key is generated.
    ///
    /// # Returns
    /// - `Ok(City)` - The appended city
    /// - `Err(AppError::NotFound)` - No mission with that id
    /// - `Err(AppError::CollectionErr)` - The supplied order is already used
    /// - `Err(AppError::StoreErr)` - Store failure
    pub async fn add_city(&self, mission_id: &str, params: NewCityParams) -> Result<City, AppError> {
        let mission = self.find_one(mission_id).await?;

        let order = match params.order.clone() {
            Some(order) if ordered::find(&mission.cities, &order).is_some() => {
                return Err(CollectionError::duplicate::<City>(&order).into());
            }
            Some(order) => order,
            None => fresh_child_id(mission.cities.iter().map(City::key)),
        };
        let city = params.into_city(order);
        let cities = ordered::append(&mission.cities, city.clone());

        self.write(
            mission_id,
            field_patch("cities", &cities)?,
            "Failed to add city",
        )
        .await?;

        tracing::debug!("Added city {} to mission {}", city.order, mission_id);

        Ok(city)
    }

    /// Merges a patch onto one city.
    ///
    /// # Returns
    /// - `Ok(City)` - The city after the patch
    /// - `Err(AppError::NotFound)` - No mission with that id
    /// - `Err(AppError::CollectionErr)` - No city with that order; nothing is written
    /// - `Err(AppError::StoreErr)` - Store failure
    pub async fn update_city(
        &self,
        mission_id: &str,
        city_id: &str,
        patch: CityPatch,
    ) -> Result<City, AppError> {
        let mission = self.find_one(mission_id).await?;

        let cities = ordered::update_at(&mission.cities, city_id, patch)?;
        let city = ordered::find(&cities, city_id)
            .cloned()
            .ok_or_else(|| CollectionError::not_found::<City>(city_id))?;

        self.write(
            mission_id,
            field_patch("cities", &cities)?,
            "Failed to update city",
        )
        .await?;

        tracing::debug!("Updated city {} of mission {}", city_id, mission_id);

        Ok(city)
    }

    /// Removes one city and records the remaining count in `totalCities`.
    pub async fn remove_city(&self, mission_id: &str, city_id: &str) -> Result<Mission, AppError> {
        let mission = self.find_one(mission_id).await?;

        let cities = ordered::remove_at(&mission.cities, city_id)?;

        let mut patch = field_patch("cities", &cities)?;
        patch.insert("totalCities".to_string(), Value::from(cities.len()));

        let mission = self
            .write(mission_id, patch, "Failed to remove city")
            .await?;

        tracing::debug!("Removed city {} from mission {}", city_id, mission_id);

        Ok(mission)
    }

    /// Rearranges the cities into the order of `params.keys`.
    ///
    /// # Returns
    /// - `Ok(Vec<City>)` - The cities in their new order
    /// - `Err(AppError::NotFound)` - No mission with that id
    /// - `Err(AppError::CollectionErr)` - The keys are not a permutation of the city orders;
    ///   nothing is written
    /// - `Err(AppError::StoreErr)` - Store failure
    pub async fn reorder_cities(
        &self,
        mission_id: &str,
        params: ReorderParams,
    ) -> Result<Vec<City>, AppError> {
        let mission = self.find_one(mission_id).await?;

        let cities = ordered::reorder(&mission.cities, &params.keys)?;

        self.write(
            mission_id,
            field_patch("cities", &cities)?,
            "Failed to reorder cities",
        )
        .await?;

        tracing::debug!("Reordered {} cities of mission {}", cities.len(), mission_id);

        Ok(cities)
    }

    /// Gets one city of a mission.
    pub async fn get_city(&self, mission_id: &str, city_id: &str) -> Result<City, AppError> {
        let mission = self.find_one(mission_id).await?;

        ordered::find(&mission.cities, city_id)
            .cloned()
            .ok_or_else(|| CollectionError::not_found::<City>(city_id).into())
    }

    /// Gets a mission for the `{missionId, missionCountry, cities}` listing.
    pub async fn get_cities(&self, mission_id: &str) -> Result<Mission, AppError> {
        self.find_one(mission_id).await
    }

    async fn write(
        &self,
        id: &str,
        patch: Map<String, Value>,
        context: &str,
    ) -> Result<Mission, AppError> {
        let repo = DocumentRepository::new(self.db);

        let document = repo
            .update(MISSIONS, id, patch)
            .await
            .context(context)?
            .ok_or_else(|| not_found(id))?;

        read_mission(document)
    }
}

fn not_found(id: &str) -> AppError {
    AppError::NotFound(format!("Mission with ID {} not found", id))
}

fn read_mission(document: Document) -> Result<Mission, AppError> {
    let id = document.id.clone();
    Mission::from_document(document).map_err(|e| malformed("mission", &id, e))
}
