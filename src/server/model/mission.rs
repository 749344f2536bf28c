//! Mission domain model and the parameters of mission operations.
//!
//! A mission embeds an ordered array of cities. A city's `order` is its key within the
//! mission, not its position; the array order is the display order.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    model::{
        key::deserialize_key,
        mission::{
            CityDto, CityPatchDto, CreateCityDto, CreateMissionDto, MissionCitiesDto, MissionDto,
            UpdateMissionDto,
        },
    },
    server::{
        error::AppError,
        model::{document::Document, require_non_blank},
        util::ordered::{first_duplicate, Keyed, Patch},
    },
};

/// Minimum number of cities a new mission must carry.
pub const MIN_CITIES: usize = 2;

/// A city as stored inside a mission's `cities` array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    #[serde(deserialize_with = "deserialize_key")]
    pub order: String,
    #[serde(default)]
    pub place: String,
    #[serde(default)]
    pub map: String,
    #[serde(default)]
    pub photo: String,
}

impl Keyed for City {
    const KIND: &'static str = "City";

    fn key(&self) -> &str {
        &self.order
    }
}

impl City {
    pub fn into_dto(self) -> CityDto {
        CityDto {
            order: self.order,
            place: self.place,
            map: self.map,
            photo: self.photo,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MissionBody {
    #[serde(default)]
    country: String,
    #[serde(default)]
    cities: Vec<City>,
    #[serde(default)]
    map: Option<String>,
    #[serde(default)]
    post: Option<String>,
    #[serde(default)]
    total_cities: Option<usize>,
}

/// A mission with its embedded cities.
#[derive(Debug, Clone, PartialEq)]
pub struct Mission {
    pub id: String,
    pub country: String,
    pub cities: Vec<City>,
    pub map: Option<String>,
    pub post: Option<String>,
    /// City count written by the last city removal, if any.
    pub total_cities: Option<usize>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Mission {
    /// Reads a mission out of a stored document.
    ///
    /// Numeric city orders in older documents are read as their string form.
    pub fn from_document(document: Document) -> Result<Self, serde_json::Error> {
        let body: MissionBody = document.parse()?;

        Ok(Self {
            id: document.id,
            country: body.country,
            cities: body.cities,
            map: body.map,
            post: body.post,
            total_cities: body.total_cities,
            created_at: document.created_at,
            updated_at: document.updated_at,
        })
    }

    pub fn into_dto(self) -> MissionDto {
        MissionDto {
            id: self.id,
            country: self.country,
            cities: self.cities.into_iter().map(City::into_dto).collect(),
            map: self.map,
            post: self.post,
            total_cities: self.total_cities,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Converts the mission into the `{missionId, missionCountry, cities}` listing.
    pub fn into_cities_dto(self) -> MissionCitiesDto {
        MissionCitiesDto {
            mission_id: self.id,
            mission_country: self.country,
            cities: self.cities.into_iter().map(City::into_dto).collect(),
        }
    }
}

/// A city that may not have an order key yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCityParams {
    pub order: Option<String>,
    pub place: String,
    pub map: String,
    pub photo: String,
}

impl NewCityParams {
    /// Validates a single city.
    ///
    /// # Returns
    /// - `Ok(NewCityParams)`: Valid city
    /// - `Err(AppError::BadRequest)`: Blank place
    pub fn from_dto(dto: CreateCityDto) -> Result<Self, AppError> {
        require_non_blank("place", &dto.place)?;

        Ok(Self {
            order: dto.order.filter(|order| !order.trim().is_empty()),
            place: dto.place,
            map: dto.map.unwrap_or_default(),
            photo: dto.photo.unwrap_or_default(),
        })
    }

    /// Assigns `order` and produces the stored city.
    pub fn into_city(self, order: String) -> City {
        City {
            order,
            place: self.place,
            map: self.map,
            photo: self.photo,
        }
    }
}

/// Parameters for creating a mission.
#[derive(Debug, Clone)]
pub struct CreateMissionParams {
    pub country: String,
    pub cities: Vec<NewCityParams>,
    pub map: Option<String>,
    pub post: Option<String>,
}

impl CreateMissionParams {
    /// Validates a creation request.
    ///
    /// # Returns
    /// - `Ok(CreateMissionParams)`: Valid request
    /// - `Err(AppError::BadRequest)`: Blank country, fewer than two cities, or a blank place
    pub fn from_dto(dto: CreateMissionDto) -> Result<Self, AppError> {
        require_non_blank("country", &dto.country)?;

        if dto.cities.len() < MIN_CITIES {
            return Err(AppError::BadRequest(format!(
                "cities must contain at least {} elements",
                MIN_CITIES
            )));
        }

        Ok(Self {
            country: dto.country,
            cities: dto
                .cities
                .into_iter()
                .map(NewCityParams::from_dto)
                .collect::<Result<_, _>>()?,
            map: dto.map,
            post: dto.post,
        })
    }
}

/// Parameters for updating a mission. Absent fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateMissionParams {
    pub country: Option<String>,
    /// Replacement for the whole cities array.
    pub cities: Option<Vec<NewCityParams>>,
    pub map: Option<String>,
    pub post: Option<String>,
}

impl UpdateMissionParams {
    /// Validates an update request.
    ///
    /// # Returns
    /// - `Ok(UpdateMissionParams)`: Valid request
    /// - `Err(AppError::BadRequest)`: Blank country or place, or a city order used twice
    pub fn from_dto(dto: UpdateMissionDto) -> Result<Self, AppError> {
        if let Some(country) = &dto.country {
            require_non_blank("country", country)?;
        }

        let cities = dto
            .cities
            .map(|cities| {
                cities
                    .into_iter()
                    .map(NewCityParams::from_dto)
                    .collect::<Result<Vec<_>, _>>()
            })
            .transpose()?;

        if let Some(cities) = &cities {
            let orders = cities.iter().filter_map(|city| city.order.as_deref());
            if let Some(order) = first_duplicate(orders) {
                return Err(AppError::BadRequest(format!(
                    "City ID {} appears more than once",
                    order
                )));
            }
        }

        Ok(Self {
            country: dto.country,
            cities,
            map: dto.map,
            post: dto.post,
        })
    }
}

/// Typed partial update of a single city.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CityPatch {
    pub place: Option<String>,
    pub map: Option<String>,
    pub photo: Option<String>,
}

impl CityPatch {
    /// Validates a city patch.
    ///
    /// # Returns
    /// - `Ok(CityPatch)`: Valid patch
    /// - `Err(AppError::BadRequest)`: `place` present but blank
    pub fn from_dto(dto: CityPatchDto) -> Result<Self, AppError> {
        if let Some(place) = &dto.place {
            require_non_blank("place", place)?;
        }

        Ok(Self {
            place: dto.place,
            map: dto.map,
            photo: dto.photo,
        })
    }
}

impl Patch<City> for CityPatch {
    fn apply(self, target: &mut City) {
        if let Some(place) = self.place {
            target.place = place;
        }
        if let Some(map) = self.map {
            target.map = map;
        }
        if let Some(photo) = self.photo {
            target.photo = photo;
        }
    }
}
