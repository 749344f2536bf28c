use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::key::{deserialize_keys, deserialize_optional_key};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CityDto {
    pub order: String,
    pub place: String,
    pub map: String,
    pub photo: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MissionDto {
    pub id: String,
    pub country: String,
    pub cities: Vec<CityDto>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_cities: Option<usize>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// City supplied on mission creation, whole-array update, or append.
///
/// `order` is the city's key; it may be sent as a string or a number and is generated
/// when absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateCityDto {
    #[serde(default, deserialize_with = "deserialize_optional_key")]
    pub order: Option<String>,
    pub place: String,
    #[serde(default)]
    pub map: Option<String>,
    #[serde(default)]
    pub photo: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateMissionDto {
    pub country: String,
    pub cities: Vec<CreateCityDto>,
    #[serde(default)]
    pub map: Option<String>,
    #[serde(default)]
    pub post: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateMissionDto {
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub cities: Option<Vec<CreateCityDto>>,
    #[serde(default)]
    pub map: Option<String>,
    #[serde(default)]
    pub post: Option<String>,
}

/// Partial update of a single city; absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CityPatchDto {
    #[serde(default)]
    pub place: Option<String>,
    #[serde(default)]
    pub map: Option<String>,
    #[serde(default)]
    pub photo: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReorderCitiesDto {
    #[serde(deserialize_with = "deserialize_keys")]
    pub cities_order: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MissionCitiesDto {
    pub mission_id: String,
    pub mission_country: String,
    pub cities: Vec<CityDto>,
}
