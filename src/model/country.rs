use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GeopointDto {
    pub latitude: f64,
    pub longitude: f64,
}

/// Descriptive fields of a country as stored in the document body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CountryFieldsDto {
    #[serde(rename = "custID", default, skip_serializing_if = "Option::is_none")]
    pub cust_id: Option<i64>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub continents: Vec<String>,
    #[serde(default)]
    pub flags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coat_of_arms: Option<String>,
    #[serde(default)]
    pub capital: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geopoint: Option<GeopointDto>,
    #[serde(default)]
    pub geographical_division: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub physical_map: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub political_map: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub government: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub principal_cities: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hills: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volcanoes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doors: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dangerous_places: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub population: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub religions: Option<String>,
}

/// Country creation payload. The client chooses the document id.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateCountryDto {
    pub id: String,
    #[serde(flatten)]
    pub fields: CountryFieldsDto,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CountryDto {
    pub id: String,
    #[serde(flatten)]
    pub fields: CountryFieldsDto,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial country update. Only fields present in the request are written.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateCountryDto {
    #[serde(rename = "custID", default, skip_serializing_if = "Option::is_none")]
    pub cust_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub continents: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coat_of_arms: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capital: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geopoint: Option<GeopointDto>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geographical_division: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub physical_map: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub political_map: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub government: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub principal_cities: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hills: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volcanoes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doors: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dangerous_places: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub population: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub religions: Option<String>,
}

/// Response of the continent lookup: the list envelope plus the searched value.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContinentSearchDto {
    pub message: String,
    pub data: Vec<CountryDto>,
    pub count: usize,
    pub searched_continent: String,
}
