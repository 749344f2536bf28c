//! Country domain model and the validated parameters of country operations.
//!
//! Countries are flat documents: the client picks the id and every descriptive field
//! lives at the top level of the document body.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::{
    model::country::{CountryDto, CountryFieldsDto, CreateCountryDto, GeopointDto, UpdateCountryDto},
    server::{
        error::AppError,
        model::{document::Document, require_length, require_non_blank, require_url},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Country {
    pub id: String,
    pub fields: CountryFieldsDto,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Country {
    /// Reads a country out of a stored document.
    pub fn from_document(document: Document) -> Result<Self, serde_json::Error> {
        let fields = document.parse()?;

        Ok(Self {
            id: document.id,
            fields,
            created_at: document.created_at,
            updated_at: document.updated_at,
        })
    }

    pub fn into_dto(self) -> CountryDto {
        CountryDto {
            id: self.id,
            fields: self.fields,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Parameters for creating a country under a client-chosen id.
#[derive(Debug, Clone)]
pub struct CreateCountryParams {
    pub id: String,
    pub fields: CountryFieldsDto,
}

impl CreateCountryParams {
    /// Validates a creation request.
    ///
    /// # Returns
    /// - `Ok(CreateCountryParams)`: Valid request
    /// - `Err(AppError::BadRequest)`: A required field is blank, a link is not a URL, the
    ///   geopoint is missing or out of range, or `custID` is not positive
    pub fn from_dto(dto: CreateCountryDto) -> Result<Self, AppError> {
        let fields = &dto.fields;

        require_non_blank("id", &dto.id)?;
        require_non_blank("name", &fields.name)?;
        require_non_blank("capital", &fields.capital)?;
        require_non_blank("geographical_division", &fields.geographical_division)?;

        for flag in &fields.flags {
            require_url("flags", flag)?;
        }
        validate_links(
            fields.coat_of_arms.as_deref(),
            fields.physical_map.as_deref(),
            fields.political_map.as_deref(),
        )?;

        match &fields.geopoint {
            Some(geopoint) => validate_geopoint(geopoint)?,
            None => return Err(AppError::BadRequest("geopoint is required".to_string())),
        }

        validate_numbers(fields.cust_id, fields.population, fields.area)?;

        Ok(Self {
            id: dto.id,
            fields: dto.fields,
        })
    }
}

/// Validated partial update, already in the shape merged into the stored body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateCountryParams {
    pub patch: Map<String, Value>,
}

impl UpdateCountryParams {
    /// Validates an update request and collects the fields it sets.
    ///
    /// # Returns
    /// - `Ok(UpdateCountryParams)`: Valid request
    /// - `Err(AppError::BadRequest)`: A present field breaks its rule
    pub fn from_dto(dto: UpdateCountryDto) -> Result<Self, AppError> {
        if let Some(name) = &dto.name {
            require_length("name", name, 2, 100)?;
        }
        if let Some(capital) = &dto.capital {
            require_length("capital", capital, 1, 100)?;
        }
        if let Some(government) = &dto.government {
            require_length("government", government, 1, 100)?;
        }
        if let Some(division) = &dto.geographical_division {
            require_non_blank("geographical_division", division)?;
        }
        for flag in dto.flags.iter().flatten() {
            require_url("flags", flag)?;
        }
        validate_links(
            dto.coat_of_arms.as_deref(),
            dto.physical_map.as_deref(),
            dto.political_map.as_deref(),
        )?;
        if let Some(geopoint) = &dto.geopoint {
            validate_geopoint(geopoint)?;
        }
        validate_numbers(dto.cust_id, dto.population, dto.area)?;

        let patch = match serde_json::to_value(&dto) {
            Ok(Value::Object(map)) => map,
            Ok(_) => Map::new(),
            Err(e) => return Err(AppError::InternalError(e.to_string())),
        };

        Ok(Self { patch })
    }
}

fn validate_links(
    coat_of_arms: Option<&str>,
    physical_map: Option<&str>,
    political_map: Option<&str>,
) -> Result<(), AppError> {
    if let Some(link) = coat_of_arms {
        require_url("coat_of_arms", link)?;
    }
    if let Some(link) = physical_map {
        require_url("physical_map", link)?;
    }
    if let Some(link) = political_map {
        require_url("political_map", link)?;
    }
    Ok(())
}

fn validate_geopoint(geopoint: &GeopointDto) -> Result<(), AppError> {
    if !(-90.0..=90.0).contains(&geopoint.latitude) {
        return Err(AppError::BadRequest(
            "latitude must be between -90 and 90".to_string(),
        ));
    }
    if !(-180.0..=180.0).contains(&geopoint.longitude) {
        return Err(AppError::BadRequest(
            "longitude must be between -180 and 180".to_string(),
        ));
    }
    Ok(())
}

fn validate_numbers(
    cust_id: Option<i64>,
    population: Option<i64>,
    area: Option<f64>,
) -> Result<(), AppError> {
    if cust_id.is_some_and(|id| id <= 0) {
        return Err(AppError::BadRequest(
            "custID must be a positive number".to_string(),
        ));
    }
    if population.is_some_and(|population| population < 0) {
        return Err(AppError::BadRequest(
            "population must not be less than 0".to_string(),
        ));
    }
    if area.is_some_and(|area| area < 0.0) {
        return Err(AppError::BadRequest(
            "area must not be less than 0".to_string(),
        ));
    }
    Ok(())
}
