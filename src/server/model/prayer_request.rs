//! Prayer request domain model and parameters.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::{
    model::prayer_request::{CreatePrayerRequestDto, PrayerRequestDto, UpdatePrayerRequestDto},
    server::{
        error::AppError,
        model::{document::Document, require_non_blank},
    },
};

#[derive(Debug, Deserialize)]
struct PrayerRequestBody {
    #[serde(default)]
    requester: Option<String>,
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PrayerRequest {
    pub id: String,
    pub requester: Option<String>,
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PrayerRequest {
    /// Reads a prayer request out of a stored document.
    pub fn from_document(document: Document) -> Result<Self, serde_json::Error> {
        let body: PrayerRequestBody = document.parse()?;

        Ok(Self {
            id: document.id,
            requester: body.requester,
            title: body.title,
            description: body.description,
            created_at: document.created_at,
            updated_at: document.updated_at,
        })
    }

    pub fn into_dto(self) -> PrayerRequestDto {
        PrayerRequestDto {
            id: self.id,
            requester: self.requester,
            title: self.title,
            description: self.description,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreatePrayerRequestParams {
    pub requester: Option<String>,
    pub title: String,
    pub description: String,
}

impl CreatePrayerRequestParams {
    /// Validates a creation request.
    ///
    /// # Returns
    /// - `Ok(CreatePrayerRequestParams)`: Valid request
    /// - `Err(AppError::BadRequest)`: Blank title or description
    pub fn from_dto(dto: CreatePrayerRequestDto) -> Result<Self, AppError> {
        require_non_blank("title", &dto.title)?;
        require_non_blank("description", &dto.description)?;

        Ok(Self {
            requester: dto.requester.filter(|requester| !requester.trim().is_empty()),
            title: dto.title,
            description: dto.description,
        })
    }

    /// Builds the stored document body.
    pub fn into_data(self) -> Value {
        let mut data = Map::new();
        if let Some(requester) = self.requester {
            data.insert("requester".to_string(), Value::String(requester));
        }
        data.insert("title".to_string(), Value::String(self.title));
        data.insert("description".to_string(), Value::String(self.description));
        Value::Object(data)
    }
}

/// Validated partial update in the shape merged into the stored body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdatePrayerRequestParams {
    pub patch: Map<String, Value>,
}

impl UpdatePrayerRequestParams {
    pub fn from_dto(dto: UpdatePrayerRequestDto) -> Result<Self, AppError> {
        let mut patch = Map::new();

        if let Some(requester) = dto.requester {
            patch.insert("requester".to_string(), Value::String(requester));
        }
        if let Some(title) = dto.title {
            require_non_blank("title", &title)?;
            patch.insert("title".to_string(), Value::String(title));
        }
        if let Some(description) = dto.description {
            require_non_blank("description", &description)?;
            patch.insert("description".to_string(), Value::String(description));
        }

        Ok(Self { patch })
    }
}
