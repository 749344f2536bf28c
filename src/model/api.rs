use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of every error response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDto {
    pub status_code: u16,
    pub message: String,
}

impl ErrorDto {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status_code: status.as_u16(),
            message: message.into(),
        }
    }
}

/// Envelope for single-resource responses: `{message, data}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub message: String,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            data,
        }
    }
}

/// Envelope for collection responses: `{message, data, count}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiListResponse<T> {
    pub message: String,
    pub data: Vec<T>,
    pub count: usize,
}

impl<T> ApiListResponse<T> {
    pub fn new(message: impl Into<String>, data: Vec<T>) -> Self {
        Self {
            message: message.into(),
            count: data.len(),
            data,
        }
    }
}

/// Result of deleting a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DeletedDto {
    pub id: String,
    pub deleted: bool,
}
