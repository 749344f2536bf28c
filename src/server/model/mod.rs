//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! stored documents and operation parameters. Documents are converted from entity models
//! at the repository boundary, resource models are read out of documents by the services,
//! and everything is transformed to DTOs at the controller boundary. Request validation
//! happens in the `from_dto` constructors, so a parameter value that exists is valid.

pub mod country;
pub mod document;
pub mod mission;
pub mod prayer_request;
pub mod topic;

use crate::server::error::AppError;

/// Page size used when a list request does not name one.
pub const DEFAULT_LIMIT: u64 = 20;

/// Largest page size a list request may ask for.
pub const MAX_LIMIT: u64 = 100;

/// Cursor pagination over a collection ordered by document id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageParams {
    /// Maximum number of documents returned.
    pub limit: u64,
    /// Id of the last document of the previous page.
    pub start_after: Option<String>,
}

impl Default for PageParams {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            start_after: None,
        }
    }
}

impl PageParams {
    /// Validates pagination query values.
    ///
    /// # Returns
    /// - `Ok(PageParams)`: `limit` defaulted to 20 when absent
    /// - `Err(AppError::BadRequest)`: `limit` outside `1..=100`
    pub fn from_query(limit: Option<u64>, start_after: Option<String>) -> Result<Self, AppError> {
        let limit = limit.unwrap_or(DEFAULT_LIMIT);
        if !(1..=MAX_LIMIT).contains(&limit) {
            return Err(AppError::BadRequest(format!(
                "limit must be between 1 and {}",
                MAX_LIMIT
            )));
        }

        Ok(Self {
            limit,
            start_after: start_after.filter(|cursor| !cursor.is_empty()),
        })
    }
}

/// A requested order of child keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReorderParams {
    pub keys: Vec<String>,
}

impl ReorderParams {
    /// Validates a reorder request.
    ///
    /// Completeness against the stored array is checked later by the editor.
    ///
    /// # Returns
    /// - `Ok(ReorderParams)`: A non-empty list of non-blank keys
    /// - `Err(AppError::BadRequest)`: Empty list or a blank key
    pub fn from_keys(field: &str, keys: Vec<String>) -> Result<Self, AppError> {
        if keys.is_empty() {
            return Err(AppError::BadRequest(format!("{} should not be empty", field)));
        }
        if keys.iter().any(|key| key.trim().is_empty()) {
            return Err(AppError::BadRequest(format!(
                "each value in {} must be a non-empty string",
                field
            )));
        }

        Ok(Self { keys })
    }
}

/// Fails with `BadRequest` when `value` is empty or only whitespace.
pub fn require_non_blank(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::BadRequest(format!("{} should not be empty", field)));
    }
    Ok(())
}

/// Fails with `BadRequest` when the character count of `value` is outside `min..=max`.
pub fn require_length(field: &str, value: &str, min: usize, max: usize) -> Result<(), AppError> {
    let length = value.chars().count();
    if length < min || length > max {
        return Err(AppError::BadRequest(format!(
            "{} must be between {} and {} characters",
            field, min, max
        )));
    }
    Ok(())
}

/// Fails with `BadRequest` unless `value` is an absolute http(s) URL.
pub fn require_url(field: &str, value: &str) -> Result<(), AppError> {
    match url::Url::parse(value) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") && parsed.has_host() => Ok(()),
        _ => Err(AppError::BadRequest(format!("{} must be a URL address", field))),
    }
}
