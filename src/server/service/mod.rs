//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Fetch-modify-persist cycles over stored documents
//! - **Embedded Arrays**: Running the ordered-collection editor for topic elements and
//!   mission cities before persisting the whole array
//! - **Error Context**: Wrapping store failures with a description of the operation
//! - **Domain Models**: Reading typed resources out of documents
//!
//! Array edits are read-then-write without locking. Two concurrent edits of the same
//! parent both read the old array and the later write wins.

pub mod country;
pub mod mission;
pub mod prayer_request;
pub mod store;
pub mod topic;

#[cfg(test)]
mod test;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::server::error::AppError;

/// Builds a patch that sets a single top-level field.
fn field_patch<T: Serialize>(field: &str, value: &T) -> Result<Map<String, Value>, AppError> {
    let mut patch = Map::new();
    patch.insert(field.to_string(), to_json(value)?);
    Ok(patch)
}

/// Serializes a value that is about to be written into a document body.
fn to_json<T: Serialize>(value: &T) -> Result<Value, AppError> {
    serde_json::to_value(value)
        .map_err(|e| AppError::InternalError(format!("Failed to serialize document: {}", e)))
}

/// Error for a stored document whose body does not have the expected shape.
fn malformed(kind: &str, id: &str, err: serde_json::Error) -> AppError {
    AppError::InternalError(format!("Malformed {} document {}: {}", kind, id, err))
}
