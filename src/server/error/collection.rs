use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::util::ordered::Keyed};

/// Failures of an edit against an embedded ordered array (topic elements, mission cities).
#[derive(Error, Debug, PartialEq)]
pub enum CollectionError {
    /// No child record has the requested key.
    ///
    /// Results in a 404 Not Found response.
    #[error("{kind} with ID {key} not found")]
    NotFound { kind: &'static str, key: String },

    /// A reorder request did not list every existing key exactly once.
    ///
    /// Results in a 400 Bad Request response.
    #[error("Must provide all {kind} IDs. Expected {expected}, got {got}")]
    LengthMismatch {
        kind: &'static str,
        expected: usize,
        got: usize,
    },

    /// A key appears twice where keys must be unique.
    ///
    /// Results in a 400 Bad Request response.
    #[error("{kind} ID {key} appears more than once")]
    DuplicateKey { kind: &'static str, key: String },
}

impl CollectionError {
    pub fn not_found<T: Keyed>(key: &str) -> Self {
        Self::NotFound {
            kind: T::KIND,
            key: key.to_string(),
        }
    }

    pub fn duplicate<T: Keyed>(key: &str) -> Self {
        Self::DuplicateKey {
            kind: T::KIND,
            key: key.to_string(),
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::LengthMismatch { .. } | Self::DuplicateKey { .. } => StatusCode::BAD_REQUEST,
        }
    }
}

/// Converts collection edit errors into HTTP responses.
///
/// - `NotFound` → 404 Not Found
/// - `LengthMismatch` / `DuplicateKey` → 400 Bad Request
///
/// The message is returned verbatim since it only names keys the client sent.
impl IntoResponse for CollectionError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::warn!("Rejected collection edit: {}", self);

        (status, Json(ErrorDto::new(status, self.to_string()))).into_response()
    }
}
