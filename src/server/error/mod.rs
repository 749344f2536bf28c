//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints. Every error body has
//! the shape `{"statusCode": .., "message": ..}`.

pub mod collection;
pub mod config;

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::DbErr;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{collection::CollectionError, config::ConfigError},
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Most variants use `#[from]` for automatic
/// error conversion. `CollectionError` handles its own response mapping, while generic
/// variants provide standard HTTP status codes.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Always results in 500 Internal Server Error as configuration issues
    /// prevent normal application operation.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Failed edit of an embedded child array.
    ///
    /// Delegates to `CollectionError::into_response()` (404 or 400).
    #[error(transparent)]
    CollectionErr(#[from] CollectionError),

    /// Database operation error from SeaORM without further context.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] DbErr),

    /// Document store failure wrapped with a description of the attempted operation.
    ///
    /// Results in 500 Internal Server Error. The context is returned to the client,
    /// the underlying store error is only logged.
    #[error("{context}: {source}")]
    StoreErr {
        /// What the service was doing, e.g. "Failed to fetch topic"
        context: String,
        /// The underlying store error
        #[source]
        source: DbErr,
    },

    /// I/O error while binding or serving the listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error, including request bodies that fail validation.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),

    /// Internal server error with custom message.
    ///
    /// Results in 500 Internal Server Error. The provided message is logged
    /// but a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

/// Converts malformed JSON bodies into 400 responses using the common error envelope.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Converts malformed query strings into 400 responses using the common error envelope.
impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Adds a description to document store failures as they cross into the service layer.
pub trait StoreContext<T> {
    /// Wraps a `DbErr` into `AppError::StoreErr` with the given context message.
    fn context(self, context: impl Into<String>) -> Result<T, AppError>;
}

impl<T> StoreContext<T> for Result<T, DbErr> {
    fn context(self, context: impl Into<String>) -> Result<T, AppError> {
        self.map_err(|source| AppError::StoreErr {
            context: context.into(),
            source,
        })
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest` variant
/// - 404 Not Found - For `NotFound` variant
/// - 500 Internal Server Error - For store, config, I/O and internal errors
/// - Variable - For `CollectionErr`, delegated to `CollectionError::into_response()`
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::CollectionErr(err) => err.into_response(),
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto::new(StatusCode::NOT_FOUND, msg)))
                    .into_response()
            }
            Self::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto::new(StatusCode::BAD_REQUEST, msg)),
            )
                .into_response(),
            Self::StoreErr { context, source } => {
                tracing::error!("{}: {}", context, source);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto::new(StatusCode::INTERNAL_SERVER_ERROR, context)),
                )
                    .into_response()
            }
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                InternalServerError("Internal server error").into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error",
            )),
        )
            .into_response()
    }
}
