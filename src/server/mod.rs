//! Server-side API backend and business logic.
//!
//! This module contains the complete backend implementation for the application,
//! including API endpoints, business logic and data access over the document store.
//! The backend uses Axum as the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, validation and DTO conversion
//! - **Service Layer** (`service/`) - Resource operations, including ordered child array edits
//! - **Data Layer** (`data/`) - Document store primitives and entity-to-document conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (database pool, configuration)
//! - **Startup** (`startup`) - Database connection and migrations
//! - **Router** (`router`) - Axum route configuration and API documentation
//! - **Util** (`util/`) - Identifier generation and the ordered collection editor
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Controller** converts DTOs to validated params, calls service
//! 3. **Service** reads the parent document, computes the change, writes it back
//! 4. **Data** queries the `document` table, converts rows to documents
//! 5. **Controller** converts the domain model to a DTO and wraps it in the response envelope

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
