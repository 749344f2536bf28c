//! Inter Backend Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the
//! inter-backend application. This crate offers a builder pattern for creating test contexts
//! with in-memory SQLite databases plus factories that seed raw documents into the store.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **factory**: Inserts topic, mission, country and prayer request documents
//! - **fixture**: In-memory document payloads without database insertion
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_topic_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_document_table().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let topic = factory::topic::create_topic(db).await?;
//!     // Perform operations against the topic document...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
