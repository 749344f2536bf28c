//! Factory methods for inserting test documents.
//!
//! This module provides factory methods for creating documents with sensible defaults,
//! reducing boilerplate in tests. Each resource has a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let topic = factory::create_topic(&db).await?;
//!
//!     // Customize the embedded array
//!     let mission = factory::mission::MissionFactory::new(&db)
//!         .country("Peru")
//!         .city("Lima")
//!         .city("Cusco")
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `topic` - Topic documents with an `elements` array
//! - `mission` - Mission documents with a `cities` array
//! - `country` - Flat country documents
//! - `prayer_request` - Flat prayer request documents
//! - `helpers` - Id counter and raw document insertion

pub mod country;
pub mod helpers;
pub mod mission;
pub mod prayer_request;
pub mod topic;

// Re-export commonly used factory functions for concise usage
pub use country::create_country;
pub use mission::create_mission;
pub use prayer_request::create_prayer_request;
pub use topic::create_topic;
