//! Test fixtures providing reusable document payloads without database insertion.
//!
//! Fixtures build the JSON bodies that the store keeps in the `data` column. Factories use
//! them as defaults; unit tests can use them directly to exercise conversions without a
//! database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let data = fixture::document::country_data("cl", "Chile");
//! assert_eq!(data["capital"], "Santiago");
//! ```

pub mod document;

pub use document::{COUNTRIES, MISSIONS, PRAYER_REQUESTS, TOPICS};
