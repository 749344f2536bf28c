//! Request and response DTOs exchanged over the HTTP API.
//!
//! These types define the JSON wire format. Server-side domain models in
//! `server::model` convert to and from them at the controller boundary.

pub mod api;
pub mod country;
pub mod key;
pub mod mission;
pub mod prayer_request;
pub mod store;
pub mod topic;
