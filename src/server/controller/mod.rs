//! HTTP request handlers.
//!
//! Each submodule handles one resource. Handlers extract request data, convert DTOs into
//! validated parameter types, call the matching service and wrap the result in the
//! response envelope. Every handler carries a `utoipa::path` annotation collected by the
//! OpenAPI document in `router.rs`.

pub mod config;
pub mod country;
pub mod mission;
pub mod prayer_request;
pub mod store;
pub mod topic;

use serde::Deserialize;

use crate::server::{error::AppError, model::PageParams};

/// Cursor pagination query shared by every list endpoint.
#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PageQuery {
    pub limit: Option<u64>,
    pub start_after: Option<String>,
}

impl PageQuery {
    pub fn into_params(self) -> Result<PageParams, AppError> {
        PageParams::from_query(self.limit, self.start_after)
    }
}

#[cfg(test)]
mod test;
