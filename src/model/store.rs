use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StoreHealthDto {
    pub success: bool,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Raw documents of one collection, as stored.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StoreCollectionDto {
    pub message: String,
    pub collection: String,
    pub count: usize,
    #[schema(value_type = Vec<Object>)]
    pub data: Vec<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigInfoDto {
    pub environment: String,
    pub port: u16,
    pub is_production: bool,
}
