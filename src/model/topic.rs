use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::key::{deserialize_keys, deserialize_optional_key};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TopicElementDto {
    pub id: String,
    pub text: String,
    pub pic: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TopicDto {
    pub id: String,
    pub theme: String,
    pub elements: Vec<TopicElementDto>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_elements: Option<usize>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Element supplied when creating a topic or appending to one.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateElementDto {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub pic: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateTopicDto {
    pub theme: String,
    pub elements: Vec<CreateElementDto>,
}

/// Element inside a whole-array topic update; a missing id gets a generated one.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateElementDto {
    #[serde(default, deserialize_with = "deserialize_optional_key")]
    pub id: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub pic: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateTopicDto {
    #[serde(default)]
    pub theme: Option<String>,
    #[serde(default)]
    pub elements: Option<Vec<UpdateElementDto>>,
}

/// Partial update of a single element; absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct ElementPatchDto {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub pic: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReorderElementsDto {
    #[serde(deserialize_with = "deserialize_keys")]
    pub element_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TopicElementsDto {
    pub topic_id: String,
    pub topic_theme: String,
    pub elements: Vec<TopicElementDto>,
}
