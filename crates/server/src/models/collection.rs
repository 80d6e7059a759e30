use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::ItemWithTags;

/// Named group of curated items
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    pub id: i64,
    #[serde(with = "plain::timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "plain::timestamp")]
    pub updated_at: DateTime<Utc>,
    pub name: String,
    pub description: Option<String>,
}

/// Request body for creating a collection
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCollection {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Collection with its items, each carrying its tags
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CollectionWithItems {
    #[serde(flatten)]
    pub collection: Collection,
    pub items: Vec<ItemWithTags>,
}
