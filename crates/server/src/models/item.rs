use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use utoipa::ToSchema;

use super::Tag;

/// Content classification stored on an item.
/// Lowercase aliases are accepted on input; the wire form is uppercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum ItemType {
    #[serde(alias = "article")]
    Article,
    #[serde(alias = "video")]
    Video,
    #[serde(alias = "image")]
    Image,
    #[default]
    #[serde(alias = "other")]
    Other,
}

impl ItemType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::Article => "ARTICLE",
            ItemType::Video => "VIDEO",
            ItemType::Image => "IMAGE",
            ItemType::Other => "OTHER",
        }
    }
}

impl FromStr for ItemType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_uppercase().as_str() {
            "ARTICLE" => ItemType::Article,
            "VIDEO" => ItemType::Video,
            "IMAGE" => ItemType::Image,
            _ => ItemType::Other,
        })
    }
}

/// Scraped metadata stored alongside an item
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ItemMetadata {
    pub author: Option<String>,
    pub published_at: Option<String>,
    pub site_name: Option<String>,
    pub image: Option<String>,
}

/// Saved link in a collection
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: i64,
    #[serde(with = "plain::timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "plain::timestamp")]
    pub updated_at: DateTime<Utc>,
    pub collection_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub url: String,
    #[serde(rename = "type")]
    pub kind: ItemType,
    pub metadata: Option<ItemMetadata>,
}

/// Request body for creating an item
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateItem {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub url: String,
    #[serde(rename = "type", default)]
    pub kind: ItemType,
    /// Tag names to connect or create
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub metadata: Option<ItemMetadata>,
}

/// Item with its tags
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ItemWithTags {
    #[serde(flatten)]
    pub item: Item,
    pub tags: Vec<Tag>,
}
