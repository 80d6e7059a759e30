use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Content classification for a scraped page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PageType {
    Article,
    Video,
    Image,
    #[default]
    Other,
}

impl PageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PageType::Article => "article",
            PageType::Video => "video",
            PageType::Image => "image",
            PageType::Other => "other",
        }
    }
}

/// Metadata scraped from a page, used to pre-fill the item creation form.
///
/// Constructed fresh per extraction call and owned by the caller. `title`
/// and `description` fall back to the empty string; the remaining fields
/// are `None` when the markup carries no signal for them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    pub author: Option<String>,
    /// Raw timestamp text as found in the markup, not parsed or validated
    pub published_at: Option<String>,
    pub site_name: Option<String>,
    #[serde(rename = "type")]
    pub kind: PageType,
}
