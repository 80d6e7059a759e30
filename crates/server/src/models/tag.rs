use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Tag applied to items
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub id: i64,
    pub name: String,
}
