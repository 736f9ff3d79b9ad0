//! Category model

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Category record. Categories are immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Category {
    #[serde(rename = "category_id")]
    pub id: i32,
    pub name: String,
}
