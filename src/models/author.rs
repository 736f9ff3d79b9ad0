//! Author model

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Author record. Authors are immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Author {
    #[serde(rename = "author_id")]
    pub id: i32,
    pub name: String,
}
