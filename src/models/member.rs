//! Member model and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::{IntoParams, ToSchema};

use super::params::{non_empty, parse_flag};
use crate::error::{AppError, AppResult};

/// Role given to members created through the API
pub const DEFAULT_ROLE: &str = "member";

/// Membership status. Only `active` members may borrow; any other value is
/// kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MemberStatus {
    Active,
    Inactive,
    Other(String),
}

impl MemberStatus {
    pub fn as_str(&self) -> &str {
        match self {
            MemberStatus::Active => "active",
            MemberStatus::Inactive => "inactive",
            MemberStatus::Other(s) => s,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, MemberStatus::Active)
    }
}

impl From<String> for MemberStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "active" => MemberStatus::Active,
            "inactive" => MemberStatus::Inactive,
            _ => MemberStatus::Other(s),
        }
    }
}

impl From<MemberStatus> for String {
    fn from(status: MemberStatus) -> Self {
        match status {
            MemberStatus::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for MemberStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Library member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Member {
    #[serde(rename = "member_id")]
    pub id: i32,
    pub name: String,
    /// Unique across all members
    pub email: String,
    pub membership_date: NaiveDate,
    #[schema(value_type = String, example = "active")]
    pub status: MemberStatus,
    pub role: String,
}

/// Create member request
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreateMember {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Validated member data
#[derive(Debug, Clone)]
pub struct NewMember {
    pub name: String,
    pub email: String,
}

impl TryFrom<CreateMember> for NewMember {
    type Error = AppError;

    fn try_from(data: CreateMember) -> AppResult<Self> {
        match (non_empty(data.name), non_empty(data.email)) {
            (Some(name), Some(email)) => Ok(Self { name, email }),
            _ => Err(AppError::BadRequest("name and email are required".to_string())),
        }
    }
}

/// Partial member update
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateMember {
    pub name: Option<String>,
    pub email: Option<String>,
    #[schema(value_type = Option<String>)]
    pub status: Option<MemberStatus>,
    pub role: Option<String>,
}

/// Member search query parameters
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct MemberQuery {
    /// Case-insensitive substring of the email
    pub email: Option<String>,
    /// Case-insensitive substring of the name
    pub name: Option<String>,
    /// `true` for active members, `false` for all others
    pub active: Option<String>,
}

#[derive(Debug, Default, Clone)]
pub struct MemberFilter {
    pub email: Option<String>,
    pub name: Option<String>,
    pub active: Option<bool>,
}

impl From<MemberQuery> for MemberFilter {
    fn from(query: MemberQuery) -> Self {
        Self {
            email: non_empty(query.email),
            name: non_empty(query.name),
            active: parse_flag(query.active.as_deref()),
        }
    }
}
