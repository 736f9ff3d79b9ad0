//! Reservation model and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::{IntoParams, ToSchema};

use super::{
    book::Book,
    member::Member,
    params::{lenient_int, non_empty, parse_optional_id, require_book_and_member},
};
use crate::error::{AppError, AppResult};

/// Reservation status. Transitions are unrestricted; unknown values are kept
/// verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ReservationStatus {
    Active,
    Cancelled,
    Fulfilled,
    Other(String),
}

impl ReservationStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ReservationStatus::Active => "active",
            ReservationStatus::Cancelled => "cancelled",
            ReservationStatus::Fulfilled => "fulfilled",
            ReservationStatus::Other(s) => s,
        }
    }
}

impl From<String> for ReservationStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "active" => ReservationStatus::Active,
            "cancelled" => ReservationStatus::Cancelled,
            "fulfilled" => ReservationStatus::Fulfilled,
            _ => ReservationStatus::Other(s),
        }
    }
}

impl From<ReservationStatus> for String {
    fn from(status: ReservationStatus) -> Self {
        match status {
            ReservationStatus::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A member's reservation of a book
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Reservation {
    #[serde(rename = "reservation_id")]
    pub id: i32,
    pub book_id: i32,
    pub member_id: i32,
    pub reservation_date: NaiveDate,
    #[schema(value_type = String, example = "active")]
    pub status: ReservationStatus,
}

impl Reservation {
    pub fn is_active(&self) -> bool {
        self.status == ReservationStatus::Active
    }
}

/// Reservation with the referenced book and member attached
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ReservationDetails {
    #[serde(flatten)]
    pub reservation: Reservation,
    pub book: Option<Book>,
    pub member: Option<Member>,
}

/// Create reservation request
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreateReservation {
    #[serde(default, deserialize_with = "lenient_int")]
    pub book_id: Option<i32>,
    #[serde(default, deserialize_with = "lenient_int")]
    pub member_id: Option<i32>,
}

impl CreateReservation {
    pub fn require(&self) -> AppResult<(i32, i32)> {
        require_book_and_member(self.book_id, self.member_id)
    }
}

/// Reservation status change
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateReservation {
    /// New status; absent or empty leaves the reservation untouched
    pub status: Option<String>,
}

/// Reservation search query parameters
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct ReservationQuery {
    pub member_id: Option<String>,
    pub book_id: Option<String>,
    /// Exact status, e.g. `active` or `cancelled`
    pub status: Option<String>,
}

/// Query parameters for a member's reservations
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct MemberReservationQuery {
    pub book_id: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Default, Clone)]
pub struct ReservationFilter {
    pub member_id: Option<i32>,
    pub book_id: Option<i32>,
    pub status: Option<ReservationStatus>,
}

impl ReservationFilter {
    pub fn matches(&self, reservation: &Reservation) -> bool {
        self.member_id.map_or(true, |id| reservation.member_id == id)
            && self.book_id.map_or(true, |id| reservation.book_id == id)
            && self.status.as_ref().map_or(true, |status| &reservation.status == status)
    }
}

impl TryFrom<ReservationQuery> for ReservationFilter {
    type Error = AppError;

    fn try_from(query: ReservationQuery) -> AppResult<Self> {
        Ok(Self {
            member_id: parse_optional_id(query.member_id.as_deref(), "member_id")?,
            book_id: parse_optional_id(query.book_id.as_deref(), "book_id")?,
            status: non_empty(query.status).map(ReservationStatus::from),
        })
    }
}

impl MemberReservationQuery {
    /// Filter scoped to one member
    pub fn into_filter(self, member_id: i32) -> AppResult<ReservationFilter> {
        Ok(ReservationFilter {
            member_id: Some(member_id),
            book_id: parse_optional_id(self.book_id.as_deref(), "book_id")?,
            status: non_empty(self.status).map(ReservationStatus::from),
        })
    }
}
