//! Borrow model and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use super::{
    book::Book,
    member::Member,
    params::{lenient_int, parse_flag, parse_optional_id, require_book_and_member},
};
use crate::error::{AppError, AppResult};

/// A single borrow of a book by a member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Borrow {
    #[serde(rename = "borrow_id")]
    pub id: i32,
    pub book_id: i32,
    pub member_id: i32,
    pub borrow_date: NaiveDate,
    /// `null` while the book is still out
    pub return_date: Option<NaiveDate>,
}

impl Borrow {
    /// A borrow is active until it is returned
    pub fn is_active(&self) -> bool {
        self.return_date.is_none()
    }
}

/// Borrow with the referenced book and member attached
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BorrowDetails {
    #[serde(flatten)]
    pub borrow: Borrow,
    pub book: Option<Book>,
    pub member: Option<Member>,
}

/// Borrow or return request
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct BorrowRequest {
    #[serde(default, deserialize_with = "lenient_int")]
    pub book_id: Option<i32>,
    #[serde(default, deserialize_with = "lenient_int")]
    pub member_id: Option<i32>,
}

impl BorrowRequest {
    /// Both ids, or a bad request naming the missing ones
    pub fn require(&self) -> AppResult<(i32, i32)> {
        require_book_and_member(self.book_id, self.member_id)
    }
}

/// Whether a borrow is still out or already returned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorrowState {
    Active,
    Returned,
}

impl BorrowState {
    /// Parse the `status` query value (`active` / `returned`); others are ignored
    pub fn from_status(raw: Option<&str>) -> Option<Self> {
        match raw {
            Some("active") => Some(BorrowState::Active),
            Some("returned") => Some(BorrowState::Returned),
            _ => None,
        }
    }

    /// Parse the `active` query flag (`true` / `false`)
    pub fn from_active_flag(raw: Option<&str>) -> Option<Self> {
        parse_flag(raw).map(|active| {
            if active {
                BorrowState::Active
            } else {
                BorrowState::Returned
            }
        })
    }

    pub fn matches(&self, borrow: &Borrow) -> bool {
        match self {
            BorrowState::Active => borrow.is_active(),
            BorrowState::Returned => !borrow.is_active(),
        }
    }
}

/// Borrow search query parameters
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct BorrowQuery {
    pub member_id: Option<String>,
    pub book_id: Option<String>,
    /// `active` or `returned`
    pub status: Option<String>,
}

/// Query parameters for a member's borrows
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct MemberBorrowQuery {
    /// `true` for borrows still out, `false` for returned ones
    pub active: Option<String>,
    pub book_id: Option<String>,
    /// `active` or `returned`
    pub status: Option<String>,
}

#[derive(Debug, Default, Clone)]
pub struct BorrowFilter {
    pub member_id: Option<i32>,
    pub book_id: Option<i32>,
    pub state: Option<BorrowState>,
}

impl BorrowFilter {
    pub fn matches(&self, borrow: &Borrow) -> bool {
        self.member_id.map_or(true, |id| borrow.member_id == id)
            && self.book_id.map_or(true, |id| borrow.book_id == id)
            && self.state.map_or(true, |state| state.matches(borrow))
    }
}

impl TryFrom<BorrowQuery> for BorrowFilter {
    type Error = AppError;

    fn try_from(query: BorrowQuery) -> AppResult<Self> {
        Ok(Self {
            member_id: parse_optional_id(query.member_id.as_deref(), "member_id")?,
            book_id: parse_optional_id(query.book_id.as_deref(), "book_id")?,
            state: BorrowState::from_status(query.status.as_deref()),
        })
    }
}

impl MemberBorrowQuery {
    /// Filter scoped to one member
    pub fn into_filter(self, member_id: i32) -> AppResult<BorrowFilter> {
        let state = BorrowState::from_active_flag(self.active.as_deref())
            .or_else(|| BorrowState::from_status(self.status.as_deref()));

        Ok(BorrowFilter {
            member_id: Some(member_id),
            book_id: parse_optional_id(self.book_id.as_deref(), "book_id")?,
            state,
        })
    }
}
