//! Parsing of ids, flags and loosely typed numbers at the API boundary.
//!
//! Path and query values arrive as strings, and JSON bodies may carry ids
//! either as numbers or as numeric strings. Everything is converted here,
//! once, and non-numeric input is rejected with a bad request.

use serde::{de, Deserialize, Deserializer};

use crate::error::{AppError, AppResult};

/// Parse a numeric id, rejecting anything that is not an integer
pub fn parse_id(raw: &str, field: &str) -> AppResult<i32> {
    raw.trim()
        .parse::<i32>()
        .map_err(|_| AppError::BadRequest(format!("{} must be a numeric id, got '{}'", field, raw)))
}

/// Parse an optional query id; an empty value counts as absent
pub fn parse_optional_id(raw: Option<&str>, field: &str) -> AppResult<Option<i32>> {
    raw.filter(|s| !s.is_empty())
        .map(|s| parse_id(s, field))
        .transpose()
}

/// `true` / `false` query flag. Any other value disables the filter.
pub fn parse_flag(raw: Option<&str>) -> Option<bool> {
    match raw {
        Some("true") => Some(true),
        Some("false") => Some(false),
        _ => None,
    }
}

/// Drop empty query strings
pub fn non_empty(raw: Option<String>) -> Option<String> {
    raw.filter(|s| !s.is_empty())
}

/// Drop zero, which never names a record or a year
pub fn non_zero(raw: Option<i32>) -> Option<i32> {
    raw.filter(|n| *n != 0)
}

/// The `book_id` / `member_id` pair of a borrow, return or reservation request
pub fn require_book_and_member(book_id: Option<i32>, member_id: Option<i32>) -> AppResult<(i32, i32)> {
    match (non_zero(book_id), non_zero(member_id)) {
        (Some(book_id), Some(member_id)) => Ok((book_id, member_id)),
        _ => Err(AppError::BadRequest("book_id and member_id are required".to_string())),
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Lenient {
    Number(i64),
    Text(String),
}

impl Lenient {
    fn into_int<T, E>(self) -> Result<T, E>
    where
        T: TryFrom<i64>,
        E: de::Error,
    {
        let value = match self {
            Lenient::Number(n) => n,
            Lenient::Text(s) => s
                .trim()
                .parse::<i64>()
                .map_err(|_| E::custom(format!("expected a number, got \"{}\"", s)))?,
        };
        T::try_from(value).map_err(|_| E::custom(format!("number {} is out of range", value)))
    }
}

/// Deserialize an optional integer given as a JSON number or numeric string
pub fn lenient_int<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<i64>,
{
    Option::<Lenient>::deserialize(deserializer)?
        .map(Lenient::into_int)
        .transpose()
}

/// Deserialize an optional list of ids, each a JSON number or numeric string
pub fn lenient_ids<'de, D>(deserializer: D) -> Result<Option<Vec<i32>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Vec<Lenient>>::deserialize(deserializer)?
        .map(|ids| ids.into_iter().map(Lenient::into_int).collect())
        .transpose()
}
