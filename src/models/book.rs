//! Book model and related types

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use super::{
    author::Author,
    category::Category,
    params::{lenient_ids, lenient_int, non_empty, non_zero, parse_flag},
};
use crate::error::{AppError, AppResult};

/// Book record as held by the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    #[serde(rename = "book_id")]
    pub id: i32,
    pub title: String,
    /// Unique across all books
    pub isbn: String,
    pub publication_year: i32,
    pub category_ids: Vec<i32>,
    pub author_ids: Vec<i32>,
    pub total_copies: u32,
}

/// Book with its authors, categories and live availability
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BookDetails {
    #[serde(flatten)]
    pub book: Book,
    pub categories: Vec<Category>,
    pub authors: Vec<Author>,
    /// Total copies minus active borrows
    pub available_copies: i64,
}

/// Create book request
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreateBook {
    pub title: Option<String>,
    pub isbn: Option<String>,
    #[serde(default, deserialize_with = "lenient_int")]
    pub publication_year: Option<i32>,
    #[serde(default, deserialize_with = "lenient_ids")]
    pub category_ids: Option<Vec<i32>>,
    #[serde(default, deserialize_with = "lenient_ids")]
    pub author_ids: Option<Vec<i32>>,
    /// Defaults to 1
    #[serde(default, deserialize_with = "lenient_int")]
    pub total_copies: Option<u32>,
}

/// Fully validated book data, ready to be stored
#[derive(Debug, Clone)]
pub struct NewBook {
    pub title: String,
    pub isbn: String,
    pub publication_year: i32,
    pub category_ids: Vec<i32>,
    pub author_ids: Vec<i32>,
    pub total_copies: u32,
}

impl TryFrom<CreateBook> for NewBook {
    type Error = AppError;

    fn try_from(data: CreateBook) -> AppResult<Self> {
        let missing = || AppError::BadRequest("title, isbn and publication_year are required".to_string());

        Ok(Self {
            title: non_empty(data.title).ok_or_else(missing)?,
            isbn: non_empty(data.isbn).ok_or_else(missing)?,
            publication_year: non_zero(data.publication_year).ok_or_else(missing)?,
            category_ids: data.category_ids.unwrap_or_default(),
            author_ids: data.author_ids.unwrap_or_default(),
            total_copies: data.total_copies.unwrap_or(1),
        })
    }
}

/// Partial book update
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateBook {
    pub title: Option<String>,
    pub isbn: Option<String>,
    #[serde(default, deserialize_with = "lenient_int")]
    pub publication_year: Option<i32>,
    #[serde(default, deserialize_with = "lenient_ids")]
    pub category_ids: Option<Vec<i32>>,
    #[serde(default, deserialize_with = "lenient_ids")]
    pub author_ids: Option<Vec<i32>>,
    #[serde(default, deserialize_with = "lenient_int")]
    pub total_copies: Option<u32>,
}

/// Book search query parameters
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct BookQuery {
    /// Case-insensitive substring of the title
    pub title: Option<String>,
    /// Case-insensitive substring of any author's name
    pub author: Option<String>,
    /// Exact ISBN
    pub isbn: Option<String>,
    /// Case-insensitive substring of any category's name
    pub category: Option<String>,
    /// Exact publication year
    pub year: Option<String>,
    /// `true` for books with copies left, `false` for the others
    pub available: Option<String>,
}

/// Parsed book filters. Every present field narrows the result.
#[derive(Debug, Default, Clone)]
pub struct BookFilter {
    pub title: Option<String>,
    pub author: Option<String>,
    pub isbn: Option<String>,
    pub category: Option<String>,
    pub year: Option<i32>,
    pub available: Option<bool>,
}

impl TryFrom<BookQuery> for BookFilter {
    type Error = AppError;

    fn try_from(query: BookQuery) -> AppResult<Self> {
        let year = non_empty(query.year)
            .map(|y| {
                y.trim()
                    .parse::<i32>()
                    .map_err(|_| AppError::BadRequest(format!("year must be a number, got '{}'", y)))
            })
            .transpose()?;

        Ok(Self {
            title: non_empty(query.title),
            author: non_empty(query.author),
            isbn: non_empty(query.isbn),
            category: non_empty(query.category),
            year,
            available: parse_flag(query.available.as_deref()),
        })
    }
}
