//! Author endpoints

use axum::{extract::State, Json};

use crate::{
    error::AppResult,
    models::{Author, Book},
};

use super::IdPath;

/// List all authors
#[utoipa::path(
    get,
    path = "/authors",
    tag = "catalog",
    responses(
        (status = 200, description = "All authors", body = Vec<Author>)
    )
)]
pub async fn list_authors(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Author>>> {
    Ok(Json(state.services.catalog.list_authors().await?))
}

/// Get author by ID
#[utoipa::path(
    get,
    path = "/authors/{id}",
    tag = "catalog",
    params(
        ("id" = i32, Path, description = "Author ID")
    ),
    responses(
        (status = 200, description = "Author", body = Author),
        (status = 404, description = "Author not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_author(
    State(state): State<crate::AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<Author>> {
    Ok(Json(state.services.catalog.get_author(id).await?))
}

/// Books written by an author
#[utoipa::path(
    get,
    path = "/authors/{id}/books",
    tag = "catalog",
    params(
        ("id" = i32, Path, description = "Author ID")
    ),
    responses(
        (status = 200, description = "Books by the author", body = Vec<Book>),
        (status = 404, description = "Author not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn author_books(
    State(state): State<crate::AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<Vec<Book>>> {
    Ok(Json(state.services.catalog.author_books(id).await?))
}
