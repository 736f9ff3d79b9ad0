//! Category endpoints

use axum::{extract::State, Json};

use crate::{
    error::AppResult,
    models::{Book, Category},
};

use super::IdPath;

/// List all categories
#[utoipa::path(
    get,
    path = "/categories",
    tag = "catalog",
    responses(
        (status = 200, description = "All categories", body = Vec<Category>)
    )
)]
pub async fn list_categories(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Category>>> {
    Ok(Json(state.services.catalog.list_categories().await?))
}

/// Get category by ID
#[utoipa::path(
    get,
    path = "/categories/{id}",
    tag = "catalog",
    params(
        ("id" = i32, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Category", body = Category),
        (status = 404, description = "Category not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_category(
    State(state): State<crate::AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<Category>> {
    Ok(Json(state.services.catalog.get_category(id).await?))
}

/// Books filed under a category
#[utoipa::path(
    get,
    path = "/categories/{id}/books",
    tag = "catalog",
    params(
        ("id" = i32, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Books in the category", body = Vec<Book>),
        (status = 404, description = "Category not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn category_books(
    State(state): State<crate::AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<Vec<Book>>> {
    Ok(Json(state.services.catalog.category_books(id).await?))
}
