//! Borrow and return endpoints

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    error::AppResult,
    models::borrow::{Borrow, BorrowDetails, BorrowFilter, BorrowQuery, BorrowRequest},
};

use super::{JsonBody, QueryParams};

/// Borrow a copy of a book
#[utoipa::path(
    post,
    path = "/borrows",
    tag = "borrows",
    request_body = BorrowRequest,
    responses(
        (status = 201, description = "Borrow created", body = Borrow),
        (status = 400, description = "Missing ids or member not active", body = crate::error::ErrorResponse),
        (status = 404, description = "Book or member not found", body = crate::error::ErrorResponse),
        (status = 409, description = "No copies left", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_borrow(
    State(state): State<crate::AppState>,
    JsonBody(request): JsonBody<BorrowRequest>,
) -> AppResult<(StatusCode, Json<Borrow>)> {
    let borrow = state.services.loans.borrow(&request).await?;
    Ok((StatusCode::CREATED, Json(borrow)))
}

/// Return a borrowed book
#[utoipa::path(
    post,
    path = "/returns",
    tag = "borrows",
    request_body = BorrowRequest,
    responses(
        (status = 200, description = "Book returned", body = Borrow),
        (status = 400, description = "Missing ids", body = crate::error::ErrorResponse),
        (status = 404, description = "No active borrow for this book and member", body = crate::error::ErrorResponse)
    )
)]
pub async fn return_book(
    State(state): State<crate::AppState>,
    JsonBody(request): JsonBody<BorrowRequest>,
) -> AppResult<Json<Borrow>> {
    let borrow = state.services.loans.return_book(&request).await?;
    Ok(Json(borrow))
}

/// List borrows with filters
#[utoipa::path(
    get,
    path = "/borrows",
    tag = "borrows",
    params(BorrowQuery),
    responses(
        (status = 200, description = "Matching borrows with book and member", body = Vec<BorrowDetails>),
        (status = 400, description = "Non-numeric id", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_borrows(
    State(state): State<crate::AppState>,
    QueryParams(query): QueryParams<BorrowQuery>,
) -> AppResult<Json<Vec<BorrowDetails>>> {
    let filter = BorrowFilter::try_from(query)?;
    let borrows = state.services.loans.search_borrows(&filter).await?;
    Ok(Json(borrows))
}
