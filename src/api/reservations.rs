//! Reservation endpoints

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    error::AppResult,
    models::reservation::{
        CreateReservation, Reservation, ReservationDetails, ReservationFilter, ReservationQuery,
        UpdateReservation,
    },
};

use super::{IdPath, JsonBody, QueryParams};

/// Reserve a book
#[utoipa::path(
    post,
    path = "/reservations",
    tag = "reservations",
    request_body = CreateReservation,
    responses(
        (status = 201, description = "Reservation created", body = Reservation),
        (status = 400, description = "Missing ids", body = crate::error::ErrorResponse),
        (status = 404, description = "Book or member not found", body = crate::error::ErrorResponse),
        (status = 409, description = "Active reservation already exists", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_reservation(
    State(state): State<crate::AppState>,
    JsonBody(request): JsonBody<CreateReservation>,
) -> AppResult<(StatusCode, Json<Reservation>)> {
    let reservation = state.services.reservations.reserve(&request).await?;
    Ok((StatusCode::CREATED, Json(reservation)))
}

/// List reservations with filters
#[utoipa::path(
    get,
    path = "/reservations",
    tag = "reservations",
    params(ReservationQuery),
    responses(
        (status = 200, description = "Matching reservations with book and member", body = Vec<ReservationDetails>),
        (status = 400, description = "Non-numeric id", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_reservations(
    State(state): State<crate::AppState>,
    QueryParams(query): QueryParams<ReservationQuery>,
) -> AppResult<Json<Vec<ReservationDetails>>> {
    let filter = ReservationFilter::try_from(query)?;
    let reservations = state.services.reservations.search_reservations(&filter).await?;
    Ok(Json(reservations))
}

/// Change the status of a reservation
#[utoipa::path(
    patch,
    path = "/reservations/{id}",
    tag = "reservations",
    params(
        ("id" = i32, Path, description = "Reservation ID")
    ),
    request_body = UpdateReservation,
    responses(
        (status = 200, description = "Reservation updated", body = Reservation),
        (status = 404, description = "Reservation not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_reservation(
    State(state): State<crate::AppState>,
    IdPath(id): IdPath,
    JsonBody(data): JsonBody<UpdateReservation>,
) -> AppResult<Json<Reservation>> {
    let reservation = state.services.reservations.update_status(id, data).await?;
    Ok(Json(reservation))
}

/// Cancel a reservation. The record is kept with status `cancelled`.
#[utoipa::path(
    delete,
    path = "/reservations/{id}",
    tag = "reservations",
    params(
        ("id" = i32, Path, description = "Reservation ID")
    ),
    responses(
        (status = 204, description = "Reservation cancelled"),
        (status = 404, description = "Reservation not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn cancel_reservation(
    State(state): State<crate::AppState>,
    IdPath(id): IdPath,
) -> AppResult<StatusCode> {
    state.services.reservations.cancel(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
