//! Member endpoints

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    error::AppResult,
    models::{
        borrow::{BorrowDetails, MemberBorrowQuery},
        member::{CreateMember, Member, MemberFilter, MemberQuery, UpdateMember},
        reservation::{MemberReservationQuery, ReservationDetails},
    },
};

use super::{IdPath, JsonBody, QueryParams};

/// List members with filters
#[utoipa::path(
    get,
    path = "/members",
    tag = "members",
    params(MemberQuery),
    responses(
        (status = 200, description = "Matching members", body = Vec<Member>)
    )
)]
pub async fn list_members(
    State(state): State<crate::AppState>,
    QueryParams(query): QueryParams<MemberQuery>,
) -> AppResult<Json<Vec<Member>>> {
    let members = state.services.members.search_members(&MemberFilter::from(query)).await?;
    Ok(Json(members))
}

/// Get member by ID
#[utoipa::path(
    get,
    path = "/members/{id}",
    tag = "members",
    params(
        ("id" = i32, Path, description = "Member ID")
    ),
    responses(
        (status = 200, description = "Member", body = Member),
        (status = 404, description = "Member not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_member(
    State(state): State<crate::AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<Member>> {
    let member = state.services.members.get_member(id).await?;
    Ok(Json(member))
}

/// Register a new member
#[utoipa::path(
    post,
    path = "/members",
    tag = "members",
    request_body = CreateMember,
    responses(
        (status = 201, description = "Member registered", body = Member),
        (status = 400, description = "Missing name or email", body = crate::error::ErrorResponse),
        (status = 409, description = "Email already in use", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_member(
    State(state): State<crate::AppState>,
    JsonBody(data): JsonBody<CreateMember>,
) -> AppResult<(StatusCode, Json<Member>)> {
    let created = state.services.members.create_member(data).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update some fields of a member
#[utoipa::path(
    patch,
    path = "/members/{id}",
    tag = "members",
    params(
        ("id" = i32, Path, description = "Member ID")
    ),
    request_body = UpdateMember,
    responses(
        (status = 200, description = "Member updated", body = Member),
        (status = 404, description = "Member not found", body = crate::error::ErrorResponse),
        (status = 409, description = "Email used by another member", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_member(
    State(state): State<crate::AppState>,
    IdPath(id): IdPath,
    JsonBody(data): JsonBody<UpdateMember>,
) -> AppResult<Json<Member>> {
    let member = state.services.members.update_member(id, data).await?;
    Ok(Json(member))
}

/// Borrows of a member
#[utoipa::path(
    get,
    path = "/members/{id}/borrows",
    tag = "members",
    params(
        ("id" = i32, Path, description = "Member ID"),
        MemberBorrowQuery
    ),
    responses(
        (status = 200, description = "Member's borrows with book and member", body = Vec<BorrowDetails>),
        (status = 404, description = "Member not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn member_borrows(
    State(state): State<crate::AppState>,
    IdPath(id): IdPath,
    QueryParams(query): QueryParams<MemberBorrowQuery>,
) -> AppResult<Json<Vec<BorrowDetails>>> {
    let filter = query.into_filter(id)?;
    let borrows = state.services.loans.member_borrows(id, &filter).await?;
    Ok(Json(borrows))
}

/// Reservations of a member
#[utoipa::path(
    get,
    path = "/members/{id}/reservations",
    tag = "members",
    params(
        ("id" = i32, Path, description = "Member ID"),
        MemberReservationQuery
    ),
    responses(
        (status = 200, description = "Member's reservations with book and member", body = Vec<ReservationDetails>),
        (status = 404, description = "Member not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn member_reservations(
    State(state): State<crate::AppState>,
    IdPath(id): IdPath,
    QueryParams(query): QueryParams<MemberReservationQuery>,
) -> AppResult<Json<Vec<ReservationDetails>>> {
    let filter = query.into_filter(id)?;
    let reservations = state.services.reservations.member_reservations(id, &filter).await?;
    Ok(Json(reservations))
}
