//! Service index

use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

/// Routes advertised by the index endpoint
pub const ENDPOINTS: &[&str] = &[
    "GET /books",
    "GET /books/:id",
    "POST /books",
    "PATCH /books/:id",
    "DELETE /books/:id",
    "POST /members",
    "GET /members",
    "GET /members/:id",
    "PATCH /members/:id",
    "GET /members/:id/borrows",
    "GET /members/:id/reservations",
    "POST /borrows",
    "POST /returns",
    "GET /borrows",
    "POST /reservations",
    "GET /reservations",
    "PATCH /reservations/:id",
    "DELETE /reservations/:id",
    "GET /authors",
    "GET /authors/:id",
    "GET /authors/:id/books",
    "GET /categories",
    "GET /categories/:id",
    "GET /categories/:id/books",
];

#[derive(Serialize, ToSchema)]
pub struct IndexResponse {
    pub message: String,
    pub name: String,
    pub version: String,
    pub endpoints: Vec<String>,
}

/// Service information and the list of available endpoints
#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    responses(
        (status = 200, description = "Service information", body = IndexResponse)
    )
)]
pub async fn index() -> Json<IndexResponse> {
    Json(IndexResponse {
        message: "Library API running".to_string(),
        name: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoints: ENDPOINTS.iter().map(|e| e.to_string()).collect(),
    })
}
