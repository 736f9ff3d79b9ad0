//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{authors, books, borrows, categories, health, members, reservations, root};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Library API",
        version = "1.0.0",
        description = "In-memory library bookkeeping REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    paths(
        // Service
        root::index,
        health::health_check,
        // Books
        books::list_books,
        books::get_book,
        books::create_book,
        books::update_book,
        books::delete_book,
        // Members
        members::list_members,
        members::get_member,
        members::create_member,
        members::update_member,
        members::member_borrows,
        members::member_reservations,
        // Borrows
        borrows::create_borrow,
        borrows::return_book,
        borrows::list_borrows,
        // Reservations
        reservations::create_reservation,
        reservations::list_reservations,
        reservations::update_reservation,
        reservations::cancel_reservation,
        // Authors & categories
        authors::list_authors,
        authors::get_author,
        authors::author_books,
        categories::list_categories,
        categories::get_category,
        categories::category_books,
    ),
    components(
        schemas(
            // Books
            crate::models::book::Book,
            crate::models::book::BookDetails,
            crate::models::book::CreateBook,
            crate::models::book::UpdateBook,
            crate::models::author::Author,
            crate::models::category::Category,
            // Members
            crate::models::member::Member,
            crate::models::member::CreateMember,
            crate::models::member::UpdateMember,
            // Borrows
            crate::models::borrow::Borrow,
            crate::models::borrow::BorrowDetails,
            crate::models::borrow::BorrowRequest,
            // Reservations
            crate::models::reservation::Reservation,
            crate::models::reservation::ReservationDetails,
            crate::models::reservation::CreateReservation,
            crate::models::reservation::UpdateReservation,
            // Service
            root::IndexResponse,
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Service information and health"),
        (name = "books", description = "Book catalog"),
        (name = "members", description = "Member management"),
        (name = "borrows", description = "Borrowing and returning"),
        (name = "reservations", description = "Book reservations"),
        (name = "catalog", description = "Authors and categories")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
