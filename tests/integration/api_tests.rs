//! API integration tests
//!
//! Every test drives its own router over a freshly seeded store.

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use library_server::{api::create_router, AppConfig, AppState};

fn app() -> Router {
    create_router(AppState::new(AppConfig::default()))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::POST, uri, Some(body)).await
}

async fn new_member(app: &Router, name: &str) -> i64 {
    let (status, body) = post(
        app,
        "/members",
        json!({ "name": name, "email": format!("{}@example.com", name.to_lowercase()) }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["member_id"].as_i64().unwrap()
}

#[tokio::test]
async fn test_index_lists_endpoints() {
    let app = app();
    let (status, body) = get(&app, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Library API running");
    assert!(body["endpoints"].as_array().unwrap().contains(&json!("POST /returns")));
}

#[tokio::test]
async fn test_health_check() {
    let app = app();
    let (status, body) = get(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_seeded_books_with_joins() {
    let app = app();
    let (status, body) = get(&app, "/books").await;

    assert_eq!(status, StatusCode::OK);
    let books = body.as_array().unwrap();
    assert_eq!(books.len(), 4);
    assert!(books.iter().any(|b| b["title"] == "1984"));

    let (status, book) = get(&app, "/books/2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(book["book_id"], 2);
    assert_eq!(book["authors"][0]["name"], "George Orwell");
    assert_eq!(book["available_copies"], 2);
}

#[tokio::test]
async fn test_book_filters() {
    let app = app();

    let (_, body) = get(&app, "/books?author=orwell").await;
    assert_eq!(body.as_array().unwrap().len(), 1);

    let (_, body) = get(&app, "/books?category=classic&year=1925").await;
    assert_eq!(body[0]["title"], "The Great Gatsby");

    let (status, body) = get(&app, "/books?year=soon").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BadValue");
}

#[tokio::test]
async fn test_create_book_and_duplicate_isbn() {
    let app = app();
    let book = json!({
        "title": "New Test Book",
        "isbn": "TEST-ISBN-123",
        "publication_year": 2020,
        "category_ids": [1],
        "author_ids": ["2"],
        "total_copies": 2
    });

    let (status, created) = post(&app, "/books", book.clone()).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["title"], "New Test Book");
    assert_eq!(created["author_ids"], json!([2]));

    let (status, body) = post(&app, "/books", book).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "Book with this ISBN already exists");

    let (status, _) = post(&app, "/books", json!({ "title": "Incomplete" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_book() {
    let app = app();

    let (status, body) = send(&app, Method::PATCH, "/books/1", Some(json!({ "total_copies": 5 }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_copies"], 5);
    assert_eq!(body["title"], "The Great Gatsby");

    let (status, _) = send(&app, Method::PATCH, "/books/1", Some(json!({ "isbn": "9780451524935" }))).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = send(&app, Method::PATCH, "/books/42", Some(json!({}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_duplicate_member_email() {
    let app = app();

    let (status, member) = post(&app, "/members", json!({ "name": "X", "email": "x@example.com" })).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(member["status"], "active");
    assert_eq!(member["role"], "member");

    let (status, _) = post(&app, "/members", json!({ "name": "Y", "email": "x@example.com" })).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, members) = get(&app, "/members?email=X@EXAMPLE").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(members.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_borrow_and_return_flow() {
    let app = app();
    let member_id = new_member(&app, "Reader").await;

    let (status, borrow) = post(&app, "/borrows", json!({ "book_id": 1, "member_id": member_id })).await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(borrow["return_date"].is_null());

    let uri = format!("/members/{}/borrows?active=true", member_id);
    let (status, active) = get(&app, &uri).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(active.as_array().unwrap().len(), 1);
    assert_eq!(active[0]["book"]["title"], "The Great Gatsby");

    let (status, returned) = post(&app, "/returns", json!({ "book_id": "1", "member_id": member_id })).await;
    assert_eq!(status, StatusCode::OK);
    assert!(returned["return_date"].is_string());

    let (_, active) = get(&app, &uri).await;
    assert!(active.as_array().unwrap().is_empty());

    let (status, _) = post(&app, "/returns", json!({ "book_id": 1, "member_id": member_id })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_last_copies_of_1984() {
    let app = app();
    let a = new_member(&app, "A").await;
    let b = new_member(&app, "B").await;
    let c = new_member(&app, "C").await;

    for member_id in [a, b] {
        let (status, _) = post(&app, "/borrows", json!({ "book_id": 2, "member_id": member_id })).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = post(&app, "/borrows", json!({ "book_id": 2, "member_id": c })).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "No available copies for this book");

    let (_, book) = get(&app, "/books/2").await;
    assert_eq!(book["available_copies"], 0);

    let (status, _) = post(&app, "/returns", json!({ "book_id": 2, "member_id": a })).await;
    assert_eq!(status, StatusCode::OK);

    let (_, book) = get(&app, "/books/2").await;
    assert_eq!(book["available_copies"], 1);

    let (_, borrows) = get(&app, "/borrows?book_id=2&status=active").await;
    assert_eq!(borrows.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_inactive_member_cannot_borrow() {
    let app = app();
    let member_id = new_member(&app, "Sleeper").await;

    let uri = format!("/members/{}", member_id);
    let (status, member) = send(&app, Method::PATCH, &uri, Some(json!({ "status": "inactive" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(member["status"], "inactive");

    let (status, body) = post(&app, "/borrows", json!({ "book_id": 1, "member_id": member_id })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "InvalidState");

    let (_, book) = get(&app, "/books/1").await;
    assert_eq!(book["available_copies"], 3);
}

#[tokio::test]
async fn test_delete_book_blocked_by_active_borrow() {
    let app = app();
    let member_id = new_member(&app, "Holder").await;
    post(&app, "/borrows", json!({ "book_id": 4, "member_id": member_id })).await;

    let (status, _) = send(&app, Method::DELETE, "/books/4", None).await;
    assert_eq!(status, StatusCode::CONFLICT);

    post(&app, "/returns", json!({ "book_id": 4, "member_id": member_id })).await;

    let (status, body) = send(&app, Method::DELETE, "/books/4", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_null());

    let (status, _) = get(&app, "/books/4").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_reservation_lifecycle() {
    let app = app();
    let member_id = new_member(&app, "Planner").await;
    let request = json!({ "book_id": 3, "member_id": member_id });

    let (status, reservation) = post(&app, "/reservations", request.clone()).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(reservation["status"], "active");
    let id = reservation["reservation_id"].as_i64().unwrap();

    let (status, _) = post(&app, "/reservations", request.clone()).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = send(&app, Method::DELETE, &format!("/reservations/{}", id), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, cancelled) = get(&app, "/reservations?status=cancelled").await;
    assert_eq!(cancelled[0]["reservation_id"], id);
    assert_eq!(cancelled[0]["member"]["name"], "Planner");

    let (status, _) = post(&app, "/reservations", request).await;
    assert_eq!(status, StatusCode::CREATED);

    let uri = format!("/members/{}/reservations?status=active", member_id);
    let (_, active) = get(&app, &uri).await;
    assert_eq!(active.as_array().unwrap().len(), 1);
    assert_eq!(active[0]["book"]["title"], "To Kill a Mockingbird");
}

#[tokio::test]
async fn test_update_reservation_status() {
    let app = app();
    let (_, reservation) = post(&app, "/reservations", json!({ "book_id": 1, "member_id": 1 })).await;
    let uri = format!("/reservations/{}", reservation["reservation_id"]);

    let (status, body) = send(&app, Method::PATCH, &uri, Some(json!({ "status": "fulfilled" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "fulfilled");

    let (status, body) = send(&app, Method::PATCH, &uri, Some(json!({}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "fulfilled");

    let (status, _) = send(&app, Method::PATCH, "/reservations/77", Some(json!({ "status": "x" }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_authors_and_categories() {
    let app = app();

    let (status, authors) = get(&app, "/authors").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(authors.as_array().unwrap().len(), 4);

    let (_, books) = get(&app, "/authors/2/books").await;
    assert_eq!(books[0]["title"], "1984");

    let (_, category) = get(&app, "/categories/3").await;
    assert_eq!(category["name"], "Dystopian");

    let (status, _) = get(&app, "/categories/9/books").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_bad_input_is_rejected() {
    let app = app();

    let (status, body) = get(&app, "/books/abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 1);

    let (status, _) = get(&app, "/borrows?member_id=one").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = post(&app, "/borrows", json!({ "book_id": 1 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = post(&app, "/borrows", json!({ "book_id": "first", "member_id": 1 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = get(&app, "/members/99/borrows").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_openapi_document_served() {
    let app = app();
    let (status, doc) = get(&app, "/api-docs/openapi.json").await;

    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"]["/books/{id}"].is_object());
}

#[tokio::test]
async fn test_patch_without_body() {
    let app = app();
    let (status, reservation) = post(&app, "/reservations", json!({ "book_id": 2, "member_id": 1 })).await;
    assert_eq!(status, StatusCode::CREATED);
    let uri = format!("/reservations/{}", reservation["reservation_id"]);

    let (status, body) = send(&app, Method::PATCH, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "active");

    let (status, _) = send(&app, Method::PATCH, "/books/42", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, member) = send(&app, Method::PATCH, "/members/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(member["name"], "Alice Example");
}

#[tokio::test]
async fn test_zero_values_count_as_missing() {
    let app = app();

    let (status, _) = post(
        &app,
        "/books",
        json!({ "title": "Zero", "isbn": "ZERO-1", "publication_year": 0 }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = post(&app, "/borrows", json!({ "book_id": 0, "member_id": 1 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "book_id and member_id are required");
}
