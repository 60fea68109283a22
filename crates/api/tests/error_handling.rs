//! `AppError` to HTTP response mapping.
//!
//! Calls `IntoResponse` directly; no router or store involved.

use axum::http::{Method, StatusCode, Uri};
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use inkpanel_api::error::AppError;
use inkpanel_core::error::CoreError;
use inkpanel_db::StoreError;
use uuid::Uuid;

async fn render(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn not_found_names_entity_and_id() {
    let id = Uuid::new_v4();
    let (status, json) = render(AppError::Core(CoreError::NotFound {
        entity: "Page",
        id,
    }))
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["success"], false);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], format!("Page with id {id} not found"));
}

#[tokio::test]
async fn validation_keeps_message() {
    let (status, json) = render(AppError::Core(CoreError::Validation(
        "pageNumber must be a positive integer".into(),
    )))
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "pageNumber must be a positive integer");
}

#[tokio::test]
async fn unauthorized_returns_401() {
    let (status, json) = render(AppError::Core(CoreError::Unauthorized(
        "Missing Authorization header".into(),
    )))
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["code"], "UNAUTHORIZED");
    assert_eq!(json["success"], false);
}

#[tokio::test]
async fn database_error_is_sanitized() {
    let (status, json) = render(AppError::Store(StoreError::Database(
        sqlx::Error::Protocol("password authentication failed for admin:hunter2".into()),
    )))
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
    assert!(!json.to_string().contains("hunter2"));
}

#[tokio::test]
async fn missing_parent_returns_404() {
    let id = Uuid::new_v4();
    let (status, json) = render(AppError::Store(StoreError::MissingParent {
        entity: "Project",
        id,
    }))
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], format!("Project with id {id} not found"));
}

#[tokio::test]
async fn missing_row_returns_404() {
    let (status, json) = render(AppError::Store(StoreError::Database(
        sqlx::Error::RowNotFound,
    )))
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Resource not found");
}

#[tokio::test]
async fn unmatched_method_returns_405() {
    let (status, json) = render(AppError::MethodNotAllowed {
        method: Method::PATCH,
        uri: Uri::from_static("/api/v1/projects"),
    })
    .await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(json["code"], "METHOD_NOT_ALLOWED");
    assert_eq!(json["error"], "Method PATCH not allowed for /api/v1/projects");
}
