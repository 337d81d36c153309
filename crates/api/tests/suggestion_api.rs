//! Integration tests for the suggestion endpoint.

mod common;

use axum::http::StatusCode;
use common::{body_json, post_json};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn test_suggestions_echo_description(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/ai-suggestions/",
        json!({"title": "Plan trip", "description": "Book flights"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["priority"], "High");
    assert_eq!(body["suggested_deadline"], "2025-07-10");
    assert_eq!(body["category"], "Work");
    assert_eq!(
        body["enhanced_description"],
        "Book flights (Don't forget to break it into subtasks)"
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_suggestions_accept_empty_body(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/ai-suggestions/", json!({})).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["priority"], "High");
    assert_eq!(
        body["enhanced_description"],
        " (Don't forget to break it into subtasks)"
    );
}
