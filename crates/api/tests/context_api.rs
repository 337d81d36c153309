//! Integration tests for the context entry endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json};
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_context_returns_201(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/contexts/",
        serde_json::json!({"content": "call the plumber", "source": "WhatsApp"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["content"], "call the plumber");
    assert_eq!(json["source"], "WhatsApp");
    assert!(json["id"].is_number());
    assert!(json["timestamp"].is_string());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_context_with_unknown_source_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/contexts/",
        serde_json::json!({"content": "hello", "source": "SMS"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["source"][0], "\"SMS\" is not a valid choice.");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_context_without_content_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/contexts/", serde_json::json!({"source": "Note"})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["content"][0], "This field is required.");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_context_with_blank_content_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/contexts/",
        serde_json::json!({"content": "", "source": "Note"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["content"][0], "This field may not be blank.");

    // Nothing was persisted.
    let app = common::build_test_app(pool);
    let listing = body_json(get(app, "/contexts/").await).await;
    assert_eq!(listing.as_array().unwrap().len(), 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_contexts_newest_first(pool: PgPool) {
    for (content, source) in [("older note", "Note"), ("newer mail", "Email")] {
        let app = common::build_test_app(pool.clone());
        let response = post_json(
            app,
            "/contexts/",
            serde_json::json!({"content": content, "source": source}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let app = common::build_test_app(pool);
    let response = get(app, "/contexts/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let entries = json.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["content"], "newer mail");
    assert_eq!(entries[1]["content"], "older note");
}
