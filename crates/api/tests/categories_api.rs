//! Integration tests for `/api/categories`.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json};
use serde_json::json;
use sqlx::SqlitePool;

#[sqlx::test(migrations = "../db/migrations")]
async fn create_returns_201(pool: SqlitePool) {
    let app = common::build_test_app(pool);

    let response = post_json(app, "/api/categories", json!({ "name": "Drama" })).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["name"], "Drama");
    assert!(json["id"].is_i64());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn duplicate_name_returns_400(pool: SqlitePool) {
    let app = common::build_test_app(pool);

    let first = post_json(app.clone(), "/api/categories", json!({ "name": "Drama" })).await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = post_json(app.clone(), "/api/categories", json!({ "name": "Drama" })).await;
    assert_eq!(second.status(), StatusCode::BAD_REQUEST);

    let json = body_json(second).await;
    assert_eq!(json["code"], "DUPLICATE_KEY");
    assert_eq!(json["error"], "Category already exists");

    let all = body_json(get(app, "/api/categories").await).await;
    assert_eq!(all.as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_is_sorted_by_name(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    for name in ["Western", "Action", "Drama"] {
        post_json(app.clone(), "/api/categories", json!({ "name": name })).await;
    }

    let json = body_json(get(app, "/api/categories").await).await;
    let names: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Action", "Drama", "Western"]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn empty_name_is_rejected(pool: SqlitePool) {
    let app = common::build_test_app(pool);

    let response = post_json(app, "/api/categories", json!({ "name": "" })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}
