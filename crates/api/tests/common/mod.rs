#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use cms_api::config::ServerConfig;
use cms_api::router::{build_app, App};
use cms_api::state::AppState;

/// Build a test `ServerConfig` matching the development defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the application exactly as `main.rs` does, over the given pool.
pub fn build_test_app(pool: PgPool) -> App {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app(state, &config)
}

async fn send(app: App, request: Request<Body>) -> Response {
    app.oneshot(request).await.unwrap()
}

fn json_request(method: Method, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn get(app: App, uri: &str) -> Response {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn post_json(app: App, uri: &str, body: serde_json::Value) -> Response {
    send(app, json_request(Method::POST, uri, body)).await
}

pub async fn patch_json(app: App, uri: &str, body: serde_json::Value) -> Response {
    send(app, json_request(Method::PATCH, uri, body)).await
}

pub async fn delete(app: App, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Create a user through the API and return its id.
pub async fn create_user(pool: &PgPool, username: &str) -> i64 {
    let response = post_json(
        build_test_app(pool.clone()),
        "/users",
        serde_json::json!({
            "username": username,
            "email": format!("{username}@example.com"),
            "password": "correct horse",
        }),
    )
    .await;
    body_json(response).await["user_id"].as_i64().unwrap()
}

/// Create a category through the API and return its id.
pub async fn create_category(pool: &PgPool, name: &str) -> i64 {
    let response = post_json(
        build_test_app(pool.clone()),
        "/categories",
        serde_json::json!({ "name": name }),
    )
    .await;
    body_json(response).await["category_id"].as_i64().unwrap()
}

/// Create a draft post through the API and return its id.
pub async fn create_post(pool: &PgPool, user_id: i64, category_id: i64, title: &str) -> i64 {
    let response = post_json(
        build_test_app(pool.clone()),
        "/posts",
        serde_json::json!({
            "user_id": user_id,
            "category_id": category_id,
            "title": title,
            "body": "Lorem ipsum",
        }),
    )
    .await;
    body_json(response).await["post_id"].as_i64().unwrap()
}
