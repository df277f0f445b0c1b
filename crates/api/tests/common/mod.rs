#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use digitalpro_api::auth::session::SessionProvider;
use digitalpro_api::config::{BackendConfig, BackendMode, LogFormat, ServerConfig};
use digitalpro_api::router::build_app_router;
use digitalpro_api::state::AppState;
use digitalpro_core::roles::Role;
use digitalpro_db::auth::jwt::JwtConfig;
use digitalpro_db::{MemoryStore, SharedClient};

pub const ADMIN_EMAIL: &str = "owner@digitalpro.test";
pub const ADMIN_PASSWORD: &str = "correct-horse";

/// Test `ServerConfig` on the in-memory backend.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        log_format: LogFormat::Pretty,
        backend: BackendConfig {
            mode: BackendMode::Memory,
            url: String::new(),
            anon_key: String::new(),
            service_key: String::new(),
            jwt_secret: "integration-test-secret".to_string(),
        },
    }
}

/// Full application router over a fresh [`MemoryStore`].
///
/// The store is returned so tests can seed rows, inspect the call log and
/// inject failures.
pub fn build_test_app() -> (Router, Arc<MemoryStore>) {
    let config = test_config();
    let (app, store, _sessions) = build_test_app_with_sessions(&config);
    (app, store)
}

/// Router whose table calls go through `client`; `store` still provides auth.
pub fn build_test_app_with_client(client: SharedClient, store: Arc<MemoryStore>) -> Router {
    let config = test_config();
    let sessions = SessionProvider::new(store.clone());
    let state = AppState {
        client,
        auth: store,
        sessions,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Like [`build_test_app`] but also hands back the session provider.
pub fn build_test_app_with_sessions(
    config: &ServerConfig,
) -> (Router, Arc<MemoryStore>, Arc<SessionProvider>) {
    let store = Arc::new(MemoryStore::new(JwtConfig::new(
        config.backend.jwt_secret.clone(),
    )));
    let sessions = SessionProvider::new(store.clone());

    let state = AppState {
        client: store.clone(),
        auth: store.clone(),
        sessions: Arc::clone(&sessions),
        config: Arc::new(config.clone()),
    };

    (build_app_router(state, config), store, sessions)
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    let body = match body {
        Some(json) => {
            builder = builder.header(CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    app.clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: &Router, uri: &str, token: &str) -> Response {
    send(app, Method::GET, uri, Some(token), None).await
}

pub async fn post_json(app: &Router, uri: &str, body: Value) -> Response {
    send(app, Method::POST, uri, None, Some(body)).await
}

pub async fn post_json_auth(app: &Router, uri: &str, token: &str, body: Value) -> Response {
    send(app, Method::POST, uri, Some(token), Some(body)).await
}

pub async fn post_auth(app: &Router, uri: &str, token: &str) -> Response {
    send(app, Method::POST, uri, Some(token), None).await
}

pub async fn put_json_auth(app: &Router, uri: &str, token: &str, body: Value) -> Response {
    send(app, Method::PUT, uri, Some(token), Some(body)).await
}

pub async fn delete_auth(app: &Router, uri: &str, token: &str) -> Response {
    send(app, Method::DELETE, uri, Some(token), None).await
}

pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Auth helpers
// ---------------------------------------------------------------------------

/// Sign in through the API and return the access token.
pub async fn login(app: &Router, email: &str, password: &str) -> String {
    let response = post_json(
        app,
        "/api/v1/auth/login",
        serde_json::json!({ "email": email, "password": password }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    json["data"]["access_token"].as_str().unwrap().to_string()
}

/// Create the default admin and sign in as them.
pub async fn admin_token(app: &Router, store: &MemoryStore) -> String {
    store
        .create_user(ADMIN_EMAIL, ADMIN_PASSWORD, Role::Admin)
        .await
        .unwrap();
    login(app, ADMIN_EMAIL, ADMIN_PASSWORD).await
}
