// Not every test binary uses every helper.
#![allow(dead_code)]

use std::str::FromStr;

use anyhow::Result;
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tower::ServiceExt;

/// Build the app over a fresh in-memory database.
///
/// A single connection keeps the in-memory database alive and shared for the
/// whole test; timeouts are disabled so the pool never drops it.
pub async fn test_app() -> Result<Router> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;

    starwars_api::database::init_schema(&pool).await?;
    Ok(starwars_api::app(pool))
}

/// Drive one request through the router, returning status and parsed body.
pub async fn request(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> Result<(StatusCode, Value)> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))?,
        None => builder.body(Body::empty())?,
    };

    let response = app.clone().oneshot(request).await?;
    let status = response.status();

    let bytes = to_bytes(response.into_body(), usize::MAX).await?;
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)?
    };

    Ok((status, value))
}

pub async fn get(app: &Router, uri: &str) -> Result<(StatusCode, Value)> {
    request(app, "GET", uri, None).await
}

pub async fn post(app: &Router, uri: &str, body: Value) -> Result<(StatusCode, Value)> {
    request(app, "POST", uri, Some(body)).await
}

pub async fn put(app: &Router, uri: &str, body: Value) -> Result<(StatusCode, Value)> {
    request(app, "PUT", uri, Some(body)).await
}

pub async fn delete(app: &Router, uri: &str) -> Result<(StatusCode, Value)> {
    request(app, "DELETE", uri, None).await
}
