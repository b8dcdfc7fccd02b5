//! Local backend stand-in for request client tests.
//!
//! Serves a handful of WASAText routes on an ephemeral port and echoes what
//! it received so tests can inspect the request as it left the client.

use std::time::Duration;

use axum::Json;
use axum::Router;
use axum::http::{HeaderMap, Method, StatusCode, Uri, header};
use axum::routing::{get, post};
use serde_json::{Value, json};

/// Credential the stand-in hands out on login.
pub const ISSUED_IDENTIFIER: i64 = 42;

/// How long `/slow` waits before answering.
pub const SLOW_DELAY: Duration = Duration::from_millis(400);

fn authorization(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(String::from)
}

async fn echo(method: Method, uri: Uri, headers: HeaderMap) -> Json<Value> {
    Json(json!({
        "method": method.as_str(),
        "path": uri.path(),
        "query": uri.query(),
        "authorization": authorization(&headers),
        "authorization_count": headers.get_all(header::AUTHORIZATION).iter().count(),
    }))
}

async fn slow(method: Method, uri: Uri, headers: HeaderMap) -> Json<Value> {
    tokio::time::sleep(SLOW_DELAY).await;
    echo(method, uri, headers).await
}

async fn login() -> Json<Value> {
    Json(json!({ "identifier": ISSUED_IDENTIFIER }))
}

async fn user_profile(headers: HeaderMap) -> (StatusCode, Json<Value>) {
    let expected = format!("Bearer {ISSUED_IDENTIFIER}");
    if authorization(&headers).as_deref() == Some(expected.as_str()) {
        (
            StatusCode::OK,
            Json(json!([{
                "name": "bob",
                "photo_url": "",
                "last_message": "hi",
                "last_message_time": "2025-01-05T10:00:00Z"
            }])),
        )
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": "unauthorized" })),
        )
    }
}

fn router() -> Router {
    Router::new()
        .route("/session", post(login))
        .route("/user-profile", get(user_profile))
        .route("/slow", get(slow))
        .fallback(echo)
}

/// Start the stand-in and return its base address.
pub async fn spawn_backend() -> String {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Failed to read local address");

    tokio::spawn(async move {
        axum::serve(listener, router())
            .await
            .expect("Test backend stopped");
    });

    format!("http://{addr}")
}
