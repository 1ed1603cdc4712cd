use axum::{
    http::{StatusCode, Uri},
    response::IntoResponse,
    Json,
};
use serde_json::json;

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "ok" })))
}

pub async fn not_found(uri: Uri) -> impl IntoResponse {
    tracing::warn!("No route for {}", uri.path());
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Not found" })))
}
