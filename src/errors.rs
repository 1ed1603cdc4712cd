use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::{
    models::ParseError,
    services::{order_store::StoreError, order_validator::ValidationError},
};

/// Everything that can end an order request early.
///
/// The `Display` text is what the caller sees in `{"error": ...}`; the
/// wrapped sources are for logs only.
#[derive(Debug, Error)]
pub enum OrderEventError {
    #[error("Use POST")]
    MethodNotAllowed,
    #[error("Invalid JSON")]
    InvalidJson(#[source] ParseError),
    #[error("{0}")]
    Validation(#[from] ValidationError),
    #[error("Internal error")]
    Persistence(#[source] StoreError),
}

impl OrderEventError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::InvalidJson(_) | Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ParseError> for OrderEventError {
    fn from(err: ParseError) -> Self {
        Self::InvalidJson(err)
    }
}

impl From<StoreError> for OrderEventError {
    fn from(err: StoreError) -> Self {
        Self::Persistence(err)
    }
}

impl IntoResponse for OrderEventError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}
