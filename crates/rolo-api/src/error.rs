//! API error type and [`axum::response::IntoResponse`] implementation.
//!
//! Every error renders as the JSON envelope
//! `{"error": "<code> : <reason phrase>", "message": "<detail>"}` with the
//! matching HTTP status line.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("bad request: {0}")]
  BadRequest(String),

  #[error("not found: {0}")]
  NotFound(String),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ApiError {
  /// Map a service-layer error onto its HTTP kind.
  ///
  /// Validation failures become 400, missing contacts 404, and store
  /// failures pass through as 500s without translation.
  pub fn from_core<E>(err: rolo_core::Error<E>) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    match err {
      rolo_core::Error::Validation(m) => ApiError::BadRequest(m),
      rolo_core::Error::NotFound(m) => ApiError::NotFound(m),
      rolo_core::Error::Store(e) => ApiError::Store(Box::new(e)),
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, message) = match self {
      ApiError::BadRequest(m) => (StatusCode::BAD_REQUEST, m),
      ApiError::NotFound(m) => (StatusCode::NOT_FOUND, m),
      ApiError::Store(e) => {
        tracing::error!(error = %e, "document store failure");
        (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
      }
    };

    let reason = status.canonical_reason().unwrap_or("Unknown Error");
    let body = json!({
      "error":   format!("{} : {}", status.as_u16(), reason),
      "message": message,
    });

    (status, Json(body)).into_response()
  }
}
