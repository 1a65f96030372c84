//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use roster_core::PersonId;
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  /// Rendered as an empty-bodied 404.
  #[error("person not found: {0}")]
  NotFound(PersonId),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl From<roster_core::Error> for ApiError {
  fn from(e: roster_core::Error) -> Self {
    match e {
      roster_core::Error::PersonNotFound(id) => ApiError::NotFound(id),
      roster_core::Error::Store(e) => ApiError::Store(e),
      other => ApiError::Store(Box::new(other)),
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    match self {
      ApiError::NotFound(_) => StatusCode::NOT_FOUND.into_response(),
      ApiError::Store(e) => {
        tracing::error!(error = %e, "store failure");
        (
          StatusCode::INTERNAL_SERVER_ERROR,
          Json(json!({ "error": e.to_string() })),
        )
          .into_response()
      }
    }
  }
}
