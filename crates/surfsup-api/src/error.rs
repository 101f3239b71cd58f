//! Error types for the climate API.
//!
//! [`ApiError`] unifies handler failure modes into a single enum that
//! converts into an Axum HTTP response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use surfsup_db::DbError;

/// Body text sent for any data store failure. The underlying error is
/// logged, never returned to the client.
const INTERNAL_ERROR_MESSAGE: &str = "internal server error";

/// Errors that can occur in the climate API layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// No route matches the requested path.
    #[error("not found: {0}")]
    NotFound(String),

    /// The climate database could not be opened or queried.
    #[error("database error: {0}")]
    Database(#[from] DbError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::NotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),
            Self::Database(e) => {
                tracing::error!(error = %e, "Climate query failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_ERROR_MESSAGE.to_owned(),
                )
            }
        };

        let body = serde_json::json!({
            "error": message,
            "status": status.as_u16(),
        });

        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let response = ApiError::NotFound(String::from("/nowhere")).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn database_error_maps_to_500() {
        let err = ApiError::from(DbError::Config(String::from("bad url")));
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn database_error_body_is_generic() {
        let err = ApiError::from(DbError::Config(String::from("Invalid database URL: secret")));
        let bytes = axum::body::to_bytes(err.into_response().into_body(), usize::MAX).await;
        assert!(bytes.is_ok());
        let body: serde_json::Value =
            serde_json::from_slice(&bytes.unwrap_or_default()).unwrap_or_default();
        assert_eq!(body["error"], INTERNAL_ERROR_MESSAGE);
        assert_eq!(body["status"], 500);
    }
}
