//! Error handling middleware - every failure is rendered as an `ApiResponse` envelope.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use blog_core::RepoError;
use blog_shared::ApiResponse;
use thiserror::Error;

pub const VALIDATION_FAILED_MESSAGE: &str = "Validation failed";
const INTERNAL_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// Application-level error type that converts to envelope responses.
#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed request: bad path parameter or undecodable body.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The request decoded but broke one or more post rules.
    #[error("Validation failed: {}", .0.join(", "))]
    Validation(Vec<String>),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body: ApiResponse<()> = match self {
            AppError::BadRequest(detail) => ApiResponse::error(vec![detail.clone()]),
            AppError::Validation(errors) => {
                ApiResponse::error_with_message(errors.clone(), VALIDATION_FAILED_MESSAGE)
            }
            AppError::NotFound(detail) => ApiResponse::not_found(detail.clone()),
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                ApiResponse::error(vec![INTERNAL_ERROR_MESSAGE.to_string()])
            }
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        tracing::error!("Repository error: {}", err);
        AppError::Internal(err.to_string())
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use actix_web::body::to_bytes;
    use serde_json::{Value, json};

    use super::*;

    async fn body_of(err: AppError) -> (StatusCode, Value) {
        let response = err.error_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body()).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[actix_web::test]
    async fn test_bad_request_envelope() {
        let (status, body) = body_of(AppError::BadRequest("Invalid post ID format".into())).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({
                "success": false,
                "message": "Operation failed",
                "errors": ["Invalid post ID format"]
            })
        );
    }

    #[actix_web::test]
    async fn test_validation_envelope() {
        let (status, body) = body_of(AppError::Validation(vec![
            "Title is required.".into(),
            "Content is required.".into(),
        ]))
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Validation failed");
        assert_eq!(body["errors"].as_array().unwrap().len(), 2);
    }

    #[actix_web::test]
    async fn test_not_found_envelope() {
        let (status, body) = body_of(AppError::NotFound("Blog post with ID 7 not found".into())).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Blog post with ID 7 not found");
        assert_eq!(body["errors"], json!(["Blog post with ID 7 not found"]));
        assert!(body.get("data").is_none());
    }

    #[actix_web::test]
    async fn test_repo_error_hides_detail() {
        let err: AppError = RepoError::Unavailable("socket closed".into()).into();
        let (status, body) = body_of(err).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["errors"], json!(["An unexpected error occurred"]));
    }
}
