// Common DTOs for public API
//
// These types are shared across multiple API endpoints.

use axum::http::StatusCode;
use axum::Json;
use returns_core::ReturnsError;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Standard error response for API endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message describing what went wrong.
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }

    /// Convert to axum response tuple
    pub fn into_response(self, status: StatusCode) -> (StatusCode, Json<Self>) {
        (status, Json(self))
    }
}

/// Map a workflow error to a status code and error body.
pub fn error_response(err: ReturnsError) -> (StatusCode, Json<ErrorResponse>) {
    let status = match &err {
        ReturnsError::NotFound(_) => StatusCode::NOT_FOUND,
        ReturnsError::InvalidAction(_) => StatusCode::BAD_REQUEST,
        ReturnsError::ActionNotAvailable { .. } => StatusCode::CONFLICT,
    };

    tracing::debug!(status = %status, "Return request rejected: {}", err);
    ErrorResponse::new(err.to_string()).into_response(status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use returns_core::ActionKind;
    use uuid::Uuid;

    #[test]
    fn test_error_response_serialization() {
        let error = ErrorResponse::new("Internal server error");
        let json = serde_json::to_string(&error).expect("Failed to serialize");
        assert_eq!(json, r#"{"error":"Internal server error"}"#);
    }

    #[test]
    fn test_status_mapping() {
        let cases = [
            (ReturnsError::NotFound(Uuid::nil()), StatusCode::NOT_FOUND),
            (ReturnsError::InvalidAction(9), StatusCode::BAD_REQUEST),
            (
                ReturnsError::ActionNotAvailable {
                    id: Uuid::nil(),
                    action: ActionKind::Void,
                },
                StatusCode::CONFLICT,
            ),
        ];
        for (err, expected) in cases {
            let (status, _) = error_response(err);
            assert_eq!(status, expected);
        }
    }

    #[test]
    fn test_error_body_carries_message() {
        let (status, Json(body)) = error_response(ReturnsError::InvalidAction(7));
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "Invalid action code: 7");
    }
}
