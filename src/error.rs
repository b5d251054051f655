use actix_web::http::StatusCode;
use actix_web::HttpResponse;

use crate::domain::order::OrderError;

// ============================================================================
// API Error Taxonomy
// ============================================================================
//
// Every failure that reaches the HTTP boundary becomes one of these. The
// response body is always `{ "error": "<message>" }`, matching the shape the
// storefront client expects.
//
// Persistence failures during order submission never show up here: the
// submission handler swallows them and still answers 201.
//
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// User-correctable input problem (HTTP 400).
    #[error("{0}")]
    Validation(String),

    /// Unknown order number (HTTP 404).
    #[error("{0}")]
    NotFound(String),

    /// Unexpected parse/runtime fault, or a read against an unreachable
    /// store (HTTP 500).
    #[error("{0}")]
    Internal(String),
}

impl actix_web::ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .json(serde_json::json!({ "error": self.to_string() }))
    }
}

impl From<OrderError> for ApiError {
    fn from(err: OrderError) -> Self {
        ApiError::Validation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::Validation("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::NotFound("x".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Internal("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_validation_from_order_error() {
        let err: ApiError = OrderError::EmptyItems.into();
        match err {
            ApiError::Validation(msg) => {
                assert_eq!(msg, "El pedido debe tener al menos un producto")
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}
