use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::{json, Value};

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Serialize)]
struct ErrorInfo {
    code: &'static str,
    message: String,
    details: Value,
}

#[derive(Debug)]
pub enum AppError {
    Validation { message: String, details: Value },
    StoreUnavailable { message: String, details: Value },
    DeadlineExceeded { message: String, details: Value },
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn store_unavailable(message: impl Into<String>, details: Value) -> Self {
        Self::StoreUnavailable {
            message: message.into(),
            details,
        }
    }
    pub fn deadline_exceeded(message: impl Into<String>, details: Value) -> Self {
        Self::DeadlineExceeded {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    fn into_parts(self) -> (StatusCode, ErrorBody) {
        let (status, code, message, details) = match self {
            AppError::Validation { message, details } => (
                StatusCode::BAD_REQUEST,
                "validation_error",
                message,
                details,
            ),
            AppError::StoreUnavailable { message, details } => (
                StatusCode::SERVICE_UNAVAILABLE,
                "store_unavailable",
                message,
                details,
            ),
            AppError::DeadlineExceeded { message, details } => (
                StatusCode::GATEWAY_TIMEOUT,
                "deadline_exceeded",
                message,
                details,
            ),
            AppError::Internal { message, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                message,
                details,
            ),
        };

        (
            status,
            ErrorBody {
                error: ErrorInfo {
                    code,
                    message,
                    details,
                },
            },
        )
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = self.into_parts();
        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::store_unavailable("Database error", json!({ "cause": e.to_string() }))
    }
}

/// Outcome of a failed aggregation: every error collected across the three
/// concurrent resolutions. Partial successes are discarded; the response
/// body is a JSON array with one entry per failed resolution.
#[derive(Debug)]
pub struct AggregateError {
    errors: Vec<AppError>,
}

impl AggregateError {
    pub fn new(errors: Vec<AppError>) -> Self {
        Self { errors }
    }

    pub fn errors(&self) -> &[AppError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<AppError> {
        self.errors
    }
}

impl IntoResponse for AggregateError {
    fn into_response(self) -> Response {
        let bodies: Vec<ErrorBody> = self
            .errors
            .into_iter()
            .map(|e| e.into_parts().1)
            .collect();

        (StatusCode::INTERNAL_SERVER_ERROR, Json(bodies)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_status_mapping() {
        let (status, _) = AppError::bad_request("bad id", json!({})).into_parts();
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = AppError::store_unavailable("db down", json!({})).into_parts();
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);

        let (status, _) = AppError::deadline_exceeded("too slow", json!({})).into_parts();
        assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);

        let (status, _) = AppError::internal("boom", json!({})).into_parts();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_sqlx_error_maps_to_store_unavailable() {
        let err: AppError = sqlx::Error::PoolTimedOut.into();
        assert!(matches!(err, AppError::StoreUnavailable { .. }));
    }

    #[test]
    fn test_aggregate_error_keeps_every_entry() {
        let agg = AggregateError::new(vec![
            AppError::store_unavailable("profile", json!({})),
            AppError::store_unavailable("family", json!({})),
            AppError::deadline_exceeded("transportation", json!({})),
        ]);

        assert_eq!(agg.errors().len(), 3);
    }
}
