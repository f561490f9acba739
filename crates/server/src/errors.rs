use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::error;

use service::errors::ServiceError;

/// JSON error envelope returned for every failed customer request.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub path: String,
    pub message: String,
    pub status_code: u16,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    pub path: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>, path: impl Into<String>) -> Self {
        Self { status, message: message.into(), path: path.into() }
    }

    /// Map a service outcome to its fixed HTTP status. Storage failures are
    /// logged here and reported without their details.
    pub fn from_service(e: ServiceError, path: impl Into<String>) -> Self {
        let path = path.into();
        let status = status_for(&e);
        let message = match e {
            ServiceError::NotFound(m) | ServiceError::Conflict(m) | ServiceError::InvalidRequest(m) => m,
            ServiceError::Storage(detail) => {
                error!(%path, error = %detail, "storage failure");
                "internal server error".to_string()
            }
        };
        Self { status, message, path }
    }
}

pub fn status_for(e: &ServiceError) -> StatusCode {
    match e {
        ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
        ServiceError::Conflict(_) => StatusCode::CONFLICT,
        ServiceError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        ServiceError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            path: self.path,
            message: self.message,
            status_code: self.status.as_u16(),
            timestamp: Utc::now(),
        };
        (self.status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_each_kind_to_its_status() {
        assert_eq!(status_for(&ServiceError::customer_not_found(1)), StatusCode::NOT_FOUND);
        assert_eq!(status_for(&ServiceError::email_taken()), StatusCode::CONFLICT);
        assert_eq!(status_for(&ServiceError::no_changes()), StatusCode::BAD_REQUEST);
        assert_eq!(status_for(&ServiceError::Storage("boom".into())), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn keeps_domain_message_and_hides_storage_detail() {
        let e = ApiError::from_service(ServiceError::customer_not_found(7), "/api/v1/customers/7");
        assert_eq!(e.message, "customer with id [7] not found");
        assert_eq!(e.path, "/api/v1/customers/7");

        let e = ApiError::from_service(ServiceError::Storage("connection refused".into()), "/api/v1/customers");
        assert_eq!(e.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!e.message.contains("connection refused"));
    }
}
