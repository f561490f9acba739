use thiserror::Error;

use models::errors::ModelError;

const EMAIL_TAKEN: &str = "email already taken";

/// Outcomes the customer service reports to its callers.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    InvalidRequest(String),
    #[error("storage error: {0}")]
    Storage(String),
}

impl ServiceError {
    pub fn customer_not_found(id: i32) -> Self {
        Self::NotFound(format!("customer with id [{id}] not found"))
    }

    pub fn email_taken() -> Self {
        Self::Conflict(EMAIL_TAKEN.into())
    }

    pub fn no_changes() -> Self {
        Self::InvalidRequest("no data changes found".into())
    }

    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            ServiceError::NotFound(_) => 1001,
            ServiceError::Conflict(_) => 1002,
            ServiceError::InvalidRequest(_) => 1003,
            ServiceError::Storage(_) => 1200,
        }
    }
}

impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        match e {
            // The unique index lost a race against the service-level check.
            ModelError::Duplicate(_) => Self::email_taken(),
            ModelError::NotFound(msg) => Self::NotFound(msg),
            ModelError::Db(msg) => Self::Storage(msg),
        }
    }
}
