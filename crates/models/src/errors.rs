use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    /// A unique constraint rejected the write.
    #[error("duplicate value: {0}")]
    Duplicate(String),
    /// The row targeted by an update does not exist.
    #[error("record not found: {0}")]
    NotFound(String),
    #[error("database error: {0}")]
    Db(String),
}

impl From<DbErr> for ModelError {
    fn from(e: DbErr) -> Self {
        if let DbErr::RecordNotUpdated = e {
            return ModelError::NotFound(e.to_string());
        }
        match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg)) => ModelError::Duplicate(msg),
            _ => ModelError::Db(e.to_string()),
        }
    }
}
