use std::sync::Arc;

use async_trait::async_trait;
use configs::{StorageBackend, StorageConfig};
use sea_orm::DatabaseConnection;
use tracing::info;

use super::domain::{Customer, NewCustomer};
use super::repo::{memory::InMemoryCustomerRepository, seaorm::SeaOrmCustomerRepository};
use crate::errors::ServiceError;

/// Storage contract for customers.
///
/// Backends make no existence or uniqueness decisions on behalf of the caller:
/// the service queries first, then acts. The only errors a backend raises are
/// storage failures and the email uniqueness constraint it enforces itself.
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    async fn list_all(&self) -> Result<Vec<Customer>, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Customer>, ServiceError>;
    /// Store a new record and return it with its assigned id.
    async fn insert(&self, customer: NewCustomer) -> Result<Customer, ServiceError>;
    async fn exists_by_email(&self, email: &str) -> Result<bool, ServiceError>;
    async fn exists_by_id(&self, id: i32) -> Result<bool, ServiceError>;
    /// Absent ids are not an error.
    async fn delete_by_id(&self, id: i32) -> Result<(), ServiceError>;
    /// Overwrite the record with `customer.id` in place.
    async fn update(&self, customer: &Customer) -> Result<(), ServiceError>;
}

/// Pick the backend configured under `[storage]`. The postgres backend needs a connection.
pub fn build_repository(
    cfg: &StorageConfig,
    db: Option<DatabaseConnection>,
) -> Result<Arc<dyn CustomerRepository>, ServiceError> {
    match (cfg.backend, db) {
        (StorageBackend::Memory, _) => {
            info!(backend = "memory", "customer storage selected");
            Ok(Arc::new(InMemoryCustomerRepository::default()))
        }
        (StorageBackend::Postgres, Some(db)) => {
            info!(backend = "postgres", "customer storage selected");
            Ok(Arc::new(SeaOrmCustomerRepository { db }))
        }
        (StorageBackend::Postgres, None) => Err(ServiceError::Storage(
            "postgres backend selected but no database connection was provided".into(),
        )),
    }
}
