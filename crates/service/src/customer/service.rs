use std::sync::Arc;

use tracing::{debug, info, instrument};

use super::domain::{Customer, CustomerUpdate, NewCustomer};
use super::repository::CustomerRepository;
use crate::errors::ServiceError;

/// Customer business service independent of web framework.
///
/// Holds no records itself: every call reads or writes through the repository.
pub struct CustomerService<R: CustomerRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: CustomerRepository + ?Sized> CustomerService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Customer>, ServiceError> {
        self.repo.list_all().await
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i32) -> Result<Customer, ServiceError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::customer_not_found(id))
    }

    /// Register a new customer. The email must not belong to anyone yet.
    ///
    /// # Examples
    /// ```
    /// use service::customer::{CustomerService, InMemoryCustomerRepository, NewCustomer};
    /// use std::sync::Arc;
    /// let svc = CustomerService::new(Arc::new(InMemoryCustomerRepository::default()));
    /// let created = tokio_test::block_on(svc.register(NewCustomer::new("Alex", "alex@x.com", 19))).unwrap();
    /// assert_eq!(created.email, "alex@x.com");
    /// assert!(tokio_test::block_on(svc.register(NewCustomer::new("Al", "alex@x.com", 20))).is_err());
    /// ```
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn register(&self, input: NewCustomer) -> Result<Customer, ServiceError> {
        if self.repo.exists_by_email(&input.email).await? {
            debug!("email already registered");
            return Err(ServiceError::email_taken());
        }
        let created = self.repo.insert(input).await?;
        info!(customer_id = created.id, email = %created.email, "customer_registered");
        Ok(created)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        if !self.repo.exists_by_id(id).await? {
            return Err(ServiceError::customer_not_found(id));
        }
        self.repo.delete_by_id(id).await?;
        info!(customer_id = id, "customer_deleted");
        Ok(())
    }

    /// Apply the fields of `patch` that differ from the stored record.
    ///
    /// Fails with `InvalidRequest` when nothing would change. A changed email
    /// must not belong to another customer.
    #[instrument(skip(self, patch))]
    pub async fn update(&self, id: i32, patch: CustomerUpdate) -> Result<Customer, ServiceError> {
        let mut customer = self.get(id).await?;
        let mut changed = false;

        if let Some(name) = patch.name {
            if name != customer.name {
                customer.name = name;
                changed = true;
            }
        }

        if let Some(email) = patch.email {
            if email != customer.email {
                if self.repo.exists_by_email(&email).await? {
                    debug!(%email, "email already registered");
                    return Err(ServiceError::email_taken());
                }
                customer.email = email;
                changed = true;
            }
        }

        if let Some(age) = patch.age {
            if age != customer.age {
                customer.age = age;
                changed = true;
            }
        }

        if !changed {
            return Err(ServiceError::no_changes());
        }

        self.repo.update(&customer).await?;
        info!(customer_id = id, "customer_updated");
        Ok(customer)
    }
}
