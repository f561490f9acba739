use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::customer::domain::{Customer, NewCustomer};
use crate::customer::repository::CustomerRepository;
use crate::errors::ServiceError;

/// SeaORM-backed repository implementation.
pub struct SeaOrmCustomerRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl CustomerRepository for SeaOrmCustomerRepository {
    async fn list_all(&self) -> Result<Vec<Customer>, ServiceError> {
        let rows = models::customer::list(&self.db).await?;
        Ok(rows.into_iter().map(Customer::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Customer>, ServiceError> {
        Ok(models::customer::find_by_id(&self.db, id).await?.map(Customer::from))
    }

    async fn insert(&self, customer: NewCustomer) -> Result<Customer, ServiceError> {
        let created = models::customer::create(&self.db, &customer.name, &customer.email, customer.age).await?;
        Ok(created.into())
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, ServiceError> {
        Ok(models::customer::exists_by_email(&self.db, email).await?)
    }

    async fn exists_by_id(&self, id: i32) -> Result<bool, ServiceError> {
        Ok(models::customer::exists_by_id(&self.db, id).await?)
    }

    async fn delete_by_id(&self, id: i32) -> Result<(), ServiceError> {
        models::customer::delete_by_id(&self.db, id).await?;
        Ok(())
    }

    async fn update(&self, customer: &Customer) -> Result<(), ServiceError> {
        models::customer::update(&self.db, customer.id, &customer.name, &customer.email, customer.age).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use uuid::Uuid;

    fn unique_email() -> String {
        format!("repo_{}@example.com", Uuid::new_v4())
    }

    #[tokio::test]
    async fn seaorm_repository_round_trip() -> Result<(), anyhow::Error> {
        let Some(db) = get_db().await? else { return Ok(()) };
        let repo = SeaOrmCustomerRepository { db };

        let email = unique_email();
        let created = repo.insert(NewCustomer::new("Alex", &email, 19)).await?;
        assert!(repo.exists_by_email(&email).await?);
        assert!(repo.exists_by_id(created.id).await?);
        assert!(repo.list_all().await?.contains(&created));

        let mut changed = created.clone();
        changed.age = 20;
        repo.update(&changed).await?;
        assert_eq!(repo.find_by_id(created.id).await?, Some(changed));

        repo.delete_by_id(created.id).await?;
        assert!(repo.find_by_id(created.id).await?.is_none());
        // deleting again is not an error
        repo.delete_by_id(created.id).await?;
        Ok(())
    }

    #[tokio::test]
    async fn unique_index_surfaces_as_conflict() -> Result<(), anyhow::Error> {
        let Some(db) = get_db().await? else { return Ok(()) };
        let repo = SeaOrmCustomerRepository { db };

        let email = unique_email();
        let first = repo.insert(NewCustomer::new("A", &email, 30)).await?;
        let err = repo.insert(NewCustomer::new("B", &email, 31)).await.unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)), "got {err:?}");

        repo.delete_by_id(first.id).await?;
        Ok(())
    }

    #[tokio::test]
    async fn update_of_missing_row_is_not_found() -> Result<(), anyhow::Error> {
        let Some(db) = get_db().await? else { return Ok(()) };
        let repo = SeaOrmCustomerRepository { db };
        let ghost = Customer { id: -1, name: "x".into(), email: unique_email(), age: 1 };
        assert!(matches!(repo.update(&ghost).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }
}
