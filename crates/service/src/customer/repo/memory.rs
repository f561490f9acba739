use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::customer::domain::{Customer, NewCustomer};
use crate::customer::repository::CustomerRepository;
use crate::errors::ServiceError;

/// Process-lifetime customer store.
///
/// Records live in a map keyed by id, so `update` overwrites in place and
/// `list_all` yields insertion order (ids only ever grow). Email uniqueness is
/// checked under the same write lock as the mutation, playing the role the
/// unique index plays for postgres.
#[derive(Default)]
pub struct InMemoryCustomerRepository {
    inner: RwLock<State>,
}

#[derive(Default)]
struct State {
    last_id: i32,
    rows: BTreeMap<i32, Customer>,
}

impl State {
    fn email_owner(&self, email: &str) -> Option<i32> {
        self.rows.values().find(|c| c.email == email).map(|c| c.id)
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn list_all(&self) -> Result<Vec<Customer>, ServiceError> {
        let state = self.inner.read().await;
        Ok(state.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Customer>, ServiceError> {
        let state = self.inner.read().await;
        Ok(state.rows.get(&id).cloned())
    }

    async fn insert(&self, customer: NewCustomer) -> Result<Customer, ServiceError> {
        let mut state = self.inner.write().await;
        if state.email_owner(&customer.email).is_some() {
            return Err(ServiceError::email_taken());
        }
        state.last_id = state
            .last_id
            .checked_add(1)
            .ok_or_else(|| ServiceError::Storage("customer id space exhausted".into()))?;
        let stored = customer.with_id(state.last_id);
        state.rows.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, ServiceError> {
        let state = self.inner.read().await;
        Ok(state.email_owner(email).is_some())
    }

    async fn exists_by_id(&self, id: i32) -> Result<bool, ServiceError> {
        let state = self.inner.read().await;
        Ok(state.rows.contains_key(&id))
    }

    async fn delete_by_id(&self, id: i32) -> Result<(), ServiceError> {
        let mut state = self.inner.write().await;
        state.rows.remove(&id);
        Ok(())
    }

    async fn update(&self, customer: &Customer) -> Result<(), ServiceError> {
        let mut state = self.inner.write().await;
        if matches!(state.email_owner(&customer.email), Some(owner) if owner != customer.id) {
            return Err(ServiceError::email_taken());
        }
        match state.rows.get_mut(&customer.id) {
            Some(slot) => {
                *slot = customer.clone();
                Ok(())
            }
            None => Err(ServiceError::customer_not_found(customer.id)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn assigns_increasing_ids_and_keeps_insertion_order() {
        let repo = InMemoryCustomerRepository::default();
        let a = repo.insert(NewCustomer::new("A", "a@x.com", 20)).await.unwrap();
        let b = repo.insert(NewCustomer::new("B", "b@x.com", 21)).await.unwrap();
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);

        let all = repo.list_all().await.unwrap();
        assert_eq!(all, vec![a, b]);
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let repo = InMemoryCustomerRepository::default();
        let a = repo.insert(NewCustomer::new("A", "a@x.com", 20)).await.unwrap();
        repo.delete_by_id(a.id).await.unwrap();
        let b = repo.insert(NewCustomer::new("B", "b@x.com", 21)).await.unwrap();
        assert!(b.id > a.id);
        assert!(!repo.exists_by_id(a.id).await.unwrap());
    }

    #[tokio::test]
    async fn update_overwrites_in_place() {
        let repo = InMemoryCustomerRepository::default();
        let mut c = repo.insert(NewCustomer::new("Alex", "alex@x.com", 19)).await.unwrap();
        c.name = "Alexandro".into();
        repo.update(&c).await.unwrap();

        let all = repo.list_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "Alexandro");
        assert_eq!(repo.find_by_id(c.id).await.unwrap(), Some(c));
    }

    #[tokio::test]
    async fn email_lookup_is_case_sensitive() {
        let repo = InMemoryCustomerRepository::default();
        repo.insert(NewCustomer::new("Alex", "alex@x.com", 19)).await.unwrap();
        assert!(repo.exists_by_email("alex@x.com").await.unwrap());
        assert!(!repo.exists_by_email("ALEX@x.com").await.unwrap());
    }

    #[tokio::test]
    async fn rejects_duplicate_email_on_insert_and_update() {
        let repo = InMemoryCustomerRepository::default();
        repo.insert(NewCustomer::new("A", "a@x.com", 20)).await.unwrap();
        let mut b = repo.insert(NewCustomer::new("B", "b@x.com", 21)).await.unwrap();

        let err = repo.insert(NewCustomer::new("C", "a@x.com", 22)).await.unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));

        b.email = "a@x.com".into();
        let err = repo.update(&b).await.unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));
        assert_eq!(repo.find_by_id(b.id).await.unwrap().unwrap().email, "b@x.com");
    }

    #[tokio::test]
    async fn delete_of_absent_id_is_a_no_op() {
        let repo = InMemoryCustomerRepository::default();
        repo.insert(NewCustomer::new("A", "a@x.com", 20)).await.unwrap();
        repo.delete_by_id(42).await.unwrap();
        assert_eq!(repo.list_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn concurrent_inserts_with_same_email_store_one_record() {
        let repo = std::sync::Arc::new(InMemoryCustomerRepository::default());
        let mut handles = Vec::new();
        for i in 0..16 {
            let repo = repo.clone();
            handles.push(tokio::spawn(async move {
                repo.insert(NewCustomer::new(format!("N{i}"), "same@x.com", i)).await
            }));
        }
        let mut ok = 0;
        for h in handles {
            if h.await.unwrap().is_ok() {
                ok += 1;
            }
        }
        assert_eq!(ok, 1);
        assert_eq!(repo.list_all().await.unwrap().len(), 1);
    }
}
