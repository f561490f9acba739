//! Development seeding: registers one random customer at startup.

use fake::faker::name::raw::{FirstName, LastName};
use fake::locales::EN;
use fake::Fake;
use rand::Rng;
use tracing::{info, warn};

use service::customer::{Customer, NewCustomer};
use service::errors::ServiceError;

use crate::state::DynCustomerService;

fn email_part(s: &str) -> String {
    s.chars().filter(char::is_ascii_alphanumeric).map(|c| c.to_ascii_lowercase()).collect()
}

pub fn random_customer<R: Rng + ?Sized>(rng: &mut R) -> NewCustomer {
    let first: String = FirstName(EN).fake_with_rng(rng);
    let last: String = LastName(EN).fake_with_rng(rng);
    let email = format!("{}.{}@example.com", email_part(&first), email_part(&last));
    NewCustomer::new(format!("{first} {last}"), email, rng.random_range(16..99))
}

/// Register a random customer. An email collision with an earlier seed is not an error.
pub async fn seed_random_customer<R: Rng + ?Sized>(
    svc: &DynCustomerService,
    rng: &mut R,
) -> Result<Option<Customer>, ServiceError> {
    let candidate = random_customer(rng);
    match svc.register(candidate).await {
        Ok(created) => {
            info!(customer_id = created.id, email = %created.email, "seeded_customer");
            Ok(Some(created))
        }
        Err(ServiceError::Conflict(_)) => {
            warn!("seed customer already present; skipping");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;
    use rand::{rngs::StdRng, SeedableRng};
    use service::customer::InMemoryCustomerRepository;
    use std::sync::Arc;

    #[test]
    fn random_customer_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let c = random_customer(&mut rng);
            assert!((16..99).contains(&c.age));
            assert!(!c.name.trim().is_empty());
            let local = c.email.strip_suffix("@example.com").unwrap();
            let (first, last) = local.split_once('.').unwrap();
            assert!(!first.is_empty() && !last.is_empty());
            assert!(local.chars().all(|ch| ch == '.' || ch.is_ascii_lowercase() || ch.is_ascii_digit()));
        }
    }

    #[test]
    fn email_part_drops_punctuation() {
        assert_eq!(email_part("O'Connor"), "oconnor");
        assert_eq!(email_part("Mary Ann"), "maryann");
    }

    #[tokio::test]
    async fn seeding_registers_through_the_service() {
        let state = AppState::new(Arc::new(InMemoryCustomerRepository::default()));
        let mut rng = StdRng::seed_from_u64(1);
        let created = seed_random_customer(&state.customers, &mut rng).await.unwrap().unwrap();
        let all = state.customers.list().await.unwrap();
        assert_eq!(all, vec![created]);
    }

    #[tokio::test]
    async fn repeated_seed_with_same_email_is_skipped() {
        let state = AppState::new(Arc::new(InMemoryCustomerRepository::default()));
        let first = seed_random_customer(&state.customers, &mut StdRng::seed_from_u64(42)).await.unwrap();
        assert!(first.is_some());
        let second = seed_random_customer(&state.customers, &mut StdRng::seed_from_u64(42)).await.unwrap();
        assert!(second.is_none());
        assert_eq!(state.customers.list().await.unwrap().len(), 1);
    }
}
