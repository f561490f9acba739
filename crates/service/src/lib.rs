//! Customer domain service.
//! - `customer::repository` defines the storage contract and its two backends.
//! - `customer::service` owns the business rules (email uniqueness, existence
//!   checks, partial updates) and reports typed [`errors::ServiceError`]s.

pub mod errors;
pub mod customer;
#[cfg(test)]
pub mod test_support;
