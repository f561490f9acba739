//! Persistence models (SeaORM entities) and row-level helpers.

pub mod errors;
pub mod db;
pub mod customer;
