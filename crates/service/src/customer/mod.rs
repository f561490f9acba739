//! Customer module: three-layer architecture (domain, repository, service).

pub mod domain;
pub mod repository;
pub mod repo;
pub mod service;

pub use domain::{Customer, CustomerUpdate, NewCustomer};
pub use repo::memory::InMemoryCustomerRepository;
pub use repo::seaorm::SeaOrmCustomerRepository;
pub use repository::{build_repository, CustomerRepository};
pub use service::CustomerService;
