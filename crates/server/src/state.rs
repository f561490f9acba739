use std::sync::Arc;

use service::customer::{CustomerRepository, CustomerService};

/// The customer service wired to whichever backend was configured.
pub type DynCustomerService = CustomerService<dyn CustomerRepository>;

#[derive(Clone)]
pub struct AppState {
    pub customers: Arc<DynCustomerService>,
}

impl AppState {
    pub fn new(repo: Arc<dyn CustomerRepository>) -> Self {
        Self { customers: Arc::new(CustomerService::new(repo)) }
    }
}
