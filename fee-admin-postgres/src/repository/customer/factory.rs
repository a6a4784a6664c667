use std::sync::Arc;

use super::{CustomerNoteRepositoryImpl, CustomerRepositoryImpl};
use crate::executor::Executor;

/// Container for the customer module repositories of one session
pub struct CustomerRepositories {
    pub customer_repository: Arc<CustomerRepositoryImpl>,
    pub customer_note_repository: Arc<CustomerNoteRepositoryImpl>,
}

impl CustomerRepositories {
    /// Build all customer repositories on the given executor
    pub fn new(executor: &Executor) -> Self {
        Self {
            customer_repository: Arc::new(CustomerRepositoryImpl::new(executor.clone())),
            customer_note_repository: Arc::new(CustomerNoteRepositoryImpl::new(executor.clone())),
        }
    }
}
