use async_trait::async_trait;

use super::error::RepoResult;
use super::find_by_id::FindById;
use super::pagination::{Page, PageRequest};
use super::soft_delete::SoftDelete;
use crate::models::customer::{CustomerModel, NewCustomer};

/// Storage operations for customers
#[async_trait]
pub trait CustomerRepository: FindById<CustomerModel> + SoftDelete<CustomerModel> {
    /// Insert a customer; a duplicate id fails with `UniqueViolation`
    async fn create(&self, item: NewCustomer) -> RepoResult<CustomerModel>;

    /// Persist the mutable columns of an active customer and bump `updated_at`
    async fn update(&self, item: &CustomerModel) -> RepoResult<CustomerModel>;

    /// Active customers whose name or email contains `search` (case-insensitive),
    /// newest first
    async fn search(&self, search: Option<&str>, page: PageRequest) -> RepoResult<Page<CustomerModel>>;
}
