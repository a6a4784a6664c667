use async_trait::async_trait;

use super::error::RepoResult;
use super::find_by_id::FindById;
use super::pagination::{Page, PageRequest};
use super::soft_delete::SoftDelete;
use crate::models::customer::{CustomerNoteModel, NewCustomerNote};

/// Storage operations for customer notes
#[async_trait]
pub trait CustomerNoteRepository: FindById<CustomerNoteModel> + SoftDelete<CustomerNoteModel> {
    async fn create(&self, item: NewCustomerNote) -> RepoResult<CustomerNoteModel>;

    /// Persist the note text and bump `updated_at`
    async fn update(&self, item: &CustomerNoteModel) -> RepoResult<CustomerNoteModel>;

    /// Active note `note_id` if it belongs to `customer_id`
    async fn find_for_customer(&self, customer_id: &str, note_id: i64) -> RepoResult<Option<CustomerNoteModel>>;

    /// Active notes of a customer, newest first
    async fn list_for_customer(&self, customer_id: &str, page: PageRequest) -> RepoResult<Page<CustomerNoteModel>>;
}
