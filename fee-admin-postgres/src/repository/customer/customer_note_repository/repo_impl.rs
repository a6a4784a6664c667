use async_trait::async_trait;
use fee_admin_db::models::customer::{CustomerNoteModel, NewCustomerNote};
use fee_admin_db::repository::customer_note_repository::CustomerNoteRepository;
use fee_admin_db::repository::error::RepoResult;
use fee_admin_db::repository::pagination::{Page, PageRequest};
use sqlx::{postgres::PgRow, Row};

use crate::executor::Executor;
use crate::utils::{get_heapless_string, get_tombstone, TryFromRow};

pub(super) const TABLE: &str = "customer_notes";

pub(super) const COLUMNS: &str = "id, customer_id, note, created_at, updated_at, deleted_at, deleted_by";

pub struct CustomerNoteRepositoryImpl {
    pub executor: Executor,
}

impl CustomerNoteRepositoryImpl {
    pub fn new(executor: Executor) -> Self {
        Self { executor }
    }
}

#[async_trait]
impl CustomerNoteRepository for CustomerNoteRepositoryImpl {
    async fn create(&self, item: NewCustomerNote) -> RepoResult<CustomerNoteModel> {
        Self::create_impl(self, item).await
    }

    async fn update(&self, item: &CustomerNoteModel) -> RepoResult<CustomerNoteModel> {
        Self::update_impl(self, item).await
    }

    async fn find_for_customer(&self, customer_id: &str, note_id: i64) -> RepoResult<Option<CustomerNoteModel>> {
        Self::find_for_customer_impl(self, customer_id, note_id).await
    }

    async fn list_for_customer(&self, customer_id: &str, page: PageRequest) -> RepoResult<Page<CustomerNoteModel>> {
        Self::list_for_customer_impl(self, customer_id, page).await
    }
}

impl TryFromRow<PgRow> for CustomerNoteModel {
    fn try_from_row(row: &PgRow) -> RepoResult<Self> {
        Ok(CustomerNoteModel {
            id: row.try_get("id")?,
            customer_id: get_heapless_string(row, TABLE, "customer_id")?,
            note: row.try_get("note")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
            tombstone: get_tombstone(row, TABLE)?,
        })
    }
}
