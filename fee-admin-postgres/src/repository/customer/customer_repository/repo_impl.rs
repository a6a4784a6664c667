use async_trait::async_trait;
use fee_admin_db::models::customer::{CustomerModel, NewCustomer};
use fee_admin_db::repository::customer_repository::CustomerRepository;
use fee_admin_db::repository::error::RepoResult;
use fee_admin_db::repository::pagination::{Page, PageRequest};
use sqlx::{postgres::PgRow, Row};

use crate::executor::Executor;
use crate::utils::{get_heapless_string, get_optional_heapless_string, get_tombstone, TryFromRow};

pub(super) const TABLE: &str = "customers";

pub(super) const COLUMNS: &str =
    "id, name, email, phone, address, date_of_birth, created_at, updated_at, deleted_at, deleted_by";

pub struct CustomerRepositoryImpl {
    pub executor: Executor,
}

impl CustomerRepositoryImpl {
    pub fn new(executor: Executor) -> Self {
        Self { executor }
    }
}

#[async_trait]
impl CustomerRepository for CustomerRepositoryImpl {
    async fn create(&self, item: NewCustomer) -> RepoResult<CustomerModel> {
        Self::create_impl(self, item).await
    }

    async fn update(&self, item: &CustomerModel) -> RepoResult<CustomerModel> {
        Self::update_impl(self, item).await
    }

    async fn search(&self, search: Option<&str>, page: PageRequest) -> RepoResult<Page<CustomerModel>> {
        Self::search_impl(self, search, page).await
    }
}

impl TryFromRow<PgRow> for CustomerModel {
    fn try_from_row(row: &PgRow) -> RepoResult<Self> {
        Ok(CustomerModel {
            id: get_heapless_string(row, TABLE, "id")?,
            name: get_heapless_string(row, TABLE, "name")?,
            email: get_heapless_string(row, TABLE, "email")?,
            phone: get_optional_heapless_string(row, TABLE, "phone")?,
            address: row.try_get("address")?,
            date_of_birth: row.try_get("date_of_birth")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
            tombstone: get_tombstone(row, TABLE)?,
        })
    }
}
