use async_trait::async_trait;
use fee_admin_db::models::customer::CustomerModel;
use fee_admin_db::repository::error::{RepoResult, RepositoryError};
use fee_admin_db::repository::find_by_id::FindById;

use super::repo_impl::{CustomerRepositoryImpl, COLUMNS};
use crate::utils::{active, TryFromRow};

impl CustomerRepositoryImpl {
    pub(super) async fn find_by_id_impl(
        repo: &CustomerRepositoryImpl,
        id: &str,
    ) -> RepoResult<Option<CustomerModel>> {
        let query = format!("SELECT {COLUMNS} FROM customers c WHERE c.id = $1 AND {}", active("c"));

        let row = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or(RepositoryError::SessionClosed)?;
            sqlx::query(&query).bind(id).fetch_optional(&mut **transaction).await?
        };

        row.as_ref().map(CustomerModel::try_from_row).transpose()
    }
}

#[async_trait]
impl FindById<CustomerModel> for CustomerRepositoryImpl {
    async fn find_by_id(&self, id: &str) -> RepoResult<Option<CustomerModel>> {
        Self::find_by_id_impl(self, id).await
    }
}
