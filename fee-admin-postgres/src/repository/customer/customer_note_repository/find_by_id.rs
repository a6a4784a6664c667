use async_trait::async_trait;
use fee_admin_db::models::customer::CustomerNoteModel;
use fee_admin_db::repository::error::{RepoResult, RepositoryError};
use fee_admin_db::repository::find_by_id::FindById;

use super::repo_impl::{CustomerNoteRepositoryImpl, COLUMNS};
use crate::utils::{active, TryFromRow};

impl CustomerNoteRepositoryImpl {
    pub(super) async fn find_by_id_impl(
        repo: &CustomerNoteRepositoryImpl,
        id: i64,
    ) -> RepoResult<Option<CustomerNoteModel>> {
        let query = format!("SELECT {COLUMNS} FROM customer_notes n WHERE n.id = $1 AND {}", active("n"));

        let row = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or(RepositoryError::SessionClosed)?;
            sqlx::query(&query).bind(id).fetch_optional(&mut **transaction).await?
        };

        row.as_ref().map(CustomerNoteModel::try_from_row).transpose()
    }
}

#[async_trait]
impl FindById<CustomerNoteModel> for CustomerNoteRepositoryImpl {
    async fn find_by_id(&self, id: &i64) -> RepoResult<Option<CustomerNoteModel>> {
        Self::find_by_id_impl(self, *id).await
    }
}
