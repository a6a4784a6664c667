use async_trait::async_trait;
use fee_admin_db::models::fee_config::ConfigMatrixModel;
use fee_admin_db::repository::error::{RepoResult, RepositoryError};
use fee_admin_db::repository::find_by_id::FindById;

use super::repo_impl::{ConfigMatrixRepositoryImpl, COLUMNS};
use crate::utils::{active, TryFromRow};

impl ConfigMatrixRepositoryImpl {
    pub(super) async fn find_by_id_impl(
        repo: &ConfigMatrixRepositoryImpl,
        id: i64,
    ) -> RepoResult<Option<ConfigMatrixModel>> {
        let query = format!(
            "SELECT {COLUMNS} FROM customer_config_matrix m WHERE m.id = $1 AND {}",
            active("m")
        );

        let row = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or(RepositoryError::SessionClosed)?;
            sqlx::query(&query).bind(id).fetch_optional(&mut **transaction).await?
        };

        row.as_ref().map(ConfigMatrixModel::try_from_row).transpose()
    }
}

#[async_trait]
impl FindById<ConfigMatrixModel> for ConfigMatrixRepositoryImpl {
    async fn find_by_id(&self, id: &i64) -> RepoResult<Option<ConfigMatrixModel>> {
        Self::find_by_id_impl(self, *id).await
    }
}
