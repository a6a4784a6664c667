use async_trait::async_trait;
use fee_admin_db::models::fee_config::CustomConfigModel;
use fee_admin_db::repository::error::{RepoResult, RepositoryError};
use fee_admin_db::repository::find_by_id::FindById;

use super::repo_impl::{CustomConfigRepositoryImpl, COLUMNS};
use crate::utils::{active, TryFromRow};

impl CustomConfigRepositoryImpl {
    pub(super) async fn find_by_id_impl(
        repo: &CustomConfigRepositoryImpl,
        id: i64,
    ) -> RepoResult<Option<CustomConfigModel>> {
        let query = format!("SELECT {COLUMNS} FROM custom_configs cc WHERE cc.id = $1 AND {}", active("cc"));

        let row = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or(RepositoryError::SessionClosed)?;
            sqlx::query(&query).bind(id).fetch_optional(&mut **transaction).await?
        };

        row.as_ref().map(CustomConfigModel::try_from_row).transpose()
    }
}

#[async_trait]
impl FindById<CustomConfigModel> for CustomConfigRepositoryImpl {
    async fn find_by_id(&self, id: &i64) -> RepoResult<Option<CustomConfigModel>> {
        Self::find_by_id_impl(self, *id).await
    }
}
