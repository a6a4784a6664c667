use async_trait::async_trait;
use fee_admin_db::models::fee_config::PresetConfigModel;
use fee_admin_db::repository::error::{RepoResult, RepositoryError};
use fee_admin_db::repository::find_by_id::FindById;

use super::repo_impl::{PresetConfigRepositoryImpl, COLUMNS};
use crate::utils::{active, TryFromRow};

impl PresetConfigRepositoryImpl {
    pub(super) async fn find_by_id_impl(
        repo: &PresetConfigRepositoryImpl,
        id: i64,
    ) -> RepoResult<Option<PresetConfigModel>> {
        let query = format!("SELECT {COLUMNS} FROM preset_configs p WHERE p.id = $1 AND {}", active("p"));

        let row = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or(RepositoryError::SessionClosed)?;
            sqlx::query(&query).bind(id).fetch_optional(&mut **transaction).await?
        };

        row.as_ref().map(PresetConfigModel::try_from_row).transpose()
    }
}

#[async_trait]
impl FindById<PresetConfigModel> for PresetConfigRepositoryImpl {
    async fn find_by_id(&self, id: &i64) -> RepoResult<Option<PresetConfigModel>> {
        Self::find_by_id_impl(self, *id).await
    }
}
