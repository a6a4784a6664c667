use async_trait::async_trait;
use fee_admin_db::models::fee_config::PresetConfigModel;
use fee_admin_db::repository::error::{RepoResult, RepositoryError};
use fee_admin_db::repository::soft_delete::SoftDelete;

use super::repo_impl::{PresetConfigRepositoryImpl, TABLE};
use crate::utils::soft_delete_sql;

impl PresetConfigRepositoryImpl {
    pub(super) async fn soft_delete_impl(
        repo: &PresetConfigRepositoryImpl,
        id: i64,
        actor: &str,
    ) -> RepoResult<bool> {
        let query = soft_delete_sql(TABLE);

        let result = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or(RepositoryError::SessionClosed)?;
            sqlx::query(&query).bind(id).bind(actor).execute(&mut **transaction).await?
        };

        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl SoftDelete<PresetConfigModel> for PresetConfigRepositoryImpl {
    async fn soft_delete(&self, id: &i64, actor: &str) -> RepoResult<bool> {
        Self::soft_delete_impl(self, *id, actor).await
    }
}
