use fee_admin_api::FeeConfig;
use fee_admin_db::models::fee_config::CustomConfigModel;
use fee_admin_db::repository::error::{RepoResult, RepositoryError};
use sqlx::types::Json;

use super::repo_impl::{CustomConfigRepositoryImpl, COLUMNS};
use crate::utils::{active, TryFromRow};

impl CustomConfigRepositoryImpl {
    pub(super) async fn update_config_impl(
        repo: &CustomConfigRepositoryImpl,
        id: i64,
        config: FeeConfig,
    ) -> RepoResult<CustomConfigModel> {
        let query = format!(
            "UPDATE custom_configs cc SET config = $2, updated_at = now() \
             WHERE cc.id = $1 AND {} RETURNING {COLUMNS}",
            active("cc")
        );

        let row = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or(RepositoryError::SessionClosed)?;
            sqlx::query(&query)
                .bind(id)
                .bind(Json(config))
                .fetch_one(&mut **transaction)
                .await?
        };

        CustomConfigModel::try_from_row(&row)
    }
}
