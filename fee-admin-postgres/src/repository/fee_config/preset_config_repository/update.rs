use fee_admin_db::models::fee_config::PresetConfigModel;
use fee_admin_db::repository::error::{RepoResult, RepositoryError};
use sqlx::types::Json;

use super::repo_impl::{PresetConfigRepositoryImpl, COLUMNS};
use crate::utils::{active, map_write_error, TryFromRow};

impl PresetConfigRepositoryImpl {
    pub(super) async fn update_impl(
        repo: &PresetConfigRepositoryImpl,
        item: &PresetConfigModel,
    ) -> RepoResult<PresetConfigModel> {
        let query = format!(
            r#"
            UPDATE preset_configs p
            SET name = $2, config = $3, updated_at = now()
            WHERE p.id = $1 AND {}
            RETURNING {COLUMNS}
            "#,
            active("p")
        );

        let row = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or(RepositoryError::SessionClosed)?;
            sqlx::query(&query)
                .bind(item.id)
                .bind(item.name.as_str())
                .bind(Json(item.config))
                .fetch_one(&mut **transaction)
                .await
                .map_err(map_write_error)?
        };

        PresetConfigModel::try_from_row(&row)
    }
}
