use fee_admin_db::models::fee_config::{NewPresetConfig, PresetConfigModel};
use fee_admin_db::repository::error::{RepoResult, RepositoryError};
use sqlx::types::Json;

use super::repo_impl::{PresetConfigRepositoryImpl, COLUMNS};
use crate::utils::{map_write_error, TryFromRow};

impl PresetConfigRepositoryImpl {
    pub(super) async fn create_impl(
        repo: &PresetConfigRepositoryImpl,
        item: NewPresetConfig,
    ) -> RepoResult<PresetConfigModel> {
        let query = format!(
            r#"
            INSERT INTO preset_configs (name, config)
            VALUES ($1, $2)
            RETURNING {COLUMNS}
            "#
        );

        let row = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or(RepositoryError::SessionClosed)?;
            sqlx::query(&query)
                .bind(item.name.as_str())
                .bind(Json(item.config))
                .fetch_one(&mut **transaction)
                .await
                .map_err(map_write_error)?
        };

        PresetConfigModel::try_from_row(&row)
    }
}
