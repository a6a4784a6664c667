use fee_admin_api::FeeConfig;
use fee_admin_db::models::fee_config::CustomConfigModel;
use fee_admin_db::repository::error::{RepoResult, RepositoryError};
use sqlx::types::Json;

use super::repo_impl::{CustomConfigRepositoryImpl, COLUMNS};
use crate::utils::TryFromRow;

impl CustomConfigRepositoryImpl {
    pub(super) async fn create_impl(
        repo: &CustomConfigRepositoryImpl,
        config: FeeConfig,
    ) -> RepoResult<CustomConfigModel> {
        let query = format!("INSERT INTO custom_configs (config) VALUES ($1) RETURNING {COLUMNS}");

        let row = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or(RepositoryError::SessionClosed)?;
            sqlx::query(&query)
                .bind(Json(config))
                .fetch_one(&mut **transaction)
                .await?
        };

        CustomConfigModel::try_from_row(&row)
    }
}

#[cfg(test)]
mod tests {
    use fee_admin_api::{FeeConfig, PerOrderConfig};
    use fee_admin_db::repository::custom_config_repository::CustomConfigRepository;
    use fee_admin_db::repository::find_by_id::FindById;
    use fee_admin_db::repository::session::Session;
    use serial_test::serial;

    use crate::test_helper::setup_test_context;

    #[tokio::test]
    #[ignore = "requires PostgreSQL at DATABASE_URL"]
    #[serial]
    async fn test_create_and_find() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let repo = ctx.session().custom_configs();

        let config = FeeConfig {
            per_order: PerOrderConfig {
                fee_cents: 25,
                quantity_threshold: 10,
            },
            ..FeeConfig::default()
        };
        let saved = repo.create(config).await?;
        let found = repo.find_by_id(&saved.id).await?;

        assert_eq!(found.map(|c| c.config), Some(config));

        Ok(())
    }
}
