use fee_admin_db::models::fee_config::ConfigMatrixModel;
use fee_admin_db::repository::error::{RepoResult, RepositoryError};

use super::repo_impl::{ConfigMatrixRepositoryImpl, COLUMNS};
use crate::utils::{active, TryFromRow};

impl ConfigMatrixRepositoryImpl {
    pub(super) async fn update_impl(
        repo: &ConfigMatrixRepositoryImpl,
        item: &ConfigMatrixModel,
    ) -> RepoResult<ConfigMatrixModel> {
        let query = format!(
            r#"
            UPDATE customer_config_matrix m
            SET preset_config_id = $2, custom_config_id = $3, effective_from = $4, updated_at = now()
            WHERE m.id = $1 AND {}
            RETURNING {COLUMNS}
            "#,
            active("m")
        );

        let row = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or(RepositoryError::SessionClosed)?;
            sqlx::query(&query)
                .bind(item.id)
                .bind(item.source.preset_config_id())
                .bind(item.source.custom_config_id())
                .bind(item.effective_from)
                .fetch_one(&mut **transaction)
                .await?
        };

        ConfigMatrixModel::try_from_row(&row)
    }
}

#[cfg(test)]
mod tests {
    use fee_admin_api::FeeConfig;
    use fee_admin_db::models::fee_config::ConfigSource;
    use fee_admin_db::repository::config_matrix_repository::ConfigMatrixRepository;
    use fee_admin_db::repository::custom_config_repository::CustomConfigRepository;
    use fee_admin_db::repository::customer_repository::CustomerRepository;
    use fee_admin_db::repository::preset_config_repository::PresetConfigRepository;
    use fee_admin_db::repository::session::Session;
    use serial_test::serial;

    use super::super::test_utils::test_utils::create_test_entry;
    use crate::repository::customer::customer_repository::test_utils::test_utils::create_test_customer;
    use crate::repository::fee_config::preset_config_repository::test_utils::test_utils::create_test_preset;
    use crate::test_helper::setup_test_context;

    #[tokio::test]
    #[ignore = "requires PostgreSQL at DATABASE_URL"]
    #[serial]
    async fn test_switch_from_preset_to_custom() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let session = ctx.session();

        let customer = session.customers().create(create_test_customer("Ann")).await?;
        let preset = session.preset_configs().create(create_test_preset("Gold")).await?;
        let mut entry = session
            .config_matrix()
            .create(create_test_entry(&customer, ConfigSource::Preset(preset.id), "2024-01-01"))
            .await?;

        let custom = session.custom_configs().create(FeeConfig::default()).await?;
        entry.source = ConfigSource::Custom(custom.id);
        let updated = session.config_matrix().update(&entry).await?;

        assert_eq!(updated.source, ConfigSource::Custom(custom.id));
        assert_eq!(updated.source.preset_config_id(), None);

        Ok(())
    }
}
