use fee_admin_db::models::fee_config::{ConfigMatrixModel, NewConfigMatrix};
use fee_admin_db::repository::error::{RepoResult, RepositoryError};

use super::repo_impl::{ConfigMatrixRepositoryImpl, COLUMNS};
use crate::utils::TryFromRow;

impl ConfigMatrixRepositoryImpl {
    pub(super) async fn create_impl(
        repo: &ConfigMatrixRepositoryImpl,
        item: NewConfigMatrix,
    ) -> RepoResult<ConfigMatrixModel> {
        let query = format!(
            r#"
            INSERT INTO customer_config_matrix (customer_id, preset_config_id, custom_config_id, effective_from)
            VALUES ($1, $2, $3, $4)
            RETURNING {COLUMNS}
            "#
        );

        let row = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or(RepositoryError::SessionClosed)?;
            sqlx::query(&query)
                .bind(item.customer_id.as_str())
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
    use fee_admin_db::models::fee_config::ConfigSource;
    use fee_admin_db::repository::config_matrix_repository::ConfigMatrixRepository;
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
    async fn test_create_keeps_single_source() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let session = ctx.session();

        let customer = session.customers().create(create_test_customer("Ann")).await?;
        let preset = session.preset_configs().create(create_test_preset("Gold")).await?;

        let entry = session
            .config_matrix()
            .create(create_test_entry(&customer, ConfigSource::Preset(preset.id), "2024-01-01"))
            .await?;

        assert_eq!(entry.source, ConfigSource::Preset(preset.id));
        assert_eq!(entry.customer_id, customer.id);

        Ok(())
    }
}
