use async_trait::async_trait;
use fee_admin_api::FeeConfig;
use fee_admin_db::models::fee_config::CustomConfigModel;
use fee_admin_db::repository::custom_config_repository::CustomConfigRepository;
use fee_admin_db::repository::error::RepoResult;
use sqlx::{postgres::PgRow, Row};

use crate::executor::Executor;
use crate::utils::{get_fee_config, get_tombstone, TryFromRow};

pub(super) const TABLE: &str = "custom_configs";

pub(super) const COLUMNS: &str = "id, config, created_at, updated_at, deleted_at, deleted_by";

pub struct CustomConfigRepositoryImpl {
    pub executor: Executor,
}

impl CustomConfigRepositoryImpl {
    pub fn new(executor: Executor) -> Self {
        Self { executor }
    }
}

#[async_trait]
impl CustomConfigRepository for CustomConfigRepositoryImpl {
    async fn create(&self, config: FeeConfig) -> RepoResult<CustomConfigModel> {
        Self::create_impl(self, config).await
    }

    async fn update_config(&self, id: i64, config: FeeConfig) -> RepoResult<CustomConfigModel> {
        Self::update_config_impl(self, id, config).await
    }
}

impl TryFromRow<PgRow> for CustomConfigModel {
    fn try_from_row(row: &PgRow) -> RepoResult<Self> {
        Ok(CustomConfigModel {
            id: row.try_get("id")?,
            config: get_fee_config(row, "config")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
            tombstone: get_tombstone(row, TABLE)?,
        })
    }
}
