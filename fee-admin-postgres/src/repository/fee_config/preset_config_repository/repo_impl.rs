use async_trait::async_trait;
use fee_admin_db::models::fee_config::{NewPresetConfig, PresetConfigModel};
use fee_admin_db::repository::error::RepoResult;
use fee_admin_db::repository::pagination::{Page, PageRequest};
use fee_admin_db::repository::preset_config_repository::PresetConfigRepository;
use sqlx::{postgres::PgRow, Row};

use crate::executor::Executor;
use crate::utils::{get_fee_config, get_heapless_string, get_tombstone, TryFromRow};

pub(super) const TABLE: &str = "preset_configs";

pub(super) const COLUMNS: &str = "id, name, config, created_at, updated_at, deleted_at, deleted_by";

pub struct PresetConfigRepositoryImpl {
    pub executor: Executor,
}

impl PresetConfigRepositoryImpl {
    pub fn new(executor: Executor) -> Self {
        Self { executor }
    }
}

#[async_trait]
impl PresetConfigRepository for PresetConfigRepositoryImpl {
    async fn create(&self, item: NewPresetConfig) -> RepoResult<PresetConfigModel> {
        Self::create_impl(self, item).await
    }

    async fn update(&self, item: &PresetConfigModel) -> RepoResult<PresetConfigModel> {
        Self::update_impl(self, item).await
    }

    async fn search(&self, search: Option<&str>, page: PageRequest) -> RepoResult<Page<PresetConfigModel>> {
        Self::search_impl(self, search, page).await
    }
}

impl TryFromRow<PgRow> for PresetConfigModel {
    fn try_from_row(row: &PgRow) -> RepoResult<Self> {
        Ok(PresetConfigModel {
            id: row.try_get("id")?,
            name: get_heapless_string(row, TABLE, "name")?,
            config: get_fee_config(row, "config")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
            tombstone: get_tombstone(row, TABLE)?,
        })
    }
}
