use async_trait::async_trait;
use fee_admin_api::FeeConfig;
use fee_admin_db::models::fee_config::{
    ConfigMatrixModel, ConfigMatrixView, ConfigSource, LinkedCustom, LinkedPreset, NewConfigMatrix,
};
use fee_admin_db::repository::config_matrix_repository::ConfigMatrixRepository;
use fee_admin_db::repository::error::RepoResult;
use fee_admin_db::repository::pagination::{Page, PageRequest};
use sqlx::{postgres::PgRow, types::Json, Row};

use crate::executor::Executor;
use crate::utils::{active, get_heapless_string, get_tombstone, TryFromRow};

pub(super) const TABLE: &str = "customer_config_matrix";

pub(super) const COLUMNS: &str = "id, customer_id, preset_config_id, custom_config_id, effective_from, \
     created_at, updated_at, deleted_at, deleted_by";

/// Matrix entries joined with their customer and both possible configuration sources.
///
/// Joined rows are only taken from active records; the caller appends further
/// conditions after the `WHERE`.
pub(super) fn view_select() -> String {
    format!(
        r#"
        SELECT m.id, m.customer_id, m.preset_config_id, m.custom_config_id, m.effective_from,
               m.created_at, m.updated_at, m.deleted_at, m.deleted_by,
               c.name AS customer_name,
               p.id AS linked_preset_id, p.name AS linked_preset_name, p.config AS linked_preset_config,
               cc.id AS linked_custom_id, cc.config AS linked_custom_config
        FROM customer_config_matrix m
        LEFT JOIN customers c ON c.id = m.customer_id AND {}
        LEFT JOIN preset_configs p ON p.id = m.preset_config_id AND {}
        LEFT JOIN custom_configs cc ON cc.id = m.custom_config_id AND {}
        WHERE {}"#,
        active("c"),
        active("p"),
        active("cc"),
        active("m")
    )
}

pub struct ConfigMatrixRepositoryImpl {
    pub executor: Executor,
}

impl ConfigMatrixRepositoryImpl {
    pub fn new(executor: Executor) -> Self {
        Self { executor }
    }
}

#[async_trait]
impl ConfigMatrixRepository for ConfigMatrixRepositoryImpl {
    async fn create(&self, item: NewConfigMatrix) -> RepoResult<ConfigMatrixModel> {
        Self::create_impl(self, item).await
    }

    async fn update(&self, item: &ConfigMatrixModel) -> RepoResult<ConfigMatrixModel> {
        Self::update_impl(self, item).await
    }

    async fn find_view(&self, id: i64) -> RepoResult<Option<ConfigMatrixView>> {
        Self::find_view_impl(self, id).await
    }

    async fn list_views(&self, customer_id: Option<&str>, page: PageRequest) -> RepoResult<Page<ConfigMatrixView>> {
        Self::list_views_impl(self, customer_id, page).await
    }

    async fn count_by_preset(&self, preset_config_id: i64) -> RepoResult<usize> {
        Self::count_by_preset_impl(self, preset_config_id).await
    }
}

impl TryFromRow<PgRow> for ConfigMatrixModel {
    fn try_from_row(row: &PgRow) -> RepoResult<Self> {
        Ok(ConfigMatrixModel {
            id: row.try_get("id")?,
            customer_id: get_heapless_string(row, TABLE, "customer_id")?,
            source: ConfigSource::from_columns(
                row.try_get("preset_config_id")?,
                row.try_get("custom_config_id")?,
            )?,
            effective_from: row.try_get("effective_from")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
            tombstone: get_tombstone(row, TABLE)?,
        })
    }
}

impl TryFromRow<PgRow> for ConfigMatrixView {
    fn try_from_row(row: &PgRow) -> RepoResult<Self> {
        let entry = ConfigMatrixModel::try_from_row(row)?;
        let customer_name: Option<String> = row.try_get("customer_name")?;

        let preset_id: Option<i64> = row.try_get("linked_preset_id")?;
        let preset_name: Option<String> = row.try_get("linked_preset_name")?;
        let preset_config: Option<Json<FeeConfig>> = row.try_get("linked_preset_config")?;
        let preset = match (preset_id, preset_name, preset_config) {
            (Some(id), Some(name), Some(Json(config))) => Some(LinkedPreset { id, name, config }),
            _ => None,
        };

        let custom_id: Option<i64> = row.try_get("linked_custom_id")?;
        let custom_config: Option<Json<FeeConfig>> = row.try_get("linked_custom_config")?;
        let custom = match (custom_id, custom_config) {
            (Some(id), Some(Json(config))) => Some(LinkedCustom { id, config }),
            _ => None,
        };

        Ok(ConfigMatrixView::resolve(entry, customer_name, preset, custom))
    }
}
