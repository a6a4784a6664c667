use async_trait::async_trait;

use super::error::RepoResult;
use super::find_by_id::FindById;
use super::pagination::{Page, PageRequest};
use super::soft_delete::SoftDelete;
use crate::models::fee_config::{ConfigMatrixModel, ConfigMatrixView, NewConfigMatrix};

/// Storage operations for config matrix entries
#[async_trait]
pub trait ConfigMatrixRepository: FindById<ConfigMatrixModel> + SoftDelete<ConfigMatrixModel> {
    async fn create(&self, item: NewConfigMatrix) -> RepoResult<ConfigMatrixModel>;

    /// Persist source and effective date of an active entry and bump `updated_at`
    async fn update(&self, item: &ConfigMatrixModel) -> RepoResult<ConfigMatrixModel>;

    /// Active entry `id` with its customer name and resolved configuration
    async fn find_view(&self, id: i64) -> RepoResult<Option<ConfigMatrixView>>;

    /// Active entries, optionally for one customer, most recent `effective_from` first
    async fn list_views(&self, customer_id: Option<&str>, page: PageRequest) -> RepoResult<Page<ConfigMatrixView>>;

    /// Number of active entries bound to the preset
    async fn count_by_preset(&self, preset_config_id: i64) -> RepoResult<usize>;
}
