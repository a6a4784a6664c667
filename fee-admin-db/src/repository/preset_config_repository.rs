use async_trait::async_trait;

use super::error::RepoResult;
use super::find_by_id::FindById;
use super::pagination::{Page, PageRequest};
use super::soft_delete::SoftDelete;
use crate::models::fee_config::{NewPresetConfig, PresetConfigModel};

/// Storage operations for preset configurations
#[async_trait]
pub trait PresetConfigRepository: FindById<PresetConfigModel> + SoftDelete<PresetConfigModel> {
    /// Insert a preset; a name already used by an active preset fails with `UniqueViolation`
    async fn create(&self, item: NewPresetConfig) -> RepoResult<PresetConfigModel>;

    /// Persist name and payload of an active preset and bump `updated_at`
    async fn update(&self, item: &PresetConfigModel) -> RepoResult<PresetConfigModel>;

    /// Active presets whose name contains `search` (case-insensitive), by name
    async fn search(&self, search: Option<&str>, page: PageRequest) -> RepoResult<Page<PresetConfigModel>>;
}
