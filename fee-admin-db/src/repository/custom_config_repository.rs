use async_trait::async_trait;
use fee_admin_api::FeeConfig;

use super::error::RepoResult;
use super::find_by_id::FindById;
use crate::models::fee_config::CustomConfigModel;

/// Storage operations for custom configurations
#[async_trait]
pub trait CustomConfigRepository: FindById<CustomConfigModel> {
    async fn create(&self, config: FeeConfig) -> RepoResult<CustomConfigModel>;

    /// Overwrite the payload in place and bump `updated_at`
    async fn update_config(&self, id: i64, config: FeeConfig) -> RepoResult<CustomConfigModel>;
}
