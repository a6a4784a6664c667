use async_trait::async_trait;
use fee_admin_api::TableInfo;

use super::error::RepoResult;

/// Read-only reflection of the storage schema
#[async_trait]
pub trait SchemaRepository: Send + Sync {
    /// Describe every table with up to `sample_rows` sample rows each
    async fn describe_tables(&self, sample_rows: usize) -> RepoResult<Vec<TableInfo>>;
}
