use async_trait::async_trait;

use super::error::RepoResult;
use crate::models::identifiable::Identifiable;
use crate::models::soft_delete::SoftDeletable;

/// Generic repository trait for tombstoning entities
///
/// Sets `deleted_at` to the current time and `deleted_by` to `actor`.
/// Rows are never physically removed.
#[async_trait]
pub trait SoftDelete<T: Identifiable + SoftDeletable>: Send + Sync {
    /// Tombstone an active entity
    ///
    /// # Returns
    /// * `Ok(true)` - The entity was active and is now deleted
    /// * `Ok(false)` - No active entity with this id exists
    async fn soft_delete(&self, id: &T::Id, actor: &str) -> RepoResult<bool>;
}
