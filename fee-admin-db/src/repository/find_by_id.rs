use async_trait::async_trait;

use super::error::RepoResult;
use crate::models::identifiable::Identifiable;
use crate::models::soft_delete::SoftDeletable;

/// Generic repository trait for finding active entities by their ID
///
/// Soft-deleted rows are never returned; a tombstoned entity is reported as `None`
/// exactly like a missing one.
///
/// # Example
/// ```ignore
/// #[async_trait]
/// impl FindById<CustomerModel> for CustomerRepositoryImpl {
///     async fn find_by_id(&self, id: &str) -> RepoResult<Option<CustomerModel>> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait FindById<T: Identifiable + SoftDeletable>: Send + Sync {
    /// Find an active entity by its unique identifier
    ///
    /// # Returns
    /// * `Ok(Some(T))` - The entity exists and is not soft-deleted
    /// * `Ok(None)` - The entity does not exist or is soft-deleted
    /// * `Err` - The query could not be executed
    async fn find_by_id(&self, id: &T::Id) -> RepoResult<Option<T>>;
}
