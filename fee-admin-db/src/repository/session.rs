use async_trait::async_trait;

use super::config_matrix_repository::ConfigMatrixRepository;
use super::custom_config_repository::CustomConfigRepository;
use super::customer_note_repository::CustomerNoteRepository;
use super::customer_repository::CustomerRepository;
use super::error::RepoResult;
use super::preset_config_repository::PresetConfigRepository;
use super::schema_repository::SchemaRepository;

/// Repositories sharing one transaction
///
/// Everything done through a session becomes visible atomically on [`Session::commit`].
/// Dropping a session without committing discards its work.
#[async_trait]
pub trait Session: Send + Sync + Sized {
    fn customers(&self) -> &dyn CustomerRepository;
    fn customer_notes(&self) -> &dyn CustomerNoteRepository;
    fn preset_configs(&self) -> &dyn PresetConfigRepository;
    fn custom_configs(&self) -> &dyn CustomConfigRepository;
    fn config_matrix(&self) -> &dyn ConfigMatrixRepository;
    fn schema(&self) -> &dyn SchemaRepository;

    async fn commit(self) -> RepoResult<()>;
}

/// Source of request-scoped sessions
#[async_trait]
pub trait UnitOfWork: Send + Sync + 'static {
    type Session: Session;

    /// Acquire a connection and open a transaction
    async fn begin(&self) -> RepoResult<Self::Session>;

    /// Round-trip to the store without opening a transaction
    async fn ping(&self) -> RepoResult<()>;
}
