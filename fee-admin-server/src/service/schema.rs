use fee_admin_api::{ApiResult, SchemaResponse, SCHEMA_SAMPLE_ROWS};
use fee_admin_db::repository::session::{Session, UnitOfWork};
use tracing::debug;

use super::FeeAdminService;

impl<U: UnitOfWork> FeeAdminService<U> {
    /// Describe every table of the store, with sample rows
    pub async fn describe_schema(&self) -> ApiResult<SchemaResponse> {
        let session = self.uow.begin().await?;
        let tables = session.schema().describe_tables(SCHEMA_SAMPLE_ROWS).await?;
        session.commit().await?;

        let response = SchemaResponse::from_tables(tables);
        debug!(tables = response.total_tables, rows = response.total_rows, "schema described");
        Ok(response)
    }
}
