use std::sync::Arc;

use axum::{extract::State, Json};
use fee_admin_api::SchemaResponse;
use fee_admin_db::repository::session::UnitOfWork;

use crate::http::error::Problem;
use crate::service::FeeAdminService;

pub async fn describe_schema<U: UnitOfWork>(
    State(service): State<Arc<FeeAdminService<U>>>,
) -> Result<Json<SchemaResponse>, Problem> {
    Ok(Json(service.describe_schema().await?))
}
