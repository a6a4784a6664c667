use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use fee_admin_db::repository::session::UnitOfWork;
use serde::Serialize;
use tracing::warn;

use crate::http::error::Problem;
use crate::service::FeeAdminService;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Liveness plus a round-trip to the store; 503 when the store cannot be reached
pub async fn health<U: UnitOfWork>(
    State(service): State<Arc<FeeAdminService<U>>>,
) -> Result<Json<HealthResponse>, Problem> {
    if let Err(err) = service.ping().await {
        warn!(error = %err, "health check failed");
        return Err(Problem::new(StatusCode::SERVICE_UNAVAILABLE, "Service Unavailable")
            .with_detail("Database is unreachable"));
    }
    Ok(Json(HealthResponse { status: "ok" }))
}
