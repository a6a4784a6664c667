use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use fee_admin_api::{
    ConfigMatrixCreate, ConfigMatrixListQuery, ConfigMatrixListResponse, ConfigMatrixOut, ConfigMatrixUpdate,
};
use fee_admin_db::repository::session::UnitOfWork;

use crate::http::error::Problem;
use crate::http::extract::{ApiJson, ApiPath, ApiQuery};
use crate::service::FeeAdminService;

pub async fn list_config_matrix<U: UnitOfWork>(
    State(service): State<Arc<FeeAdminService<U>>>,
    ApiQuery(query): ApiQuery<ConfigMatrixListQuery>,
) -> Result<Json<ConfigMatrixListResponse>, Problem> {
    Ok(Json(service.list_config_matrix(&query).await?))
}

pub async fn get_config_matrix<U: UnitOfWork>(
    State(service): State<Arc<FeeAdminService<U>>>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<ConfigMatrixOut>, Problem> {
    Ok(Json(service.get_config_matrix(id).await?))
}

pub async fn create_config_matrix<U: UnitOfWork>(
    State(service): State<Arc<FeeAdminService<U>>>,
    ApiJson(body): ApiJson<ConfigMatrixCreate>,
) -> Result<(StatusCode, Json<ConfigMatrixOut>), Problem> {
    let entry = service.create_config_matrix(body).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

pub async fn update_config_matrix<U: UnitOfWork>(
    State(service): State<Arc<FeeAdminService<U>>>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(body): ApiJson<ConfigMatrixUpdate>,
) -> Result<Json<ConfigMatrixOut>, Problem> {
    Ok(Json(service.update_config_matrix(id, body).await?))
}

pub async fn delete_config_matrix<U: UnitOfWork>(
    State(service): State<Arc<FeeAdminService<U>>>,
    ApiPath(id): ApiPath<i64>,
) -> Result<StatusCode, Problem> {
    service.delete_config_matrix(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
