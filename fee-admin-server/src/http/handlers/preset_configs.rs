use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use fee_admin_api::{
    PresetConfigCreate, PresetConfigListQuery, PresetConfigListResponse, PresetConfigOut, PresetConfigUpdate,
};
use fee_admin_db::repository::session::UnitOfWork;

use crate::http::error::Problem;
use crate::http::extract::{ApiJson, ApiPath, ApiQuery};
use crate::service::FeeAdminService;

pub async fn list_preset_configs<U: UnitOfWork>(
    State(service): State<Arc<FeeAdminService<U>>>,
    ApiQuery(query): ApiQuery<PresetConfigListQuery>,
) -> Result<Json<PresetConfigListResponse>, Problem> {
    Ok(Json(service.list_preset_configs(&query).await?))
}

pub async fn get_preset_config<U: UnitOfWork>(
    State(service): State<Arc<FeeAdminService<U>>>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<PresetConfigOut>, Problem> {
    Ok(Json(service.get_preset_config(id).await?))
}

pub async fn create_preset_config<U: UnitOfWork>(
    State(service): State<Arc<FeeAdminService<U>>>,
    ApiJson(body): ApiJson<PresetConfigCreate>,
) -> Result<(StatusCode, Json<PresetConfigOut>), Problem> {
    let preset = service.create_preset_config(body).await?;
    Ok((StatusCode::CREATED, Json(preset)))
}

pub async fn update_preset_config<U: UnitOfWork>(
    State(service): State<Arc<FeeAdminService<U>>>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(body): ApiJson<PresetConfigUpdate>,
) -> Result<Json<PresetConfigOut>, Problem> {
    Ok(Json(service.update_preset_config(id, body).await?))
}

/// 409 while any active config matrix entry still points at the preset
pub async fn delete_preset_config<U: UnitOfWork>(
    State(service): State<Arc<FeeAdminService<U>>>,
    ApiPath(id): ApiPath<i64>,
) -> Result<StatusCode, Problem> {
    service.delete_preset_config(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
