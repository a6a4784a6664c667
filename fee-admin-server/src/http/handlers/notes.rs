use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use fee_admin_api::{NoteCreate, NoteListQuery, NoteListResponse, NoteOut, NoteUpdate};
use fee_admin_db::repository::session::UnitOfWork;

use crate::http::error::Problem;
use crate::http::extract::{ApiJson, ApiPath, ApiQuery};
use crate::service::FeeAdminService;

pub async fn list_notes<U: UnitOfWork>(
    State(service): State<Arc<FeeAdminService<U>>>,
    ApiPath(customer_id): ApiPath<String>,
    ApiQuery(query): ApiQuery<NoteListQuery>,
) -> Result<Json<NoteListResponse>, Problem> {
    Ok(Json(service.list_notes(&customer_id, &query).await?))
}

pub async fn create_note<U: UnitOfWork>(
    State(service): State<Arc<FeeAdminService<U>>>,
    ApiPath(customer_id): ApiPath<String>,
    ApiJson(body): ApiJson<NoteCreate>,
) -> Result<(StatusCode, Json<NoteOut>), Problem> {
    let note = service.create_note(&customer_id, body).await?;
    Ok((StatusCode::CREATED, Json(note)))
}

pub async fn update_note<U: UnitOfWork>(
    State(service): State<Arc<FeeAdminService<U>>>,
    ApiPath((customer_id, note_id)): ApiPath<(String, i64)>,
    ApiJson(body): ApiJson<NoteUpdate>,
) -> Result<Json<NoteOut>, Problem> {
    Ok(Json(service.update_note(&customer_id, note_id, body).await?))
}

pub async fn delete_note<U: UnitOfWork>(
    State(service): State<Arc<FeeAdminService<U>>>,
    ApiPath((customer_id, note_id)): ApiPath<(String, i64)>,
) -> Result<StatusCode, Problem> {
    service.delete_note(&customer_id, note_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
