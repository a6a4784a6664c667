use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use fee_admin_api::{CustomerCreate, CustomerListQuery, CustomerListResponse, CustomerOut, CustomerUpdate};
use fee_admin_db::repository::session::UnitOfWork;

use crate::http::error::Problem;
use crate::http::extract::{ApiJson, ApiPath, ApiQuery};
use crate::service::FeeAdminService;

pub async fn list_customers<U: UnitOfWork>(
    State(service): State<Arc<FeeAdminService<U>>>,
    ApiQuery(query): ApiQuery<CustomerListQuery>,
) -> Result<Json<CustomerListResponse>, Problem> {
    Ok(Json(service.list_customers(&query).await?))
}

pub async fn get_customer<U: UnitOfWork>(
    State(service): State<Arc<FeeAdminService<U>>>,
    ApiPath(id): ApiPath<String>,
) -> Result<Json<CustomerOut>, Problem> {
    Ok(Json(service.get_customer(&id).await?))
}

pub async fn create_customer<U: UnitOfWork>(
    State(service): State<Arc<FeeAdminService<U>>>,
    ApiJson(body): ApiJson<CustomerCreate>,
) -> Result<(StatusCode, Json<CustomerOut>), Problem> {
    let customer = service.create_customer(body).await?;
    Ok((StatusCode::CREATED, Json(customer)))
}

pub async fn update_customer<U: UnitOfWork>(
    State(service): State<Arc<FeeAdminService<U>>>,
    ApiPath(id): ApiPath<String>,
    ApiJson(body): ApiJson<CustomerUpdate>,
) -> Result<Json<CustomerOut>, Problem> {
    Ok(Json(service.update_customer(&id, body).await?))
}

pub async fn delete_customer<U: UnitOfWork>(
    State(service): State<Arc<FeeAdminService<U>>>,
    ApiPath(id): ApiPath<String>,
) -> Result<StatusCode, Problem> {
    service.delete_customer(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
