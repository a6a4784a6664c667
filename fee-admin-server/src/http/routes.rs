//! Route registration

use std::sync::Arc;

use axum::{routing::get, Router};
use fee_admin_db::repository::session::UnitOfWork;
use tower_http::trace::TraceLayer;

use super::error::Problem;
use super::handlers::{config_matrix, customers, health, notes, preset_configs, schema};
use crate::service::FeeAdminService;

/// Build the application router around a shared service
pub fn router<U: UnitOfWork>(service: Arc<FeeAdminService<U>>) -> Router {
    Router::new()
        // Customers and their notes
        .route(
            "/api/customers",
            get(customers::list_customers::<U>).post(customers::create_customer::<U>),
        )
        .route(
            "/api/customers/{id}",
            get(customers::get_customer::<U>)
                .patch(customers::update_customer::<U>)
                .delete(customers::delete_customer::<U>),
        )
        .route(
            "/api/customers/{id}/notes",
            get(notes::list_notes::<U>).post(notes::create_note::<U>),
        )
        .route(
            "/api/customers/{id}/notes/{note_id}",
            axum::routing::patch(notes::update_note::<U>).delete(notes::delete_note::<U>),
        )
        // Fee configurations
        .route(
            "/api/preset-configs",
            get(preset_configs::list_preset_configs::<U>).post(preset_configs::create_preset_config::<U>),
        )
        .route(
            "/api/preset-configs/{id}",
            get(preset_configs::get_preset_config::<U>)
                .patch(preset_configs::update_preset_config::<U>)
                .delete(preset_configs::delete_preset_config::<U>),
        )
        .route(
            "/api/config-matrix",
            get(config_matrix::list_config_matrix::<U>).post(config_matrix::create_config_matrix::<U>),
        )
        .route(
            "/api/config-matrix/{id}",
            get(config_matrix::get_config_matrix::<U>)
                .patch(config_matrix::update_config_matrix::<U>)
                .delete(config_matrix::delete_config_matrix::<U>),
        )
        // Diagnostics
        .route("/api/schema", get(schema::describe_schema::<U>))
        .route("/health", get(health::health::<U>))
        .fallback(fallback)
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}

async fn fallback() -> Problem {
    Problem::not_found("No route matches the requested path")
}
