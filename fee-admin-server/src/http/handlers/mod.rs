//! Thin handlers that delegate to [`FeeAdminService`](crate::service::FeeAdminService)

pub mod config_matrix;
pub mod customers;
pub mod health;
pub mod notes;
pub mod preset_configs;
pub mod schema;
