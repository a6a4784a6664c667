//! HTTP administration service for customer fee configurations.

pub mod config;
pub mod http;
pub mod service;
pub mod telemetry;

pub use config::{Config, ConfigError};
pub use http::{router, Problem};
pub use service::FeeAdminService;
