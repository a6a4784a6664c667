pub mod config_matrix;
pub mod customer;
pub mod customer_note;
pub mod fee_config;
pub mod pagination;
pub mod patch;
pub mod preset_config;
pub mod schema;

// Re-exports
pub use config_matrix::*;
pub use customer::*;
pub use customer_note::*;
pub use fee_config::*;
pub use pagination::*;
pub use patch::*;
pub use preset_config::*;
pub use schema::*;
