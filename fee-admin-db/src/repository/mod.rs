pub mod config_matrix_repository;
pub mod custom_config_repository;
pub mod customer_note_repository;
pub mod customer_repository;
pub mod error;
pub mod find_by_id;
pub mod pagination;
pub mod preset_config_repository;
pub mod schema_repository;
pub mod session;
pub mod soft_delete;

// Re-exports
pub use config_matrix_repository::*;
pub use custom_config_repository::*;
pub use customer_note_repository::*;
pub use customer_repository::*;
pub use error::*;
pub use find_by_id::*;
pub use pagination::*;
pub use preset_config_repository::*;
pub use schema_repository::*;
pub use session::*;
pub use soft_delete::*;
