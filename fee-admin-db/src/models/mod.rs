pub mod customer;
pub mod fee_config;
pub mod identifiable;
pub mod soft_delete;

// Re-exports
pub use customer::*;
pub use fee_config::*;
pub use identifiable::*;
pub use soft_delete::*;
