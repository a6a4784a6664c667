pub mod repo_impl;
pub mod create;
pub mod find_by_id;
pub mod update_config;

pub use repo_impl::CustomConfigRepositoryImpl;
