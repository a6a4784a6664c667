pub mod repo_impl;
pub mod describe_tables;

pub use repo_impl::SchemaRepositoryImpl;
