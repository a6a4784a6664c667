pub mod schema_repository;

pub use schema_repository::SchemaRepositoryImpl;
