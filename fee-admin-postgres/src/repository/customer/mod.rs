pub mod customer_note_repository;
pub mod customer_repository;
pub mod factory;

pub use customer_note_repository::CustomerNoteRepositoryImpl;
pub use customer_repository::CustomerRepositoryImpl;
pub use factory::CustomerRepositories;
