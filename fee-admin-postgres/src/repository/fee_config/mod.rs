pub mod config_matrix_repository;
pub mod custom_config_repository;
pub mod factory;
pub mod preset_config_repository;

pub use config_matrix_repository::ConfigMatrixRepositoryImpl;
pub use custom_config_repository::CustomConfigRepositoryImpl;
pub use factory::FeeConfigRepositories;
pub use preset_config_repository::PresetConfigRepositoryImpl;
