pub mod config_matrix;
pub mod custom_config;
pub mod preset_config;

pub use config_matrix::*;
pub use custom_config::*;
pub use preset_config::*;
