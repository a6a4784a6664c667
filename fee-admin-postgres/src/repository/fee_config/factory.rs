use std::sync::Arc;

use super::{ConfigMatrixRepositoryImpl, CustomConfigRepositoryImpl, PresetConfigRepositoryImpl};
use crate::executor::Executor;

/// Container for the fee configuration repositories of one session
pub struct FeeConfigRepositories {
    pub preset_config_repository: Arc<PresetConfigRepositoryImpl>,
    pub custom_config_repository: Arc<CustomConfigRepositoryImpl>,
    pub config_matrix_repository: Arc<ConfigMatrixRepositoryImpl>,
}

impl FeeConfigRepositories {
    /// Build all fee configuration repositories on the given executor
    pub fn new(executor: &Executor) -> Self {
        Self {
            preset_config_repository: Arc::new(PresetConfigRepositoryImpl::new(executor.clone())),
            custom_config_repository: Arc::new(CustomConfigRepositoryImpl::new(executor.clone())),
            config_matrix_repository: Arc::new(ConfigMatrixRepositoryImpl::new(executor.clone())),
        }
    }
}
