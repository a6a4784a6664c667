use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::fee_config::FeeConfig;
use crate::error::{ApiError, ApiResult};

pub const PRESET_NAME_MAX_LEN: usize = 100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresetConfigOut {
    pub id: i64,
    pub name: String,
    pub config: FeeConfig,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PresetConfigCreate {
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    #[validate(nested)]
    pub config: FeeConfig,
}

/// Body of `PATCH /api/preset-configs/{id}`; `config` replaces the whole payload
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PresetConfigUpdate {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub config: Option<FeeConfig>,
}

impl PresetConfigUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.config.is_none()
    }

    pub fn validate_patch(&self) -> ApiResult<()> {
        if let Some(name) = &self.name {
            let len = name.chars().count();
            if len == 0 || len > PRESET_NAME_MAX_LEN {
                return Err(ApiError::validation(format!(
                    "name: length must be between 1 and {PRESET_NAME_MAX_LEN}"
                )));
            }
        }
        if let Some(config) = &self.config {
            config.validate()?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PresetConfigListQuery {
    /// Case-insensitive substring matched against the preset name
    pub search: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresetConfigListResponse {
    pub preset_configs: Vec<PresetConfigOut>,
    pub total: usize,
}
