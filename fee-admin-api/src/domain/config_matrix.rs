use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::fee_config::FeeConfig;
use crate::error::{ApiError, ApiResult};

const EXACTLY_ONE_SOURCE: &str = "Provide exactly one of preset_config_id or custom_config";

/// Config matrix entry as returned by the API, with the effective payload resolved
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigMatrixOut {
    pub id: i64,
    pub customer_id: String,
    pub customer_name: Option<String>,
    pub preset_config_id: Option<i64>,
    pub preset_config_name: Option<String>,
    pub custom_config_id: Option<i64>,
    /// Payload of whichever source is linked; `None` if the link cannot be followed
    pub config: Option<FeeConfig>,
    pub effective_from: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Configuration source requested by a create or update body
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SourceRequest {
    Preset(i64),
    Custom(FeeConfig),
}

impl SourceRequest {
    fn from_parts(preset_config_id: Option<i64>, custom_config: Option<FeeConfig>) -> ApiResult<Option<Self>> {
        match (preset_config_id, custom_config) {
            (Some(_), Some(_)) => Err(ApiError::validation(EXACTLY_ONE_SOURCE)),
            (Some(id), None) => Ok(Some(SourceRequest::Preset(id))),
            (None, Some(config)) => {
                config.validate()?;
                Ok(Some(SourceRequest::Custom(config)))
            }
            (None, None) => Ok(None),
        }
    }
}

/// Body of `POST /api/config-matrix`
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigMatrixCreate {
    pub customer_id: String,
    #[serde(default)]
    pub preset_config_id: Option<i64>,
    #[serde(default)]
    pub custom_config: Option<FeeConfig>,
    pub effective_from: NaiveDate,
}

impl ConfigMatrixCreate {
    /// The single configuration source of this binding.
    ///
    /// Fails when both or neither of `preset_config_id` and `custom_config` are present,
    /// or when the custom payload is out of bounds.
    pub fn source(&self) -> ApiResult<SourceRequest> {
        SourceRequest::from_parts(self.preset_config_id, self.custom_config)?
            .ok_or_else(|| ApiError::validation(EXACTLY_ONE_SOURCE))
    }
}

/// Body of `PATCH /api/config-matrix/{id}`
///
/// Explicit `null` for either source is treated the same as leaving it out.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigMatrixUpdate {
    #[serde(default)]
    pub preset_config_id: Option<i64>,
    #[serde(default)]
    pub custom_config: Option<FeeConfig>,
    #[serde(default)]
    pub effective_from: Option<NaiveDate>,
}

impl ConfigMatrixUpdate {
    pub fn is_empty(&self) -> bool {
        self.preset_config_id.is_none() && self.custom_config.is_none() && self.effective_from.is_none()
    }

    /// The source to switch to, if any. Supplying both sources is an error.
    pub fn source(&self) -> ApiResult<Option<SourceRequest>> {
        SourceRequest::from_parts(self.preset_config_id, self.custom_config)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigMatrixListQuery {
    pub customer_id: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigMatrixListResponse {
    pub config_matrix: Vec<ConfigMatrixOut>,
    pub total: usize,
}
