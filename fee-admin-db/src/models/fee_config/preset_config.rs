use chrono::{DateTime, Utc};
use fee_admin_api::{ApiResult, FeeConfig, PresetConfigOut, PresetConfigUpdate, PRESET_NAME_MAX_LEN};
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};

use crate::models::identifiable::Identifiable;
use crate::models::soft_delete::{SoftDeletable, Tombstone};
use crate::utils::{bounded, utf8_capacity};

/// Byte capacity of a preset name
pub const PRESET_NAME_CAPACITY: usize = utf8_capacity(PRESET_NAME_MAX_LEN);

/// # Documentation
/// Named, reusable fee configuration shareable across customers.
///
/// The name is unique among presets that are not soft-deleted.
/// A preset cannot be deleted while an active config matrix entry references it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresetConfigModel {
    pub id: i64,
    pub name: HeaplessString<PRESET_NAME_CAPACITY>,
    pub config: FeeConfig,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub tombstone: Option<Tombstone>,
}

impl PresetConfigModel {
    /// Apply a validated partial update. A supplied config replaces the whole payload.
    pub fn apply_update(&mut self, update: &PresetConfigUpdate) -> ApiResult<()> {
        if let Some(name) = &update.name {
            self.name = bounded("name", name, PRESET_NAME_MAX_LEN)?;
        }
        if let Some(config) = update.config {
            self.config = config;
        }
        Ok(())
    }
}

impl Identifiable for PresetConfigModel {
    type Id = i64;

    fn get_id(&self) -> &i64 {
        &self.id
    }
}

impl SoftDeletable for PresetConfigModel {
    fn tombstone(&self) -> Option<&Tombstone> {
        self.tombstone.as_ref()
    }
}

impl From<PresetConfigModel> for PresetConfigOut {
    fn from(model: PresetConfigModel) -> Self {
        PresetConfigOut {
            id: model.id,
            name: model.name.as_str().to_string(),
            config: model.config,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Insert payload for a preset
#[derive(Debug, Clone, PartialEq)]
pub struct NewPresetConfig {
    pub name: HeaplessString<PRESET_NAME_CAPACITY>,
    pub config: FeeConfig,
}
