use chrono::{DateTime, NaiveDate, Utc};
use fee_admin_api::{ConfigMatrixOut, FeeConfig};
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};

use crate::models::customer::CUSTOMER_ID_CAPACITY;
use crate::models::identifiable::Identifiable;
use crate::models::soft_delete::{SoftDeletable, Tombstone};
use crate::repository::error::RepositoryError;

/// The configuration a config matrix entry points at.
///
/// Storage keeps two nullable foreign keys guarded by a check constraint;
/// in memory the pair is always exactly one of these variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum ConfigSource {
    Preset(i64),
    Custom(i64),
}

impl ConfigSource {
    /// Rebuild the source from its two storage columns.
    pub fn from_columns(
        preset_config_id: Option<i64>,
        custom_config_id: Option<i64>,
    ) -> Result<Self, RepositoryError> {
        match (preset_config_id, custom_config_id) {
            (Some(id), None) => Ok(ConfigSource::Preset(id)),
            (None, Some(id)) => Ok(ConfigSource::Custom(id)),
            (Some(_), Some(_)) => Err(RepositoryError::InvalidRow {
                table: "customer_config_matrix",
                reason: "both preset_config_id and custom_config_id are set".to_string(),
            }),
            (None, None) => Err(RepositoryError::InvalidRow {
                table: "customer_config_matrix",
                reason: "neither preset_config_id nor custom_config_id is set".to_string(),
            }),
        }
    }

    pub fn preset_config_id(&self) -> Option<i64> {
        match self {
            ConfigSource::Preset(id) => Some(*id),
            ConfigSource::Custom(_) => None,
        }
    }

    pub fn custom_config_id(&self) -> Option<i64> {
        match self {
            ConfigSource::Preset(_) => None,
            ConfigSource::Custom(id) => Some(*id),
        }
    }
}

/// # Documentation
/// Dated binding of one customer to one configuration source.
///
/// Entries form a history per customer; nothing here decides which entry is in
/// effect on a given day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigMatrixModel {
    pub id: i64,
    pub customer_id: HeaplessString<CUSTOMER_ID_CAPACITY>,
    pub source: ConfigSource,
    pub effective_from: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub tombstone: Option<Tombstone>,
}

impl Identifiable for ConfigMatrixModel {
    type Id = i64;

    fn get_id(&self) -> &i64 {
        &self.id
    }
}

impl SoftDeletable for ConfigMatrixModel {
    fn tombstone(&self) -> Option<&Tombstone> {
        self.tombstone.as_ref()
    }
}

/// Insert payload for a config matrix entry
#[derive(Debug, Clone, PartialEq)]
pub struct NewConfigMatrix {
    pub customer_id: HeaplessString<CUSTOMER_ID_CAPACITY>,
    pub source: ConfigSource,
    pub effective_from: NaiveDate,
}

/// Preset columns joined onto a matrix entry
#[derive(Debug, Clone, PartialEq)]
pub struct LinkedPreset {
    pub id: i64,
    pub name: String,
    pub config: FeeConfig,
}

/// Custom config columns joined onto a matrix entry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinkedCustom {
    pub id: i64,
    pub config: FeeConfig,
}

/// A matrix entry together with the display data resolved from its links
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigMatrixView {
    pub entry: ConfigMatrixModel,
    pub customer_name: Option<String>,
    pub preset_config_name: Option<String>,
    pub config: Option<FeeConfig>,
}

impl ConfigMatrixView {
    /// Resolve the effective payload from whichever source the entry links to.
    ///
    /// Joined rows whose id does not match the entry's source are ignored, and a
    /// missing link yields `config: None` rather than an error.
    pub fn resolve(
        entry: ConfigMatrixModel,
        customer_name: Option<String>,
        preset: Option<LinkedPreset>,
        custom: Option<LinkedCustom>,
    ) -> Self {
        let (preset_config_name, config) = match entry.source {
            ConfigSource::Preset(id) => match preset {
                Some(p) if p.id == id => (Some(p.name), Some(p.config)),
                _ => (None, None),
            },
            ConfigSource::Custom(id) => match custom {
                Some(c) if c.id == id => (None, Some(c.config)),
                _ => (None, None),
            },
        };

        Self {
            entry,
            customer_name,
            preset_config_name,
            config,
        }
    }
}

impl From<ConfigMatrixView> for ConfigMatrixOut {
    fn from(view: ConfigMatrixView) -> Self {
        let entry = view.entry;
        ConfigMatrixOut {
            id: entry.id,
            customer_id: entry.customer_id.as_str().to_string(),
            customer_name: view.customer_name,
            preset_config_id: entry.source.preset_config_id(),
            preset_config_name: view.preset_config_name,
            custom_config_id: entry.source.custom_config_id(),
            config: view.config,
            effective_from: entry.effective_from,
            created_at: entry.created_at,
            updated_at: entry.updated_at,
        }
    }
}
