use chrono::{DateTime, Utc};
use fee_admin_api::FeeConfig;
use serde::{Deserialize, Serialize};

use crate::models::identifiable::Identifiable;
use crate::models::soft_delete::{SoftDeletable, Tombstone};

/// Unnamed fee configuration backing a single config matrix entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomConfigModel {
    pub id: i64,
    pub config: FeeConfig,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub tombstone: Option<Tombstone>,
}

impl Identifiable for CustomConfigModel {
    type Id = i64;

    fn get_id(&self) -> &i64 {
        &self.id
    }
}

impl SoftDeletable for CustomConfigModel {
    fn tombstone(&self) -> Option<&Tombstone> {
        self.tombstone.as_ref()
    }
}
