use chrono::{DateTime, Utc};
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};

use crate::utils::utf8_capacity;

/// Maximum length, in characters, of the `deleted_by` actor column
pub const ACTOR_MAX_LEN: usize = 100;
/// Byte capacity of the `deleted_by` actor
pub const ACTOR_CAPACITY: usize = utf8_capacity(ACTOR_MAX_LEN);

/// Deletion marker stored on every soft-deletable row.
///
/// Rows are never physically removed: deleting sets `deleted_at` and `deleted_by`,
/// and every read path excludes rows that carry a tombstone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tombstone {
    pub deleted_at: DateTime<Utc>,
    pub deleted_by: Option<HeaplessString<ACTOR_CAPACITY>>,
}

/// Trait for entities that are deleted by tombstoning instead of removal
pub trait SoftDeletable {
    fn tombstone(&self) -> Option<&Tombstone>;

    fn is_active(&self) -> bool {
        self.tombstone().is_none()
    }
}
