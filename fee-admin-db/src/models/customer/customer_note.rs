use chrono::{DateTime, Utc};
use fee_admin_api::NoteOut;
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};

use crate::models::customer::CUSTOMER_ID_CAPACITY;
use crate::models::identifiable::Identifiable;
use crate::models::soft_delete::{SoftDeletable, Tombstone};

/// Free-text note owned by exactly one customer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerNoteModel {
    pub id: i64,
    pub customer_id: HeaplessString<CUSTOMER_ID_CAPACITY>,
    pub note: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub tombstone: Option<Tombstone>,
}

impl Identifiable for CustomerNoteModel {
    type Id = i64;

    fn get_id(&self) -> &i64 {
        &self.id
    }
}

impl SoftDeletable for CustomerNoteModel {
    fn tombstone(&self) -> Option<&Tombstone> {
        self.tombstone.as_ref()
    }
}

impl From<CustomerNoteModel> for NoteOut {
    fn from(model: CustomerNoteModel) -> Self {
        NoteOut {
            id: model.id,
            customer_id: model.customer_id.as_str().to_string(),
            note: model.note,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Insert payload for a note
#[derive(Debug, Clone, PartialEq)]
pub struct NewCustomerNote {
    pub customer_id: HeaplessString<CUSTOMER_ID_CAPACITY>,
    pub note: String,
}
