use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteOut {
    pub id: i64,
    pub customer_id: String,
    pub note: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NoteCreate {
    #[validate(length(min = 1))]
    pub note: String,
}

/// Notes are replaced wholesale, so the text is required
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NoteUpdate {
    #[validate(length(min = 1))]
    pub note: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NoteListQuery {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteListResponse {
    pub notes: Vec<NoteOut>,
    pub total: usize,
}
