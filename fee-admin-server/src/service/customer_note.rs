use fee_admin_api::{
    validate_page, ApiError, ApiResult, NoteCreate, NoteListQuery, NoteListResponse, NoteOut, NoteUpdate,
};
use fee_admin_db::models::customer::NewCustomerNote;
use fee_admin_db::repository::pagination::PageRequest;
use fee_admin_db::repository::session::{Session, UnitOfWork};
use tracing::info;
use validator::Validate;

use super::customer::CUSTOMER_NOT_FOUND;
use super::FeeAdminService;

const NOTE_NOT_FOUND: &str = "Note not found";

/// Fails with 404 unless the customer exists and is active
async fn require_customer<S: Session>(session: &S, customer_id: &str) -> ApiResult<()> {
    match session.customers().find_by_id(customer_id).await? {
        Some(_) => Ok(()),
        None => Err(ApiError::not_found(CUSTOMER_NOT_FOUND)),
    }
}

impl<U: UnitOfWork> FeeAdminService<U> {
    pub async fn list_notes(&self, customer_id: &str, query: &NoteListQuery) -> ApiResult<NoteListResponse> {
        let (limit, offset) = validate_page(query.limit, query.offset)?;
        let session = self.uow.begin().await?;
        require_customer(&session, customer_id).await?;

        let page = session
            .customer_notes()
            .list_for_customer(customer_id, PageRequest::new(limit, offset))
            .await?;
        session.commit().await?;

        Ok(NoteListResponse {
            total: page.total,
            notes: page.items.into_iter().map(NoteOut::from).collect(),
        })
    }

    pub async fn create_note(&self, customer_id: &str, body: NoteCreate) -> ApiResult<NoteOut> {
        body.validate()?;
        let session = self.uow.begin().await?;
        let customer = session
            .customers()
            .find_by_id(customer_id)
            .await?
            .ok_or_else(|| ApiError::not_found(CUSTOMER_NOT_FOUND))?;

        let note = session
            .customer_notes()
            .create(NewCustomerNote {
                customer_id: customer.id,
                note: body.note,
            })
            .await?;
        session.commit().await?;

        info!(customer_id = %customer_id, note_id = note.id, "note created");
        Ok(note.into())
    }

    /// Replace the text of a note; notes of other customers are reported as missing
    pub async fn update_note(&self, customer_id: &str, note_id: i64, body: NoteUpdate) -> ApiResult<NoteOut> {
        body.validate()?;
        let session = self.uow.begin().await?;
        let mut note = session
            .customer_notes()
            .find_for_customer(customer_id, note_id)
            .await?
            .ok_or_else(|| ApiError::not_found(NOTE_NOT_FOUND))?;

        note.note = body.note;
        let note = session.customer_notes().update(&note).await?;
        session.commit().await?;

        info!(customer_id = %customer_id, note_id, "note updated");
        Ok(note.into())
    }

    pub async fn delete_note(&self, customer_id: &str, note_id: i64) -> ApiResult<()> {
        let session = self.uow.begin().await?;
        let note = session
            .customer_notes()
            .find_for_customer(customer_id, note_id)
            .await?
            .ok_or_else(|| ApiError::not_found(NOTE_NOT_FOUND))?;

        if !session.customer_notes().soft_delete(&note.id, &self.delete_actor).await? {
            return Err(ApiError::not_found(NOTE_NOT_FOUND));
        }
        session.commit().await?;

        info!(customer_id = %customer_id, note_id, "note deleted");
        Ok(())
    }
}
