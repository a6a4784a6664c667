use fee_admin_db::models::customer::CustomerNoteModel;
use fee_admin_db::repository::error::{RepoResult, RepositoryError};

use super::repo_impl::{CustomerNoteRepositoryImpl, COLUMNS};
use crate::utils::{active, TryFromRow};

impl CustomerNoteRepositoryImpl {
    pub(super) async fn find_for_customer_impl(
        repo: &CustomerNoteRepositoryImpl,
        customer_id: &str,
        note_id: i64,
    ) -> RepoResult<Option<CustomerNoteModel>> {
        let query = format!(
            "SELECT {COLUMNS} FROM customer_notes n WHERE n.id = $1 AND n.customer_id = $2 AND {}",
            active("n")
        );

        let row = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or(RepositoryError::SessionClosed)?;
            sqlx::query(&query)
                .bind(note_id)
                .bind(customer_id)
                .fetch_optional(&mut **transaction)
                .await?
        };

        row.as_ref().map(CustomerNoteModel::try_from_row).transpose()
    }
}
