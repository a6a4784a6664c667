use fee_admin_db::models::customer::CustomerNoteModel;
use fee_admin_db::repository::error::{RepoResult, RepositoryError};

use super::repo_impl::{CustomerNoteRepositoryImpl, COLUMNS};
use crate::utils::{active, TryFromRow};

impl CustomerNoteRepositoryImpl {
    pub(super) async fn update_impl(
        repo: &CustomerNoteRepositoryImpl,
        item: &CustomerNoteModel,
    ) -> RepoResult<CustomerNoteModel> {
        let query = format!(
            r#"
            UPDATE customer_notes n
            SET note = $2, updated_at = now()
            WHERE n.id = $1 AND {}
            RETURNING {COLUMNS}
            "#,
            active("n")
        );

        let row = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or(RepositoryError::SessionClosed)?;
            sqlx::query(&query)
                .bind(item.id)
                .bind(&item.note)
                .fetch_one(&mut **transaction)
                .await?
        };

        CustomerNoteModel::try_from_row(&row)
    }
}
