use fee_admin_db::models::customer::{CustomerNoteModel, NewCustomerNote};
use fee_admin_db::repository::error::{RepoResult, RepositoryError};

use super::repo_impl::{CustomerNoteRepositoryImpl, COLUMNS};
use crate::utils::{map_write_error, TryFromRow};

impl CustomerNoteRepositoryImpl {
    pub(super) async fn create_impl(
        repo: &CustomerNoteRepositoryImpl,
        item: NewCustomerNote,
    ) -> RepoResult<CustomerNoteModel> {
        let query = format!(
            r#"
            INSERT INTO customer_notes (customer_id, note)
            VALUES ($1, $2)
            RETURNING {COLUMNS}
            "#
        );

        let row = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or(RepositoryError::SessionClosed)?;
            sqlx::query(&query)
                .bind(item.customer_id.as_str())
                .bind(&item.note)
                .fetch_one(&mut **transaction)
                .await
                .map_err(map_write_error)?
        };

        CustomerNoteModel::try_from_row(&row)
    }
}
