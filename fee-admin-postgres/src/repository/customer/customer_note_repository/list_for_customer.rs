use fee_admin_db::models::customer::CustomerNoteModel;
use fee_admin_db::repository::error::{RepoResult, RepositoryError};
use fee_admin_db::repository::pagination::{Page, PageRequest};

use super::repo_impl::{CustomerNoteRepositoryImpl, COLUMNS};
use crate::utils::{active, TryFromRow};

impl CustomerNoteRepositoryImpl {
    pub(super) async fn list_for_customer_impl(
        repo: &CustomerNoteRepositoryImpl,
        customer_id: &str,
        page: PageRequest,
    ) -> RepoResult<Page<CustomerNoteModel>> {
        let filter = format!("n.customer_id = $1 AND {}", active("n"));
        let count_query = format!("SELECT COUNT(*) FROM customer_notes n WHERE {filter}");
        let select_query = format!(
            "SELECT {COLUMNS} FROM customer_notes n WHERE {filter} \
             ORDER BY n.created_at DESC, n.id DESC LIMIT $2 OFFSET $3"
        );

        let (total, rows) = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or(RepositoryError::SessionClosed)?;
            let total: i64 = sqlx::query_scalar(&count_query)
                .bind(customer_id)
                .fetch_one(&mut **transaction)
                .await?;
            let rows = sqlx::query(&select_query)
                .bind(customer_id)
                .bind(page.limit as i64)
                .bind(page.offset as i64)
                .fetch_all(&mut **transaction)
                .await?;
            (total, rows)
        };

        let items = rows
            .iter()
            .map(CustomerNoteModel::try_from_row)
            .collect::<RepoResult<Vec<_>>>()?;
        Ok(Page::new(items, total as usize, page.limit, page.offset))
    }
}
