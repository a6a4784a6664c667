use fee_admin_db::models::customer::CustomerModel;
use fee_admin_db::repository::error::{RepoResult, RepositoryError};

use super::repo_impl::{CustomerRepositoryImpl, COLUMNS};
use crate::utils::{active, map_write_error, TryFromRow};

impl CustomerRepositoryImpl {
    pub(super) async fn update_impl(
        repo: &CustomerRepositoryImpl,
        item: &CustomerModel,
    ) -> RepoResult<CustomerModel> {
        let query = format!(
            r#"
            UPDATE customers c
            SET name = $2, email = $3, phone = $4, address = $5, date_of_birth = $6, updated_at = now()
            WHERE c.id = $1 AND {}
            RETURNING {COLUMNS}
            "#,
            active("c")
        );

        let row = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or(RepositoryError::SessionClosed)?;
            sqlx::query(&query)
                .bind(item.id.as_str())
                .bind(item.name.as_str())
                .bind(item.email.as_str())
                .bind(item.phone.as_ref().map(|s| s.as_str()))
                .bind(item.address.as_deref())
                .bind(item.date_of_birth)
                .fetch_one(&mut **transaction)
                .await
                .map_err(map_write_error)?
        };

        CustomerModel::try_from_row(&row)
    }
}
