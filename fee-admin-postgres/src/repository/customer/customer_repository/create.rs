use fee_admin_db::models::customer::{CustomerModel, NewCustomer};
use fee_admin_db::repository::error::{RepoResult, RepositoryError};

use super::repo_impl::{CustomerRepositoryImpl, COLUMNS};
use crate::utils::{map_write_error, TryFromRow};

impl CustomerRepositoryImpl {
    pub(super) async fn create_impl(
        repo: &CustomerRepositoryImpl,
        item: NewCustomer,
    ) -> RepoResult<CustomerModel> {
        let query = format!(
            r#"
            INSERT INTO customers (id, name, email, phone, address, date_of_birth)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {COLUMNS}
            "#
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
