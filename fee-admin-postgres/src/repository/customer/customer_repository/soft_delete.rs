use async_trait::async_trait;
use fee_admin_db::models::customer::CustomerModel;
use fee_admin_db::repository::error::{RepoResult, RepositoryError};
use fee_admin_db::repository::soft_delete::SoftDelete;

use super::repo_impl::{CustomerRepositoryImpl, TABLE};
use crate::utils::soft_delete_sql;

impl CustomerRepositoryImpl {
    pub(super) async fn soft_delete_impl(
        repo: &CustomerRepositoryImpl,
        id: &str,
        actor: &str,
    ) -> RepoResult<bool> {
        let query = soft_delete_sql(TABLE);

        let result = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or(RepositoryError::SessionClosed)?;
            sqlx::query(&query).bind(id).bind(actor).execute(&mut **transaction).await?
        };

        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl SoftDelete<CustomerModel> for CustomerRepositoryImpl {
    async fn soft_delete(&self, id: &str, actor: &str) -> RepoResult<bool> {
        Self::soft_delete_impl(self, id, actor).await
    }
}

#[cfg(test)]
mod tests {
    use fee_admin_db::repository::customer_repository::CustomerRepository;
    use fee_admin_db::repository::session::Session;
    use fee_admin_db::repository::soft_delete::SoftDelete;
    use serial_test::serial;

    use super::super::test_utils::test_utils::create_test_customer;
    use crate::test_helper::setup_test_context;

    #[tokio::test]
    #[ignore = "requires PostgreSQL at DATABASE_URL"]
    #[serial]
    async fn test_soft_delete_is_not_repeatable() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let repo = ctx.session().customers();

        let customer = repo.create(create_test_customer("Ann")).await?;

        assert!(repo.soft_delete(customer.id.as_str(), "tester").await?);
        assert!(!repo.soft_delete(customer.id.as_str(), "tester").await?);

        Ok(())
    }
}
