use fee_admin_db::repository::error::{RepoResult, RepositoryError};

use super::repo_impl::ConfigMatrixRepositoryImpl;
use crate::utils::active;

impl ConfigMatrixRepositoryImpl {
    pub(super) async fn count_by_preset_impl(
        repo: &ConfigMatrixRepositoryImpl,
        preset_config_id: i64,
    ) -> RepoResult<usize> {
        let query = format!(
            "SELECT COUNT(*) FROM customer_config_matrix m WHERE m.preset_config_id = $1 AND {}",
            active("m")
        );

        let count: i64 = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or(RepositoryError::SessionClosed)?;
            sqlx::query_scalar(&query)
                .bind(preset_config_id)
                .fetch_one(&mut **transaction)
                .await?
        };

        Ok(count as usize)
    }
}
