use fee_admin_db::models::fee_config::ConfigMatrixView;
use fee_admin_db::repository::error::{RepoResult, RepositoryError};

use super::repo_impl::{view_select, ConfigMatrixRepositoryImpl};
use crate::utils::TryFromRow;

impl ConfigMatrixRepositoryImpl {
    pub(super) async fn find_view_impl(
        repo: &ConfigMatrixRepositoryImpl,
        id: i64,
    ) -> RepoResult<Option<ConfigMatrixView>> {
        let query = format!("{} AND m.id = $1", view_select());

        let row = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or(RepositoryError::SessionClosed)?;
            sqlx::query(&query).bind(id).fetch_optional(&mut **transaction).await?
        };

        row.as_ref().map(ConfigMatrixView::try_from_row).transpose()
    }
}
