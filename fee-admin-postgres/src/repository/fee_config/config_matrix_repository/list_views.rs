use fee_admin_db::models::fee_config::ConfigMatrixView;
use fee_admin_db::repository::error::{RepoResult, RepositoryError};
use fee_admin_db::repository::pagination::{Page, PageRequest};
use sqlx::{Postgres, QueryBuilder};

use super::repo_impl::{view_select, ConfigMatrixRepositoryImpl};
use crate::utils::{active, TryFromRow};

fn push_filter(builder: &mut QueryBuilder<'_, Postgres>, customer_id: Option<&str>) {
    if let Some(customer_id) = customer_id {
        builder.push(" AND m.customer_id = ").push_bind(customer_id.to_string());
    }
}

impl ConfigMatrixRepositoryImpl {
    pub(super) async fn list_views_impl(
        repo: &ConfigMatrixRepositoryImpl,
        customer_id: Option<&str>,
        page: PageRequest,
    ) -> RepoResult<Page<ConfigMatrixView>> {
        let mut count = QueryBuilder::<Postgres>::new(format!(
            "SELECT COUNT(*) FROM customer_config_matrix m WHERE {}",
            active("m")
        ));
        push_filter(&mut count, customer_id);

        let mut select = QueryBuilder::<Postgres>::new(view_select());
        push_filter(&mut select, customer_id);
        select
            .push(" ORDER BY m.effective_from DESC, m.id DESC LIMIT ")
            .push_bind(page.limit as i64)
            .push(" OFFSET ")
            .push_bind(page.offset as i64);

        let (total, rows) = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or(RepositoryError::SessionClosed)?;
            let total: i64 = count.build_query_scalar().fetch_one(&mut **transaction).await?;
            let rows = select.build().fetch_all(&mut **transaction).await?;
            (total, rows)
        };

        let items = rows
            .iter()
            .map(ConfigMatrixView::try_from_row)
            .collect::<RepoResult<Vec<_>>>()?;
        Ok(Page::new(items, total as usize, page.limit, page.offset))
    }
}
