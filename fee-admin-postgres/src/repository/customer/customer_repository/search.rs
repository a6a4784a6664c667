use fee_admin_db::models::customer::CustomerModel;
use fee_admin_db::repository::error::{RepoResult, RepositoryError};
use fee_admin_db::repository::pagination::{Page, PageRequest};
use sqlx::{Postgres, QueryBuilder};

use super::repo_impl::{CustomerRepositoryImpl, COLUMNS};
use crate::utils::{active, like_pattern, TryFromRow};

fn push_filter(builder: &mut QueryBuilder<'_, Postgres>, search: Option<&str>) {
    builder.push(" WHERE ").push(active("c"));
    if let Some(search) = search.filter(|s| !s.is_empty()) {
        let pattern = like_pattern(search);
        builder
            .push(" AND (c.name ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR c.email ILIKE ")
            .push_bind(pattern)
            .push(")");
    }
}

impl CustomerRepositoryImpl {
    pub(super) async fn search_impl(
        repo: &CustomerRepositoryImpl,
        search: Option<&str>,
        page: PageRequest,
    ) -> RepoResult<Page<CustomerModel>> {
        let mut count = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM customers c");
        push_filter(&mut count, search);

        let mut select = QueryBuilder::<Postgres>::new(format!("SELECT {COLUMNS} FROM customers c"));
        push_filter(&mut select, search);
        select
            .push(" ORDER BY c.created_at DESC, c.id DESC LIMIT ")
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
            .map(CustomerModel::try_from_row)
            .collect::<RepoResult<Vec<_>>>()?;
        Ok(Page::new(items, total as usize, page.limit, page.offset))
    }
}
