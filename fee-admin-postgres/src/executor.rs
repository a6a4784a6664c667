use std::sync::Arc;

use fee_admin_db::repository::error::{RepoResult, RepositoryError};
use sqlx::{Postgres, Transaction};
use tokio::sync::Mutex;

/// Shared handle on one open transaction.
///
/// Every repository of a session holds a clone. Commit takes the transaction out,
/// after which any further use fails with `SessionClosed`. Dropping the last clone
/// while it still holds the transaction rolls it back.
#[derive(Clone)]
pub struct Executor {
    pub tx: Arc<Mutex<Option<Transaction<'static, Postgres>>>>,
}

impl Executor {
    pub fn new(tx: Transaction<'static, Postgres>) -> Self {
        Self {
            tx: Arc::new(Mutex::new(Some(tx))),
        }
    }

    pub async fn commit(&self) -> RepoResult<()> {
        let tx = self.tx.lock().await.take().ok_or(RepositoryError::SessionClosed)?;
        tx.commit().await?;
        Ok(())
    }
}
