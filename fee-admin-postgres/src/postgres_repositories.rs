use std::sync::Arc;

use async_trait::async_trait;
use fee_admin_db::repository::config_matrix_repository::ConfigMatrixRepository;
use fee_admin_db::repository::custom_config_repository::CustomConfigRepository;
use fee_admin_db::repository::customer_note_repository::CustomerNoteRepository;
use fee_admin_db::repository::customer_repository::CustomerRepository;
use fee_admin_db::repository::error::RepoResult;
use fee_admin_db::repository::preset_config_repository::PresetConfigRepository;
use fee_admin_db::repository::schema_repository::SchemaRepository;
use fee_admin_db::repository::session::{Session, UnitOfWork};
use sqlx::PgPool;

use crate::executor::Executor;
use crate::repository::customer::CustomerRepositories;
use crate::repository::fee_config::FeeConfigRepositories;
use crate::repository::schema::SchemaRepositoryImpl;

/// Entry point to PostgreSQL storage; opens one transactional session per unit of work
#[derive(Clone)]
pub struct PostgresRepositories {
    pool: Arc<PgPool>,
}

impl PostgresRepositories {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Create all repositories sharing a single transaction
    pub async fn create_session(&self) -> RepoResult<PostgresSession> {
        let tx = self.pool.begin().await?;
        let executor = Executor::new(tx);

        Ok(PostgresSession {
            customer_repos: CustomerRepositories::new(&executor),
            fee_config_repos: FeeConfigRepositories::new(&executor),
            schema_repository: Arc::new(SchemaRepositoryImpl::new(executor.clone())),
            executor,
        })
    }
}

#[async_trait]
impl UnitOfWork for PostgresRepositories {
    type Session = PostgresSession;

    async fn begin(&self) -> RepoResult<PostgresSession> {
        self.create_session().await
    }

    async fn ping(&self) -> RepoResult<()> {
        sqlx::query("SELECT 1").execute(&*self.pool).await?;
        Ok(())
    }
}

/// Repositories bound to one open transaction
pub struct PostgresSession {
    executor: Executor,
    pub customer_repos: CustomerRepositories,
    pub fee_config_repos: FeeConfigRepositories,
    pub schema_repository: Arc<SchemaRepositoryImpl>,
}

#[async_trait]
impl Session for PostgresSession {
    fn customers(&self) -> &dyn CustomerRepository {
        self.customer_repos.customer_repository.as_ref()
    }

    fn customer_notes(&self) -> &dyn CustomerNoteRepository {
        self.customer_repos.customer_note_repository.as_ref()
    }

    fn preset_configs(&self) -> &dyn PresetConfigRepository {
        self.fee_config_repos.preset_config_repository.as_ref()
    }

    fn custom_configs(&self) -> &dyn CustomConfigRepository {
        self.fee_config_repos.custom_config_repository.as_ref()
    }

    fn config_matrix(&self) -> &dyn ConfigMatrixRepository {
        self.fee_config_repos.config_matrix_repository.as_ref()
    }

    fn schema(&self) -> &dyn SchemaRepository {
        self.schema_repository.as_ref()
    }

    async fn commit(self) -> RepoResult<()> {
        self.executor.commit().await
    }
}
