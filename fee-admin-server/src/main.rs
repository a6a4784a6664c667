use std::sync::Arc;

use anyhow::Context;
use fee_admin_postgres::{init_database, PostgresRepositories};
use fee_admin_server::{router, telemetry, Config, FeeAdminService};
use sqlx::postgres::PgPoolOptions;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let config = Config::from_env()?;
    telemetry::init_tracing(config.debug);
    info!(addr = %config.socket_addr(), auto_migrate = config.auto_migrate, "starting fee admin server");

    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .acquire_timeout(config.database_acquire_timeout)
        .connect(&config.database_url)
        .await
        .context("failed to connect to the database")?;

    if config.auto_migrate {
        init_database(&pool).await.context("failed to apply schema scripts")?;
        info!("schema scripts applied");
    }

    let repositories = PostgresRepositories::new(Arc::new(pool));
    let service = Arc::new(FeeAdminService::new(repositories, config.delete_actor.clone()));
    let app = router(service);

    let listener = tokio::net::TcpListener::bind(config.socket_addr())
        .await
        .with_context(|| format!("failed to bind {}", config.socket_addr()))?;
    info!("listening on {}", config.socket_addr());
    axum::serve(listener, app).await?;

    Ok(())
}
