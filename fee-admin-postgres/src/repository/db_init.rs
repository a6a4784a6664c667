//! Database initialization and cleanup utilities
//!
//! The schema scripts are embedded at compile time and executed in order:
//! migrations ascending to set the schema up, cleanup scripts descending to tear it down.
//! Every migration is idempotent, so initialization can run on each startup.

use sqlx::PgPool;
use tracing::info;

/// Schema scripts, applied in ascending order
const MIGRATIONS: &[(&str, &str)] = &[(
    "0001_create_tables.sql",
    include_str!("../../migrations/0001_create_tables.sql"),
)];

/// Teardown scripts, applied in descending order
const CLEANUP: &[(&str, &str)] = &[(
    "0001_drop_tables.sql",
    include_str!("../../cleanup/0001_drop_tables.sql"),
)];

/// Initialize the database by executing migration scripts in ascending order
///
/// # Example
///
/// ```rust,no_run
/// use sqlx::PgPool;
/// use fee_admin_postgres::repository::db_init::init_database;
///
/// # async fn example(pool: &PgPool) -> Result<(), Box<dyn std::error::Error>> {
/// init_database(pool).await?;
/// # Ok(())
/// # }
/// ```
pub async fn init_database(pool: &PgPool) -> Result<(), sqlx::Error> {
    execute_scripts_in_order(pool, MIGRATIONS, true).await
}

/// Cleanup the database by executing cleanup scripts in descending order
pub async fn cleanup_database(pool: &PgPool) -> Result<(), sqlx::Error> {
    execute_scripts_in_order(pool, CLEANUP, false).await
}

/// Execute named scripts sorted by name
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `scripts` - `(file name, sql)` pairs
/// * `ascending` - If true, execute in ascending order; if false, in descending order
async fn execute_scripts_in_order(
    pool: &PgPool,
    scripts: &[(&str, &str)],
    ascending: bool,
) -> Result<(), sqlx::Error> {
    let mut ordered: Vec<&(&str, &str)> = scripts.iter().collect();
    ordered.sort_by(|a, b| {
        let ordering = a.0.cmp(b.0);
        if ascending {
            ordering
        } else {
            ordering.reverse()
        }
    });

    for &(name, sql) in ordered {
        info!(script = name, "executing schema script");
        sqlx::raw_sql(sql).execute(pool).await?;
    }

    Ok(())
}
