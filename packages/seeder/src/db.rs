// ABOUTME: SQLite pool initialization for the seeder database
// ABOUTME: Configures pragmas and runs schema migrations at connect time

use std::path::Path;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::error::SeederResult;

/// Open (creating if necessary) the seeder database at the given path and
/// bring its schema up to date.
pub async fn init_pool(database_path: impl AsRef<Path>) -> SeederResult<SqlitePool> {
    let database_path = database_path.as_ref();

    // Ensure parent directory exists
    if let Some(parent) = database_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    debug!("Connecting to seeder database: {:?}", database_path);

    let options = SqliteConnectOptions::new()
        .filename(database_path)
        .create_if_missing(true)
        .foreign_keys(false);

    // Configure connection pool
    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(30))
        .connect_with(options)
        .await?;

    // Configure SQLite settings. Foreign keys stay off: fake orders reference
    // users/products by loop index, which may not exist yet.
    sqlx::query("PRAGMA journal_mode = WAL").execute(&pool).await?;
    sqlx::query("PRAGMA synchronous = NORMAL").execute(&pool).await?;

    info!("Seeder database connection established");

    // Run migrations
    sqlx::migrate!("./migrations").run(&pool).await?;

    debug!("Seeder database migrations completed");

    Ok(pool)
}
