use std::time::Duration;

use anyhow::{Context, Result};
use r2d2_sqlite::SqliteConnectionManager;

use crate::config::settings::DatabaseSettings;
use crate::errors::TournamentResult;

pub type DbPool = r2d2::Pool<SqliteConnectionManager>;
pub type DbConn = r2d2::PooledConnection<SqliteConnectionManager>;

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

pub fn create_pool(settings: &DatabaseSettings) -> Result<DbPool> {
    let manager = build_manager(
        SqliteConnectionManager::file(&settings.path),
        settings.enforce_foreign_keys,
    );
    build_pool(manager, settings.pool_size)
}

/// Pool over a private in-memory database. Capped at one connection so every
/// checkout sees the same data.
pub fn create_memory_pool(enforce_foreign_keys: bool) -> Result<DbPool> {
    let manager = build_manager(SqliteConnectionManager::memory(), enforce_foreign_keys);
    build_pool(manager, 1)
}

fn build_manager(
    manager: SqliteConnectionManager,
    enforce_foreign_keys: bool,
) -> SqliteConnectionManager {
    manager.with_init(move |conn| {
        conn.pragma_update(None, "foreign_keys", enforce_foreign_keys)?;
        conn.busy_timeout(BUSY_TIMEOUT)
    })
}

fn build_pool(manager: SqliteConnectionManager, max_size: u32) -> Result<DbPool> {
    r2d2::Pool::builder()
        .max_size(max_size.max(1))
        .build(manager)
        .context("Failed to create database connection pool")
}

pub fn get_connection(pool: &DbPool) -> TournamentResult<DbConn> {
    Ok(pool.get()?)
}
