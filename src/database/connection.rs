use std::time::Duration;

use anyhow::{Context, Result};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::Connection;

use crate::config::settings::DatabaseSettings;

pub type DbPool = r2d2::Pool<SqliteConnectionManager>;
pub type DbConn = r2d2::PooledConnection<SqliteConnectionManager>;

pub fn create_pool(settings: &DatabaseSettings) -> Result<DbPool> {
    let manager = build_manager(settings);
    build_pool(manager, settings.pool_size)
}

/// Single-connection pool over a private in-memory database.
pub fn create_memory_pool() -> Result<DbPool> {
    let manager = SqliteConnectionManager::memory().with_init(|conn| configure(conn, 0));
    build_pool(manager, 1)
}

fn build_manager(settings: &DatabaseSettings) -> SqliteConnectionManager {
    let busy_timeout_ms = settings.busy_timeout_ms;
    SqliteConnectionManager::file(&settings.path)
        .with_init(move |conn| configure(conn, busy_timeout_ms))
}

fn build_pool(manager: SqliteConnectionManager, size: u32) -> Result<DbPool> {
    r2d2::Pool::builder()
        .max_size(size.max(1))
        .build(manager)
        .context("Failed to create database connection pool")
}

/// Per-connection settings: foreign keys on, wait for writers instead of failing.
pub fn configure(conn: &mut Connection, busy_timeout_ms: u64) -> rusqlite::Result<()> {
    conn.busy_timeout(Duration::from_millis(busy_timeout_ms))?;
    conn.execute_batch("PRAGMA foreign_keys = ON;")
}

pub fn get_connection(pool: &DbPool) -> Result<DbConn> {
    pool.get()
        .context("Failed to get database connection from pool")
}
