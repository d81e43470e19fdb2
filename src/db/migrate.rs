use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

const CREATE_STORE_VERSION: &str = "20260101_0001_create_store";

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check whether a migration version has already been recorded in `log`.
pub fn is_migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

/// Record a migration version as applied.
pub fn mark_migration_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Check if a table exists.
fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Create the key-value `store` table holding the persisted progress record.
fn migrate_create_store_table(conn: &Connection) -> Result<()> {
    if is_migration_applied(conn, CREATE_STORE_VERSION)? && table_exists(conn, "store")? {
        return Ok(());
    }

    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS store (
            key        TEXT PRIMARY KEY,
            value      TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        "#,
    )?;

    if !is_migration_applied(conn, CREATE_STORE_VERSION)? {
        mark_migration_applied(conn, CREATE_STORE_VERSION, "Created key-value store table")?;
        success(format!(
            "Migration applied: {} → created 'store' table",
            CREATE_STORE_VERSION
        ));
    }

    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::init_db().
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    // 1) Ensure log table
    ensure_log_table(conn)?;

    // 2) Key-value store
    migrate_create_store_table(conn)
        .map_err(|e| AppError::Migration(format!("{}: {}", CREATE_STORE_VERSION, e)))?;

    Ok(())
}
