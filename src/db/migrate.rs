//! Versioned schema migrations.
//!
//! The applied version lives in `PRAGMA user_version`; migration N is
//! applied when the stored version is below N.

use crate::errors::{AppError, AppResult};
use rusqlite::Connection;
use tracing::info;

struct Migration {
    name: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        name: "0001_create_kv_store",
        sql: r#"
        CREATE TABLE IF NOT EXISTS kv_store (
            key        TEXT PRIMARY KEY,
            value      TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        "#,
    },
];

pub fn current_version(conn: &Connection) -> AppResult<i64> {
    let v: i64 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;
    Ok(v)
}

pub fn latest_version() -> i64 {
    MIGRATIONS.len() as i64
}

/// Public entry point: run all pending migrations. Returns how many ran.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<usize> {
    let current = current_version(conn)?;
    let mut applied = 0;

    for (idx, m) in MIGRATIONS.iter().enumerate() {
        let version = idx as i64 + 1;
        if version <= current {
            continue;
        }

        conn.execute_batch(m.sql)
            .map_err(|e| AppError::Migration(format!("{}: {}", m.name, e)))?;
        conn.pragma_update(None, "user_version", version)?;

        info!(migration = m.name, version, "migration applied");
        applied += 1;
    }

    Ok(applied)
}
