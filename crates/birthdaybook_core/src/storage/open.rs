//! Connection bootstrap for the slot store.
//!
//! # Responsibility
//! - Open file or in-memory store connections.
//! - Apply the slot schema and reject stores from a newer schema version.
//!
//! # Invariants
//! - Returned connections carry `foreign_keys=ON` and a busy timeout.
//! - `PRAGMA user_version` mirrors the applied schema version; slot
//!   payloads themselves carry no version field.

use super::{StorageError, StorageResult};
use log::{error, info};
use rusqlite::Connection;
use std::path::Path;
use std::time::{Duration, Instant};

/// Schema version written to fresh stores.
pub const SCHEMA_VERSION: u32 = 1;

const SCHEMA_SQL: &str = "CREATE TABLE IF NOT EXISTS slots (
    key TEXT PRIMARY KEY NOT NULL,
    value TEXT NOT NULL,
    updated_at INTEGER NOT NULL
);";

/// Opens the store file at `path` and prepares the slot schema.
///
/// # Side effects
/// - Creates the store file when absent.
/// - Emits `store_open` logging events with duration and status.
pub fn open_store(path: impl AsRef<Path>) -> StorageResult<Connection> {
    let started_at = Instant::now();
    info!("event=store_open module=storage status=start mode=file");

    let conn = match Connection::open(path) {
        Ok(conn) => conn,
        Err(err) => {
            error!(
                "event=store_open module=storage status=error mode=file duration_ms={} error_code=store_open_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            return Err(err.into());
        }
    };

    match bootstrap_connection(&conn) {
        Ok(()) => {
            info!(
                "event=store_open module=storage status=ok mode=file duration_ms={}",
                started_at.elapsed().as_millis()
            );
            Ok(conn)
        }
        Err(err) => {
            error!(
                "event=store_open module=storage status=error mode=file duration_ms={} error_code=store_bootstrap_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            Err(err)
        }
    }
}

/// Opens an in-memory store and prepares the slot schema.
///
/// Used by tests and by callers that do not want durable state.
pub fn open_store_in_memory() -> StorageResult<Connection> {
    let conn = Connection::open_in_memory()?;
    bootstrap_connection(&conn)?;
    Ok(conn)
}

/// Reads the store's current schema version.
pub fn schema_version(conn: &Connection) -> StorageResult<u32> {
    let version = conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?;
    Ok(version)
}

fn bootstrap_connection(conn: &Connection) -> StorageResult<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(Duration::from_secs(5))?;
    ensure_schema(conn)?;
    Ok(())
}

fn ensure_schema(conn: &Connection) -> StorageResult<()> {
    let current = schema_version(conn)?;
    if current > SCHEMA_VERSION {
        return Err(StorageError::UnsupportedSchemaVersion {
            store_version: current,
            latest_supported: SCHEMA_VERSION,
        });
    }

    if current == SCHEMA_VERSION {
        return Ok(());
    }

    conn.execute_batch(SCHEMA_SQL)?;
    conn.execute_batch(&format!("PRAGMA user_version = {SCHEMA_VERSION};"))?;
    Ok(())
}
