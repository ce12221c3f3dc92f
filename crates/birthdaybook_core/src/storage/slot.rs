//! Named key-value slot access.
//!
//! # Responsibility
//! - Read and overwrite single slot values by key.
//!
//! # Invariants
//! - A write replaces the whole value; slots are never appended to.
//! - `updated_at` tracks the last write in epoch milliseconds.

use super::StorageResult;
use rusqlite::{params, Connection};

/// Reads the value stored under `key`, if any.
pub fn read_slot(conn: &Connection, key: &str) -> StorageResult<Option<String>> {
    let mut stmt = conn.prepare("SELECT value FROM slots WHERE key = ?1;")?;
    let mut rows = stmt.query([key])?;
    if let Some(row) = rows.next()? {
        return Ok(Some(row.get("value")?));
    }
    Ok(None)
}

/// Overwrites the value stored under `key`, creating the slot when absent.
pub fn write_slot(conn: &Connection, key: &str, value: &str) -> StorageResult<()> {
    conn.execute(
        "INSERT OR REPLACE INTO slots (key, value, updated_at)
         VALUES (?1, ?2, (strftime('%s', 'now') * 1000));",
        params![key, value],
    )?;
    Ok(())
}
