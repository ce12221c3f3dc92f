//! Friend book mirror contract and SQLite slot implementation.
//!
//! # Responsibility
//! - Load the persisted friend book and write it back after mutations.
//! - Keep slot key and payload encoding details inside this module.
//!
//! # Invariants
//! - The whole book lives in one slot as a JSON array of friend records.
//! - An absent slot and a malformed payload both load as an empty book.
//! - A payload with duplicate ids is repaired first-wins on load and the
//!   repaired book is rewritten out immediately.
//! - Persisted payloads always parse back into the book that produced them.

use crate::model::book::FriendBook;
use crate::model::friend::Friend;
use crate::storage::{read_slot, schema_version, write_slot, StorageError, SCHEMA_VERSION};
use log::{info, warn};
use rusqlite::Connection;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Slot key holding the serialized friend book.
pub const FRIEND_SLOT_KEY: &str = "birthday-friends";

pub type RepoResult<T> = Result<T, RepoError>;

/// Error for mirror load/persist operations.
#[derive(Debug)]
pub enum RepoError {
    Storage(StorageError),
    Serialize(serde_json::Error),
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Storage(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "failed to serialize friend book: {err}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection is not initialized for mirror use: schema version {actual_version}, expected {expected_version}"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "connection is missing required table `{table}`")
            }
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "table `{table}` is missing required column `{column}`")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            Self::Serialize(err) => Some(err),
            Self::UninitializedConnection { .. } => None,
            Self::MissingRequiredTable(_) => None,
            Self::MissingRequiredColumn { .. } => None,
        }
    }
}

impl From<StorageError> for RepoError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Storage(StorageError::Sqlite(value))
    }
}

impl From<serde_json::Error> for RepoError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}

/// Mirror interface for friend book persistence.
pub trait FriendMirror {
    /// Loads the persisted book, or an empty one when nothing usable is stored.
    fn load(&self) -> RepoResult<FriendBook>;

    /// Replaces the persisted book with `book`.
    fn persist(&self, book: &FriendBook) -> RepoResult<()>;
}

/// SQLite-backed friend book mirror over a single named slot.
pub struct SqliteFriendMirror<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteFriendMirror<'conn> {
    /// Builds a mirror after checking the connection carries the slot schema.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        let actual_version = schema_version(conn)?;
        if actual_version != SCHEMA_VERSION {
            return Err(RepoError::UninitializedConnection {
                expected_version: SCHEMA_VERSION,
                actual_version,
            });
        }

        if !table_exists(conn, "slots")? {
            return Err(RepoError::MissingRequiredTable("slots"));
        }

        for column in ["key", "value", "updated_at"] {
            if !column_exists(conn, "slots", column)? {
                return Err(RepoError::MissingRequiredColumn {
                    table: "slots",
                    column,
                });
            }
        }

        Ok(Self { conn })
    }
}

impl FriendMirror for SqliteFriendMirror<'_> {
    fn load(&self) -> RepoResult<FriendBook> {
        let payload = match read_slot(self.conn, FRIEND_SLOT_KEY)? {
            Some(payload) => payload,
            None => {
                info!("event=mirror_load module=repo status=ok source=empty count=0");
                return Ok(FriendBook::new());
            }
        };

        let records: Vec<Friend> = match serde_json::from_str(&payload) {
            Ok(records) => records,
            Err(err) => {
                warn!(
                    "event=mirror_load module=repo status=warn error_code=malformed_payload error={}",
                    err
                );
                return Ok(FriendBook::new());
            }
        };

        let record_count = records.len();
        let book = FriendBook::from_records(records);
        if book.len() < record_count {
            warn!(
                "event=mirror_load module=repo status=warn error_code=duplicate_ids dropped={} count={}",
                record_count - book.len(),
                book.len()
            );
            // Load still succeeds when the rewrite fails; the next persist
            // covers it.
            if let Err(err) = self.persist(&book) {
                warn!(
                    "event=mirror_load module=repo status=warn error_code=repair_persist_failed error={}",
                    err
                );
            }
        } else {
            info!(
                "event=mirror_load module=repo status=ok source=slot count={}",
                book.len()
            );
        }

        Ok(book)
    }

    fn persist(&self, book: &FriendBook) -> RepoResult<()> {
        let payload = serde_json::to_string(book.friends())?;
        write_slot(self.conn, FRIEND_SLOT_KEY, &payload)?;
        info!(
            "event=mirror_persist module=repo status=ok count={}",
            book.len()
        );
        Ok(())
    }
}

fn table_exists(conn: &Connection, name: &str) -> RepoResult<bool> {
    let mut stmt =
        conn.prepare("SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1;")?;
    let mut rows = stmt.query([name])?;
    Ok(rows.next()?.is_some())
}

fn column_exists(conn: &Connection, table: &str, column: &str) -> RepoResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let name: String = row.get("name")?;
        if name == column {
            return Ok(true);
        }
    }
    Ok(false)
}
