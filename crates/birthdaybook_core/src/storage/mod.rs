//! Local slot store bootstrap.
//!
//! # Responsibility
//! - Open and configure the SQLite store holding named key-value slots.
//! - Guard against store files written by a newer schema.
//!
//! # Invariants
//! - Returned connections have the slot schema fully applied.
//! - Slot values are opaque strings; payload interpretation happens in the
//!   repository layer.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod open;
mod slot;

pub use open::{open_store, open_store_in_memory, schema_version, SCHEMA_VERSION};
pub use slot::{read_slot, write_slot};

/// File name of the store inside the application data directory.
pub const STORE_FILE_NAME: &str = "birthdaybook.sqlite3";

pub type StorageResult<T> = Result<T, StorageError>;

#[derive(Debug)]
pub enum StorageError {
    Sqlite(rusqlite::Error),
    UnsupportedSchemaVersion {
        store_version: u32,
        latest_supported: u32,
    },
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::UnsupportedSchemaVersion {
                store_version,
                latest_supported,
            } => write!(
                f,
                "store schema version {store_version} is newer than supported {latest_supported}"
            ),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
