//! Top-level CLI error type.

use birthdaybook_core::{RepoError, ServiceError, StorageError};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;
use std::path::PathBuf;

#[derive(Debug)]
pub enum AppError {
    DataDirUnavailable,
    CreateDataDir { path: PathBuf, source: io::Error },
    InvalidFriendId(String),
    Storage(StorageError),
    Repo(RepoError),
    Service(ServiceError),
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DataDirUnavailable => {
                write!(f, "no platform data directory available; pass --data-dir")
            }
            Self::CreateDataDir { path, source } => {
                write!(
                    f,
                    "failed to create data directory `{}`: {source}",
                    path.display()
                )
            }
            Self::InvalidFriendId(value) => {
                write!(
                    f,
                    "`{value}` is not a friend id; run `birthdaybook list` to look ids up"
                )
            }
            Self::Storage(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
            Self::Service(err) => write!(f, "{err}"),
        }
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::DataDirUnavailable => None,
            Self::CreateDataDir { source, .. } => Some(source),
            Self::InvalidFriendId(_) => None,
            Self::Storage(err) => Some(err),
            Self::Repo(err) => Some(err),
            Self::Service(err) => Some(err),
        }
    }
}

impl From<StorageError> for AppError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

impl From<RepoError> for AppError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl From<ServiceError> for AppError {
    fn from(value: ServiceError) -> Self {
        Self::Service(value)
    }
}
