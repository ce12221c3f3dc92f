//! Friend book use-case service.
//!
//! # Responsibility
//! - Own the in-memory friend book and apply add/remove mutations to it.
//! - Persist the mirror after every mutation and surface persistence errors.
//!
//! # Invariants
//! - The owned book is the single source of truth; the mirror is rewritten
//!   from it after each mutation, never patched.
//! - Validation failures abort before any state change.

use crate::model::book::FriendBook;
use crate::model::friend::{Friend, FriendDraft, FriendId, FriendValidationError};
use crate::repo::friend_mirror::{FriendMirror, RepoError};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Error for friend book use-case operations.
#[derive(Debug)]
pub enum ServiceError {
    Validation(FriendValidationError),
    Repo(RepoError),
    Inconsistent(&'static str),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
            Self::Inconsistent(message) => write!(f, "friend book inconsistency: {message}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Repo(err) => Some(err),
            Self::Inconsistent(_) => None,
        }
    }
}

impl From<FriendValidationError> for ServiceError {
    fn from(value: FriendValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Use-case service owning the friend book backed by a mirror.
pub struct FriendService<M: FriendMirror> {
    mirror: M,
    book: FriendBook,
}

impl<M: FriendMirror> FriendService<M> {
    /// Loads the persisted book through `mirror` and takes ownership of both.
    pub fn load(mirror: M) -> Result<Self, RepoError> {
        let book = mirror.load()?;
        Ok(Self { mirror, book })
    }

    /// Validates `draft`, appends the new friend, and persists the mirror.
    ///
    /// # Contract
    /// - A validation failure aborts with no state change.
    /// - On success the created record is visible to all subsequent reads.
    /// - A failed persist keeps the record in memory and surfaces the error;
    ///   the next successful persist rewrites the whole mirror.
    pub fn add(&mut self, draft: &FriendDraft) -> ServiceResult<Friend> {
        let started = Instant::now();
        let friend = Friend::from_draft(draft)?;

        if !self.book.insert(friend.clone()) {
            return Err(ServiceError::Inconsistent(
                "freshly generated id already present",
            ));
        }
        self.mirror.persist(&self.book)?;

        info!(
            "event=friend_add module=service status=ok friend_id={} count={} duration_ms={}",
            friend.id,
            self.book.len(),
            started.elapsed().as_millis()
        );
        Ok(friend)
    }

    /// Removes the friend with `id` and persists the mirror.
    ///
    /// # Contract
    /// - An absent id is a no-op, not an error; the mirror is persisted
    ///   either way.
    /// - Returns the removed record so callers can decide whether to notify.
    pub fn remove(&mut self, id: FriendId) -> ServiceResult<Option<Friend>> {
        let started = Instant::now();
        let removed = self.book.remove(id);
        self.mirror.persist(&self.book)?;

        info!(
            "event=friend_remove module=service status=ok friend_id={} removed={} count={} duration_ms={}",
            id,
            removed.is_some(),
            self.book.len(),
            started.elapsed().as_millis()
        );
        Ok(removed)
    }

    /// Read access to the owned book for view derivation.
    pub fn book(&self) -> &FriendBook {
        &self.book
    }
}
