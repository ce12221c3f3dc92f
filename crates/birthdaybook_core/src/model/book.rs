//! Insertion-ordered friend collection.
//!
//! # Responsibility
//! - Hold the in-memory friend collection that every view derives from.
//! - Enforce uniqueness by id while preserving insertion order.
//!
//! # Invariants
//! - No two records share an id.
//! - The book is the single source of truth; the persistent slot only
//!   mirrors it and is rewritten from memory on conflict.

use crate::model::friend::{Friend, FriendId};

/// The owned, insertion-ordered set of friend records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FriendBook {
    friends: Vec<Friend>,
}

impl FriendBook {
    /// Creates an empty book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a book from mirror records.
    ///
    /// Records repeating an earlier id are dropped (first occurrence wins),
    /// repairing a corrupted mirror instead of propagating the duplicate.
    pub fn from_records(records: Vec<Friend>) -> Self {
        let mut book = Self::new();
        for friend in records {
            book.insert(friend);
        }
        book
    }

    /// Appends a friend, preserving insertion order.
    ///
    /// Returns `false` and leaves the book unchanged when the id is already
    /// present.
    pub fn insert(&mut self, friend: Friend) -> bool {
        if self.contains(friend.id) {
            return false;
        }
        self.friends.push(friend);
        true
    }

    /// Removes the record with the given id.
    ///
    /// An absent id is a no-op and yields `None`.
    pub fn remove(&mut self, id: FriendId) -> Option<Friend> {
        let position = self.friends.iter().position(|friend| friend.id == id)?;
        Some(self.friends.remove(position))
    }

    pub fn contains(&self, id: FriendId) -> bool {
        self.friends.iter().any(|friend| friend.id == id)
    }

    /// All records in insertion order.
    pub fn friends(&self) -> &[Friend] {
        &self.friends
    }

    pub fn len(&self) -> usize {
        self.friends.len()
    }

    pub fn is_empty(&self) -> bool {
        self.friends.is_empty()
    }
}
