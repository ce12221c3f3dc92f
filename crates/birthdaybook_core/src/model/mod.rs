//! Domain model for the birthday book.
//!
//! # Responsibility
//! - Define the canonical friend record and its add-form draft.
//! - Own the insertion-ordered collection and its identity invariant.
//!
//! # Invariants
//! - Every friend is identified by a stable [`friend::FriendId`].
//! - Friends are immutable after creation; the only lifecycle transition
//!   is removal by id.

pub mod book;
pub mod friend;
