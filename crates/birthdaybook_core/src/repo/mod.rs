//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the mirror contract that keeps the friend book durable.
//! - Isolate SQLite and payload encoding details from service orchestration.
//!
//! # Invariants
//! - Loads degrade to an empty book on malformed payloads instead of failing.
//! - Persists write the whole book; there are no partial record updates.

pub mod friend_mirror;
