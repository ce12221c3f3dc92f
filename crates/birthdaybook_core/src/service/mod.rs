//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate validation, the owned friend book, and mirror persistence
//!   into use-case level APIs.
//! - Keep frontends decoupled from storage and payload details.

pub mod friend_service;
