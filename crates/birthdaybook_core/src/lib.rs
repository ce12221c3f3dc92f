//! Core domain logic for BirthdayBook.
//! This crate is the single source of truth for business invariants.

pub mod logging;
pub mod model;
pub mod notify;
pub mod occurrence;
pub mod repo;
pub mod service;
pub mod storage;
pub mod views;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::book::FriendBook;
pub use model::friend::{Friend, FriendDraft, FriendId, FriendValidationError};
pub use notify::{BirthdayAnnouncer, Notification, NotificationSink};
pub use occurrence::{days_until, is_today, next_occurrence};
pub use repo::friend_mirror::{
    FriendMirror, RepoError, RepoResult, SqliteFriendMirror, FRIEND_SLOT_KEY,
};
pub use service::friend_service::{FriendService, ServiceError, ServiceResult};
pub use storage::{
    open_store, open_store_in_memory, StorageError, StorageResult, STORE_FILE_NAME,
};
pub use views::{derive_groups, BirthdayEntry, BirthdayGroups, THIS_WEEK_WINDOW_DAYS};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
