//! In-app notifications and same-day birthday announcements.
//!
//! # Responsibility
//! - Define the notification payload and the sink contract frontends
//!   implement to surface it.
//! - Track which birthdays were already announced so repeated view refreshes
//!   stay quiet.
//!
//! # Invariants
//! - Notifications are fire-and-forget; emitting one never fails.
//! - A friend is announced at most once per calendar day per announcer.

use crate::model::friend::{FriendId, FriendValidationError};
use crate::views::BirthdayEntry;
use chrono::NaiveDate;
use std::collections::HashSet;

/// One user-facing notification with a title and optional detail line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: Option<String>,
}

impl Notification {
    /// Confirmation shown right after a friend is added.
    pub fn friend_added(name: &str) -> Self {
        Self {
            title: format!("Added {name} to your birthday list!"),
            description: Some("You'll be reminded when their special day arrives!".to_string()),
        }
    }

    /// Confirmation shown right after a friend is removed.
    pub fn friend_removed() -> Self {
        Self {
            title: "Friend removed from birthday list".to_string(),
            description: Some("You can always add them back later!".to_string()),
        }
    }

    /// Celebration shown when a friend's birthday is today.
    pub fn birthday_today(name: &str) -> Self {
        Self {
            title: format!("It's {name}'s birthday today!"),
            description: Some("Don't forget to wish them a happy birthday!".to_string()),
        }
    }

    /// Rejection shown when an add attempt fails validation.
    pub fn validation_failed(error: &FriendValidationError) -> Self {
        let title = match error {
            FriendValidationError::InvalidBirthday(_) => "That birthday doesn't look right",
            _ => "Please fill in all fields!",
        };
        Self {
            title: title.to_string(),
            description: Some(error.to_string()),
        }
    }
}

/// Frontend-specific notification surfaces implement this trait.
pub trait NotificationSink {
    fn notify(&mut self, notification: Notification);
}

/// Announces same-day birthdays at most once per friend per day.
///
/// The ledger only grows within one calendar day; entries from earlier days
/// are pruned on the next announcement pass.
#[derive(Debug, Default)]
pub struct BirthdayAnnouncer {
    announced: HashSet<(FriendId, NaiveDate)>,
}

impl BirthdayAnnouncer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emits a birthday notification for each entry in `today` not yet
    /// announced on `on`, returning how many were emitted.
    pub fn announce_today(
        &mut self,
        today: &[BirthdayEntry],
        on: NaiveDate,
        sink: &mut dyn NotificationSink,
    ) -> usize {
        self.announced.retain(|(_, date)| *date == on);

        let mut emitted = 0;
        for entry in today {
            if self.announced.insert((entry.friend.id, on)) {
                sink.notify(Notification::birthday_today(&entry.friend.name));
                emitted += 1;
            }
        }
        emitted
    }
}
