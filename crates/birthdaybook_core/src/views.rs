//! Derived birthday groupings over a friend snapshot.
//!
//! # Responsibility
//! - Annotate each friend with countdown facts for one fixed instant.
//! - Split the snapshot into the today / this-week / all groups the UI shows.
//!
//! # Invariants
//! - Derivation is a pure function of the snapshot and `now`; calling it twice
//!   with the same inputs yields the same groups.
//! - A friend whose birthday is today appears in `today` and `all`, never in
//!   `this_week`.

use crate::model::friend::Friend;
use crate::occurrence::{days_until, is_today};
use chrono::NaiveDateTime;

/// Upper bound in days for the "coming up this week" group.
pub const THIS_WEEK_WINDOW_DAYS: i64 = 7;

/// One friend annotated with countdown facts at a fixed instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BirthdayEntry {
    pub friend: Friend,
    /// Days until the next occurrence. For a same-day birthday this counts
    /// toward next year, so check `is_today` first.
    pub days_until: i64,
    pub is_today: bool,
}

/// The three groups derived from one snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BirthdayGroups {
    /// Friends whose birthday is today, in snapshot order.
    pub today: Vec<BirthdayEntry>,
    /// Friends with a birthday within the next week (today excluded), in
    /// snapshot order.
    pub this_week: Vec<BirthdayEntry>,
    /// Every friend, ordered by ascending countdown; ties keep snapshot order.
    pub all: Vec<BirthdayEntry>,
}

/// Derives the three birthday groups from `friends` as seen at `now`.
pub fn derive_groups(friends: &[Friend], now: NaiveDateTime) -> BirthdayGroups {
    let entries: Vec<BirthdayEntry> = friends
        .iter()
        .map(|friend| {
            let is_today = is_today(friend.birthday, now);
            let days_until = days_until(friend.birthday, now);
            BirthdayEntry {
                friend: friend.clone(),
                days_until,
                is_today,
            }
        })
        .collect();

    let today: Vec<BirthdayEntry> = entries
        .iter()
        .filter(|entry| entry.is_today)
        .cloned()
        .collect();

    let this_week: Vec<BirthdayEntry> = entries
        .iter()
        .filter(|entry| !entry.is_today && entry.days_until <= THIS_WEEK_WINDOW_DAYS)
        .cloned()
        .collect();

    let mut all = entries;
    all.sort_by_key(|entry| entry.days_until);

    BirthdayGroups {
        today,
        this_week,
        all,
    }
}
