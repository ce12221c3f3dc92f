//! Command execution: one update cycle per invocation.
//!
//! # Responsibility
//! - Drive the service, view derivation and announcements for each command.
//! - Map validation failures to notifications instead of hard errors.
//!
//! # Invariants
//! - Every mutation is followed by a fresh view derivation and an
//!   announcement pass over the new snapshot.
//! - Announcements are skipped entirely while the book is empty.

use crate::error::AppError;
use crate::render::render_groups;
use birthdaybook_core::{
    derive_groups, BirthdayAnnouncer, FriendBook, FriendDraft, FriendId, FriendMirror,
    FriendService, Notification, NotificationSink, ServiceError,
};
use chrono::NaiveDateTime;
use std::process::ExitCode;

/// Adds a friend, confirms it, and announces any same-day birthday.
///
/// A validation failure surfaces as a notification and a failure exit code;
/// the book and mirror stay untouched.
pub fn run_add<M: FriendMirror>(
    service: &mut FriendService<M>,
    draft: &FriendDraft,
    now: NaiveDateTime,
    announcer: &mut BirthdayAnnouncer,
    sink: &mut dyn NotificationSink,
) -> Result<ExitCode, AppError> {
    let added = match service.add(draft) {
        Ok(added) => added,
        Err(ServiceError::Validation(err)) => {
            sink.notify(Notification::validation_failed(&err));
            return Ok(ExitCode::FAILURE);
        }
        Err(err) => return Err(err.into()),
    };

    sink.notify(Notification::friend_added(&added.name));
    announce_cycle(service.book(), now, announcer, sink);
    Ok(ExitCode::SUCCESS)
}

/// Removes a friend by id; an id not in the book is a quiet no-op.
pub fn run_remove<M: FriendMirror>(
    service: &mut FriendService<M>,
    id: &str,
    now: NaiveDateTime,
    announcer: &mut BirthdayAnnouncer,
    sink: &mut dyn NotificationSink,
) -> Result<ExitCode, AppError> {
    let id = FriendId::parse_str(id.trim())
        .map_err(|_| AppError::InvalidFriendId(id.trim().to_string()))?;

    if service.remove(id)?.is_some() {
        sink.notify(Notification::friend_removed());
    }

    announce_cycle(service.book(), now, announcer, sink);
    Ok(ExitCode::SUCCESS)
}

/// Prints the derived groups, then announces today's birthdays.
pub fn run_list<M: FriendMirror>(
    service: &FriendService<M>,
    now: NaiveDateTime,
    announcer: &mut BirthdayAnnouncer,
    sink: &mut dyn NotificationSink,
) -> Result<ExitCode, AppError> {
    let groups = derive_groups(service.book().friends(), now);
    print!("{}", render_groups(&groups));

    announce_cycle(service.book(), now, announcer, sink);
    Ok(ExitCode::SUCCESS)
}

fn announce_cycle(
    book: &FriendBook,
    now: NaiveDateTime,
    announcer: &mut BirthdayAnnouncer,
    sink: &mut dyn NotificationSink,
) {
    if book.is_empty() {
        return;
    }
    let groups = derive_groups(book.friends(), now);
    announcer.announce_today(&groups.today, now.date(), sink);
}
