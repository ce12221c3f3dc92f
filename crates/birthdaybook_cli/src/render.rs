//! Plain-text rendering of birthday groups and notifications.
//!
//! # Responsibility
//! - Turn derived groups into the text layout `list` prints.
//! - Print notifications to the terminal as they are emitted.
//!
//! # Invariants
//! - Rendering is pure text assembly; it never touches the clock or store.
//! - Friend ids are always shown so `remove` can be fed from the output.

use birthdaybook_core::{BirthdayEntry, BirthdayGroups, Notification, NotificationSink};
use chrono::NaiveDate;

/// Notification sink printing to stdout.
pub struct TerminalSink;

impl NotificationSink for TerminalSink {
    fn notify(&mut self, notification: Notification) {
        println!("{}", notification.title);
        if let Some(description) = notification.description {
            println!("  {description}");
        }
    }
}

/// Renders the full `list` output for one derived snapshot.
pub fn render_groups(groups: &BirthdayGroups) -> String {
    if groups.all.is_empty() {
        return "No friends added yet\n\
                Add your first friend with `birthdaybook add` to start tracking birthdays!\n"
            .to_string();
    }

    let mut out = format!(
        "Today: {} | This week: {} | Total friends: {}\n",
        groups.today.len(),
        groups.this_week.len(),
        groups.all.len()
    );

    if !groups.today.is_empty() {
        push_section(&mut out, "Today's Birthdays!", &groups.today);
    }
    if !groups.this_week.is_empty() {
        push_section(&mut out, "This Week", &groups.this_week);
    }
    push_section(
        &mut out,
        &format!("All Friends ({})", groups.all.len()),
        &groups.all,
    );

    out
}

fn push_section(out: &mut String, title: &str, entries: &[BirthdayEntry]) {
    out.push('\n');
    out.push_str(title);
    out.push('\n');
    for entry in entries {
        out.push_str(&format!(
            "  {} <{}>\n",
            entry.friend.name, entry.friend.email
        ));
        out.push_str(&format!(
            "    {} | {} | id {}\n",
            format_birthday(entry.friend.birthday),
            birthday_message(entry),
            entry.friend.id
        ));
    }
}

fn birthday_message(entry: &BirthdayEntry) -> String {
    if entry.is_today {
        "Birthday Today!".to_string()
    } else if entry.days_until == 1 {
        "Tomorrow!".to_string()
    } else {
        format!("In {} days", entry.days_until)
    }
}

fn format_birthday(date: NaiveDate) -> String {
    date.format("%B %-d").to_string()
}
