use birthdaybook_core::{
    derive_groups, BirthdayAnnouncer, Friend, Notification, NotificationSink,
};
use chrono::{NaiveDate, NaiveDateTime};

fn birthday(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn at(year: i32, month: u32, day: u32, hour: u32) -> NaiveDateTime {
    birthday(year, month, day).and_hms_opt(hour, 0, 0).unwrap()
}

#[derive(Default)]
struct RecordingSink {
    seen: Vec<Notification>,
}

impl NotificationSink for RecordingSink {
    fn notify(&mut self, notification: Notification) {
        self.seen.push(notification);
    }
}

#[test]
fn todays_birthdays_go_to_the_today_group_only() {
    let alice = Friend::new("Alice", "alice@example.com", birthday(1990, 8, 23));
    let friends = vec![alice.clone()];

    let groups = derive_groups(&friends, at(2026, 8, 23, 10));

    assert_eq!(groups.today.len(), 1);
    assert_eq!(groups.today[0].friend.id, alice.id);
    assert!(groups.today[0].is_today);
    assert!(groups.this_week.is_empty());
    assert_eq!(groups.all.len(), 1);
}

#[test]
fn this_week_holds_birthdays_within_seven_days_and_all_sorts_by_countdown() {
    let in_three_days = Friend::new("Bob", "bob@example.com", birthday(1992, 8, 26));
    let in_ten_days = Friend::new("Cara", "cara@example.com", birthday(1999, 9, 2));
    let friends = vec![in_ten_days.clone(), in_three_days.clone()];

    let groups = derive_groups(&friends, at(2026, 8, 23, 10));

    assert_eq!(groups.this_week.len(), 1);
    assert_eq!(groups.this_week[0].friend.id, in_three_days.id);
    assert_eq!(groups.this_week[0].days_until, 3);

    let all_ids: Vec<_> = groups.all.iter().map(|entry| entry.friend.id).collect();
    assert_eq!(all_ids, vec![in_three_days.id, in_ten_days.id]);
    assert_eq!(groups.all[1].days_until, 10);
}

#[test]
fn countdown_ties_keep_insertion_order() {
    let first = Friend::new("Bob", "bob@example.com", birthday(1992, 8, 26));
    let second = Friend::new("Dana", "dana@example.com", birthday(1970, 8, 26));
    let later = Friend::new("Cara", "cara@example.com", birthday(1999, 9, 2));
    let friends = vec![first.clone(), later.clone(), second.clone()];

    let groups = derive_groups(&friends, at(2026, 8, 23, 10));

    let all_ids: Vec<_> = groups.all.iter().map(|entry| entry.friend.id).collect();
    assert_eq!(all_ids, vec![first.id, second.id, later.id]);

    let week_ids: Vec<_> = groups
        .this_week
        .iter()
        .map(|entry| entry.friend.id)
        .collect();
    assert_eq!(week_ids, vec![first.id, second.id]);
}

#[test]
fn derivation_is_a_pure_function_of_snapshot_and_now() {
    let friends = vec![
        Friend::new("Alice", "alice@example.com", birthday(1990, 8, 23)),
        Friend::new("Bob", "bob@example.com", birthday(1992, 8, 26)),
    ];
    let now = at(2026, 8, 23, 10);

    assert_eq!(derive_groups(&friends, now), derive_groups(&friends, now));
}

#[test]
fn announcer_emits_once_per_friend_per_day() {
    let alice = Friend::new("Alice", "alice@example.com", birthday(1990, 8, 23));
    let friends = vec![alice];
    let now = at(2026, 8, 23, 10);
    let groups = derive_groups(&friends, now);

    let mut announcer = BirthdayAnnouncer::new();
    let mut sink = RecordingSink::default();

    let emitted = announcer.announce_today(&groups.today, now.date(), &mut sink);
    assert_eq!(emitted, 1);
    assert_eq!(sink.seen.len(), 1);
    assert_eq!(sink.seen[0].title, "It's Alice's birthday today!");

    let repeat = announcer.announce_today(&groups.today, now.date(), &mut sink);
    assert_eq!(repeat, 0);
    assert_eq!(sink.seen.len(), 1);
}

#[test]
fn announcer_fires_again_on_a_later_day() {
    let alice = Friend::new("Alice", "alice@example.com", birthday(1990, 8, 23));
    let friends = vec![alice];

    let mut announcer = BirthdayAnnouncer::new();
    let mut sink = RecordingSink::default();

    let this_year = at(2026, 8, 23, 10);
    let groups = derive_groups(&friends, this_year);
    assert_eq!(
        announcer.announce_today(&groups.today, this_year.date(), &mut sink),
        1
    );

    let next_year = at(2027, 8, 23, 9);
    let groups = derive_groups(&friends, next_year);
    assert_eq!(
        announcer.announce_today(&groups.today, next_year.date(), &mut sink),
        1
    );
    assert_eq!(sink.seen.len(), 2);
}

#[test]
fn announcer_is_quiet_for_an_empty_today_group() {
    let friends = vec![Friend::new("Bob", "bob@example.com", birthday(1992, 8, 26))];
    let now = at(2026, 8, 23, 10);
    let groups = derive_groups(&friends, now);

    let mut announcer = BirthdayAnnouncer::new();
    let mut sink = RecordingSink::default();

    assert_eq!(
        announcer.announce_today(&groups.today, now.date(), &mut sink),
        0
    );
    assert!(sink.seen.is_empty());
}
