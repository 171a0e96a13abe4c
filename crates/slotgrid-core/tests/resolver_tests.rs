//! Tests for day-window resolution: override precedence over weekly rules.

use chrono::{NaiveDate, Weekday};
use slotgrid_core::{resolve_windows, DateOverride, LocalTimeOfDay, Schedule, WeeklyRule};

fn time(s: &str) -> LocalTimeOfDay {
    s.parse().expect("valid time of day")
}

fn rule(weekday: Weekday, start: &str, end: &str) -> WeeklyRule {
    WeeklyRule {
        weekday,
        start: time(start),
        end: time(end),
    }
}

fn schedule(rules: Vec<WeeklyRule>, overrides: Vec<DateOverride>) -> Schedule {
    Schedule {
        timezone: "America/New_York".to_string(),
        owner: "owner-1".to_string(),
        weekly_rules: rules,
        overrides,
    }
}

/// 2026-03-02 is a Monday.
fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()
}

#[test]
fn weekday_rules_apply_sorted_by_start() {
    // Configured afternoon-first to prove the resolver sorts.
    let schedule = schedule(
        vec![
            rule(Weekday::Mon, "13:00", "17:00"),
            rule(Weekday::Mon, "09:00", "12:00"),
            rule(Weekday::Tue, "10:00", "16:00"),
        ],
        vec![],
    );

    let windows = resolve_windows(&schedule, monday());

    assert_eq!(windows.len(), 2, "only Monday rules should apply");
    assert_eq!(windows[0].start, time("09:00"));
    assert_eq!(windows[0].end, time("12:00"));
    assert_eq!(windows[1].start, time("13:00"));
    assert_eq!(windows[1].end, time("17:00"));
}

#[test]
fn no_rules_for_weekday_yields_empty() {
    let schedule = schedule(vec![rule(Weekday::Tue, "09:00", "17:00")], vec![]);
    assert!(resolve_windows(&schedule, monday()).is_empty());
}

#[test]
fn unavailable_override_blocks_the_date() {
    let schedule = schedule(
        vec![rule(Weekday::Mon, "09:00", "17:00")],
        vec![DateOverride {
            date: monday(),
            is_available: false,
            start: None,
            end: None,
        }],
    );

    assert!(
        resolve_windows(&schedule, monday()).is_empty(),
        "an unavailable override wins over weekly rules"
    );
}

#[test]
fn override_with_times_replaces_weekly_rules() {
    let schedule = schedule(
        vec![
            rule(Weekday::Mon, "09:00", "12:00"),
            rule(Weekday::Mon, "13:00", "17:00"),
        ],
        vec![DateOverride {
            date: monday(),
            is_available: true,
            start: Some(time("10:00")),
            end: Some(time("14:00")),
        }],
    );

    let windows = resolve_windows(&schedule, monday());

    assert_eq!(windows.len(), 1, "override replaces all weekly windows");
    assert_eq!(windows[0].start, time("10:00"));
    assert_eq!(windows[0].end, time("14:00"));
}

#[test]
fn available_override_without_times_falls_through_to_rules() {
    let schedule = schedule(
        vec![rule(Weekday::Mon, "09:00", "12:00")],
        vec![DateOverride {
            date: monday(),
            is_available: true,
            start: None,
            end: None,
        }],
    );

    let windows = resolve_windows(&schedule, monday());

    assert_eq!(windows.len(), 1);
    assert_eq!(windows[0].start, time("09:00"));
}

#[test]
fn override_only_affects_its_own_date() {
    let tuesday = NaiveDate::from_ymd_opt(2026, 3, 3).unwrap();
    let schedule = schedule(
        vec![
            rule(Weekday::Mon, "09:00", "17:00"),
            rule(Weekday::Tue, "09:00", "17:00"),
        ],
        vec![DateOverride {
            date: monday(),
            is_available: false,
            start: None,
            end: None,
        }],
    );

    assert!(resolve_windows(&schedule, monday()).is_empty());
    assert_eq!(
        resolve_windows(&schedule, tuesday).len(),
        1,
        "the next day is untouched by Monday's override"
    );
}

#[test]
fn equal_start_rules_keep_configured_order() {
    // Stable sort: two rules with the same start stay in config order.
    let schedule = schedule(
        vec![
            rule(Weekday::Mon, "09:00", "11:00"),
            rule(Weekday::Mon, "09:00", "10:00"),
        ],
        vec![],
    );

    let windows = resolve_windows(&schedule, monday());

    assert_eq!(windows.len(), 2);
    assert_eq!(windows[0].end, time("11:00"));
    assert_eq!(windows[1].end, time("10:00"));
}

#[test]
fn overlapping_rules_stay_independent() {
    let schedule = schedule(
        vec![
            rule(Weekday::Mon, "09:00", "13:00"),
            rule(Weekday::Mon, "11:00", "15:00"),
        ],
        vec![],
    );

    let windows = resolve_windows(&schedule, monday());

    assert_eq!(windows.len(), 2, "overlapping rules are not merged");
    assert!(windows[0].overlaps(&windows[1]));
}
