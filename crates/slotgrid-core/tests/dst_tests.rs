//! Tests for DST boundary behavior in America/Los_Angeles.
//!
//! 2026-03-08 02:00 PST springs forward to 03:00 PDT; 2026-11-01 02:00 PDT
//! falls back to 01:00 PST.

use chrono::{NaiveDate, TimeZone, Timelike, Utc, Weekday};
use chrono_tz::Tz;
use slotgrid_core::{
    generate_day_slots, generate_range, EventParams, FixedClock, FrequencyLimits,
    GenerationParams, LocalWindow, Schedule, WeeklyRule,
};

fn la() -> Tz {
    "America/Los_Angeles".parse().unwrap()
}

fn window(start: &str, end: &str) -> LocalWindow {
    LocalWindow {
        start: start.parse().unwrap(),
        end: end.parse().unwrap(),
    }
}

fn params(duration_min: u32, step_min: u32) -> GenerationParams {
    GenerationParams {
        duration_min,
        step_min,
        buffer_before_min: 0,
        buffer_after_min: 0,
        notice_cutoff: Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap(),
    }
}

fn spring_forward_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 8).unwrap()
}

fn fall_back_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 11, 1).unwrap()
}

// ---------------------------------------------------------------------------
// Spring forward: the 02:00-03:00 local hour does not exist
// ---------------------------------------------------------------------------

#[test]
fn walk_across_the_gap_skips_nonexistent_labels() {
    // Window 01:00-04:00 with hour-long slots: candidates land on 01:00 and
    // 03:00 local. No slot is ever labeled 02:xx.
    let slots = generate_day_slots(
        spring_forward_day(),
        &[window("01:00", "04:00")],
        &params(60, 60),
        &[],
        la(),
    )
    .expect("should generate");

    assert_eq!(slots.len(), 2, "the gap swallows one local hour");

    // 01:00 PST == 09:00 UTC.
    assert_eq!(
        slots[0].start,
        Utc.with_ymd_and_hms(2026, 3, 8, 9, 0, 0).unwrap()
    );
    assert_eq!(slots[0].start.hour(), 1);

    // One hour of real time later the wall clock reads 03:00 PDT.
    assert_eq!(
        slots[1].start,
        Utc.with_ymd_and_hms(2026, 3, 8, 10, 0, 0).unwrap()
    );
    assert_eq!(slots[1].start.hour(), 3);

    // The two slots are back to back in instant time.
    assert_eq!(slots[0].end, slots[1].start);
}

#[test]
fn window_start_inside_the_gap_skips_the_window() {
    let slots = generate_day_slots(
        spring_forward_day(),
        &[window("02:30", "05:00")],
        &params(60, 60),
        &[],
        la(),
    )
    .expect("should generate");

    assert!(slots.is_empty(), "a window anchored in the gap is skipped");
}

#[test]
fn window_end_inside_the_gap_skips_the_window() {
    let slots = generate_day_slots(
        spring_forward_day(),
        &[window("01:00", "02:30")],
        &params(30, 30),
        &[],
        la(),
    )
    .expect("should generate");

    assert!(slots.is_empty());
}

#[test]
fn other_windows_on_the_transition_date_are_unaffected() {
    // The afternoon window resolves normally even though the early-morning
    // one is skipped.
    let slots = generate_day_slots(
        spring_forward_day(),
        &[window("02:00", "03:00"), window("13:00", "15:00")],
        &params(60, 60),
        &[],
        la(),
    )
    .expect("should generate");

    assert_eq!(slots.len(), 2);
    assert_eq!(slots[0].start.hour(), 13);
    assert_eq!(slots[1].start.hour(), 14);
}

// ---------------------------------------------------------------------------
// Fall back: the 01:00-02:00 local hour happens twice
// ---------------------------------------------------------------------------

#[test]
fn walk_across_the_repeat_covers_real_time() {
    // Window 00:00-03:00 spans four real hours; the walk visits the
    // repeated 01:00 label twice.
    let slots = generate_day_slots(
        fall_back_day(),
        &[window("00:00", "03:00")],
        &params(60, 60),
        &[],
        la(),
    )
    .expect("should generate");

    assert_eq!(slots.len(), 4, "three wall-clock hours, four real hours");

    let utc_starts: Vec<_> = slots
        .iter()
        .map(|s| s.start.with_timezone(&Utc).hour())
        .collect();
    assert_eq!(utc_starts, vec![7, 8, 9, 10], "hourly in instant time");

    let local_labels: Vec<_> = slots.iter().map(|s| s.start.hour()).collect();
    assert_eq!(local_labels, vec![0, 1, 1, 2], "01:00 appears twice");
}

#[test]
fn ambiguous_window_boundary_skips_the_window() {
    // 01:30 occurs twice on the fall-back date; there is no unique instant
    // to anchor the window, so it is skipped.
    let slots = generate_day_slots(
        fall_back_day(),
        &[window("01:30", "05:00")],
        &params(60, 60),
        &[],
        la(),
    )
    .expect("should generate");

    assert!(slots.is_empty());
}

// ---------------------------------------------------------------------------
// Offsets move with the transition at range level
// ---------------------------------------------------------------------------

#[test]
fn same_local_time_maps_to_different_utc_across_the_transition() {
    // Mondays 09:00-10:00 local. Mar 2 is PST (UTC-8), Mar 9 is PDT (UTC-7):
    // the local label stays 09:00 while the UTC instant shifts an hour.
    let schedule = Schedule {
        timezone: "America/Los_Angeles".to_string(),
        owner: "owner-1".to_string(),
        weekly_rules: vec![WeeklyRule {
            weekday: Weekday::Mon,
            start: "09:00".parse().unwrap(),
            end: "10:00".parse().unwrap(),
        }],
        overrides: vec![],
    };
    let params = EventParams {
        duration_min: 60,
        step_min: 60,
        buffer_before_min: 0,
        buffer_after_min: 0,
        minimum_notice_min: 0,
        max_days_in_future: None,
        limits: FrequencyLimits::default(),
    };
    let clock = FixedClock(Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap());

    let slots = generate_range(
        &schedule,
        &params,
        &[],
        Utc.with_ymd_and_hms(2026, 3, 2, 0, 0, 0).unwrap(),
        Utc.with_ymd_and_hms(2026, 3, 10, 0, 0, 0).unwrap(),
        &clock,
    )
    .expect("should generate");

    assert_eq!(slots.len(), 2, "one slot per Monday in range");

    // Mar 2: 09:00 PST == 17:00 UTC.
    assert_eq!(
        slots[0].start,
        Utc.with_ymd_and_hms(2026, 3, 2, 17, 0, 0).unwrap()
    );
    // Mar 9: 09:00 PDT == 16:00 UTC.
    assert_eq!(
        slots[1].start,
        Utc.with_ymd_and_hms(2026, 3, 9, 16, 0, 0).unwrap()
    );

    assert_eq!(slots[0].start.hour(), 9);
    assert_eq!(slots[1].start.hour(), 9);
}
