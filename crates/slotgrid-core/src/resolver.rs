//! Effective availability windows for a single civil date.

use chrono::{Datelike, NaiveDate};

use crate::schedule::Schedule;
use crate::time::LocalWindow;

/// Resolves the windows in effect on `date`.
///
/// Precedence:
///
/// 1. An override with `is_available == false` blocks the date outright.
/// 2. An override carrying times replaces the weekly rules with exactly
///    that one window.
/// 3. An override with no times, or no override at all, falls through to
///    the weekly rules whose weekday matches, ordered by start time.
///
/// This is pure date-level resolution: no instants, no DST, no busy data.
/// Windows from distinct rules are returned as-is; rules that overlap
/// produce overlapping windows.
pub fn resolve_windows(schedule: &Schedule, date: NaiveDate) -> Vec<LocalWindow> {
    if let Some(over) = schedule.overrides.iter().find(|o| o.date == date) {
        if !over.is_available {
            return Vec::new();
        }
        if let Some(window) = over.window() {
            return vec![window];
        }
        // Available with no replacement times: weekly rules apply unchanged.
    }

    let weekday = date.weekday();
    let mut windows: Vec<LocalWindow> = schedule
        .weekly_rules
        .iter()
        .filter(|rule| rule.weekday == weekday)
        .map(|rule| LocalWindow {
            start: rule.start,
            end: rule.end,
        })
        .collect();
    windows.sort_by_key(|w| w.start);
    windows
}
