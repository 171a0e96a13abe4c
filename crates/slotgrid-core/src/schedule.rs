//! Schedule data model: weekly rules, date overrides, validation.
//!
//! A schedule is what an owner configures once and rarely touches: recurring
//! weekly windows plus per-date exceptions, all read in the schedule's IANA
//! timezone. Validation happens here, at the write boundary, so the resolver
//! and generator can assume well-formed input.

use std::collections::HashSet;

use chrono::{NaiveDate, Weekday};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SlotError};
use crate::time::{LocalTimeOfDay, LocalWindow};

/// A recurring availability window on one weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyRule {
    /// Weekday the window recurs on.
    pub weekday: Weekday,
    /// Local wall-clock start.
    pub start: LocalTimeOfDay,
    /// Local wall-clock end (exclusive).
    pub end: LocalTimeOfDay,
}

/// A single-date exception that takes precedence over the weekly rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateOverride {
    /// The civil date the override applies to.
    pub date: NaiveDate,
    /// `false` blocks the whole date regardless of weekly rules.
    pub is_available: bool,
    /// Replacement window start; set together with `end`, or not at all.
    pub start: Option<LocalTimeOfDay>,
    /// Replacement window end; set together with `start`, or not at all.
    pub end: Option<LocalTimeOfDay>,
}

impl DateOverride {
    /// The replacement window, when the override carries one.
    pub fn window(&self) -> Option<LocalWindow> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => Some(LocalWindow { start, end }),
            _ => None,
        }
    }
}

/// An owner's availability pattern, interpreted in one IANA timezone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// IANA timezone name all rule and override times are read in.
    pub timezone: String,
    /// Opaque owner identifier (a user or a business).
    pub owner: String,
    /// Recurring weekly windows. May be empty: the owner is simply never
    /// available through rules.
    #[serde(default)]
    pub weekly_rules: Vec<WeeklyRule>,
    /// Per-date exceptions; at most one per date.
    #[serde(default)]
    pub overrides: Vec<DateOverride>,
}

impl Schedule {
    /// Parses the schedule's IANA timezone.
    ///
    /// # Errors
    ///
    /// Returns [`SlotError::InvalidTimezone`] if the name is not in the tz
    /// database.
    pub fn tz(&self) -> Result<Tz> {
        self.timezone
            .parse::<Tz>()
            .map_err(|_| SlotError::InvalidTimezone(format!("'{}'", self.timezone)))
    }

    /// Checks the schedule is internally consistent.
    ///
    /// Fails fast on configuration a host should never have persisted: an
    /// unknown timezone, a rule or override window that ends at or before
    /// its start, an override that sets only one of its two times, or two
    /// overrides on the same date.
    ///
    /// # Errors
    ///
    /// Returns [`SlotError::InvalidTimezone`], [`SlotError::InvalidRule`],
    /// or [`SlotError::InvalidOverride`] naming the offending entry.
    pub fn validate(&self) -> Result<()> {
        self.tz()?;

        for rule in &self.weekly_rules {
            if rule.end <= rule.start {
                return Err(SlotError::InvalidRule(format!(
                    "{} window {}-{} ends at or before it starts",
                    rule.weekday, rule.start, rule.end
                )));
            }
        }

        let mut seen_dates = HashSet::new();
        for over in &self.overrides {
            match (over.start, over.end) {
                (Some(start), Some(end)) if end <= start => {
                    return Err(SlotError::InvalidOverride(format!(
                        "{} window {}-{} ends at or before it starts",
                        over.date, start, end
                    )));
                }
                (Some(_), None) | (None, Some(_)) => {
                    return Err(SlotError::InvalidOverride(format!(
                        "{} sets only one of start/end",
                        over.date
                    )));
                }
                _ => {}
            }
            if !seen_dates.insert(over.date) {
                return Err(SlotError::InvalidOverride(format!(
                    "duplicate override for {}",
                    over.date
                )));
            }
        }

        Ok(())
    }
}
