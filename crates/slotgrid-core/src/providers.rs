//! Collaborator ports to the hosting service.
//!
//! The engine is pure; persistence and third-party calendars live behind
//! these traits. Implementations belong to the hosting service — tests use
//! in-memory fakes.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::busy::BusyBlock;
use crate::error::{Result, SlotError};
use crate::schedule::Schedule;

/// Which third-party calendar backs a connection, parsed from the stored
/// provider tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    Google,
    Microsoft,
}

impl FromStr for ProviderKind {
    type Err = SlotError;

    /// Parses a stored provider tag, case-insensitively.
    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "google" => Ok(ProviderKind::Google),
            "microsoft" => Ok(ProviderKind::Microsoft),
            _ => Err(SlotError::UnknownProvider(format!("'{}'", s))),
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderKind::Google => write!(f, "google"),
            ProviderKind::Microsoft => write!(f, "microsoft"),
        }
    }
}

/// An event as the calendar capability surface sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    /// Provider-scoped event id.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Start instant.
    pub start: DateTime<Utc>,
    /// End instant (exclusive).
    pub end: DateTime<Utc>,
}

/// Fetches schedules by id.
pub trait ScheduleStore {
    fn schedule(&self, schedule_id: &str) -> Result<Schedule>;
}

/// The common capability surface over third-party calendars.
///
/// Busy blocks feed generation; the event methods let a booking layer push
/// confirmed bookings back out to the provider. OAuth, webhooks, and
/// transport are the implementation's business.
pub trait CalendarProvider {
    /// Which provider this connection talks to.
    fn kind(&self) -> ProviderKind;

    /// Busy time within `[from, to)`, in no particular order.
    fn busy_blocks(
        &self,
        calendar_id: &str,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<BusyBlock>>;

    fn create_event(&mut self, calendar_id: &str, event: &CalendarEvent) -> Result<()>;

    fn update_event(&mut self, calendar_id: &str, event: &CalendarEvent) -> Result<()>;

    fn delete_event(&mut self, calendar_id: &str, event_id: &str) -> Result<()>;
}

/// Supplies accepted-booking counts for frequency caps.
///
/// Buckets are civil buckets of the schedule timezone; the week bucket is
/// the ISO week.
pub trait BookingStore {
    fn day_count(&self, date: NaiveDate) -> u32;
    fn week_count(&self, year: i32, week: u32) -> u32;
    fn month_count(&self, year: i32, month: u32) -> u32;
}
