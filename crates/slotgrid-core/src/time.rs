//! Local wall-clock primitives: time of day and availability windows.
//!
//! These types carry no timezone. They describe what a schedule owner wrote
//! down ("09:00 to 17:00"); the generator resolves them against a civil date
//! and an IANA zone to obtain instants.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SlotError};

/// A wall-clock time of day with minute precision.
///
/// Parses from `"HH:MM"`. A trailing `":SS"` component is accepted on input
/// and discarded; serialization always emits `"HH:MM"`. Ordering is by
/// minutes from midnight, so `"09:00" < "17:00"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LocalTimeOfDay {
    hour: u8,
    minute: u8,
}

impl LocalTimeOfDay {
    /// Creates a time of day, rejecting out-of-range components.
    ///
    /// # Errors
    ///
    /// Returns [`SlotError::InvalidTime`] if `hour > 23` or `minute > 59`.
    pub fn new(hour: u8, minute: u8) -> Result<Self> {
        if hour > 23 || minute > 59 {
            return Err(SlotError::InvalidTime(format!("{hour:02}:{minute:02}")));
        }
        Ok(Self { hour, minute })
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Minutes since midnight, the canonical ordering key.
    pub fn minutes_from_midnight(&self) -> u16 {
        u16::from(self.hour) * 60 + u16::from(self.minute)
    }
}

impl FromStr for LocalTimeOfDay {
    type Err = SlotError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || SlotError::InvalidTime(s.to_string());
        let mut parts = s.split(':');
        let hour = parts.next().ok_or_else(invalid)?;
        let minute = parts.next().ok_or_else(invalid)?;
        if let Some(seconds) = parts.next() {
            // Seconds carry no meaning for scheduling but must still be well formed.
            let seconds: u8 = seconds.parse().map_err(|_| invalid())?;
            if seconds > 59 {
                return Err(invalid());
            }
        }
        if parts.next().is_some() {
            return Err(invalid());
        }
        let hour: u8 = hour.parse().map_err(|_| invalid())?;
        let minute: u8 = minute.parse().map_err(|_| invalid())?;
        Self::new(hour, minute).map_err(|_| invalid())
    }
}

impl fmt::Display for LocalTimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl TryFrom<String> for LocalTimeOfDay {
    type Error = SlotError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<LocalTimeOfDay> for String {
    fn from(value: LocalTimeOfDay) -> Self {
        value.to_string()
    }
}

/// A half-open local availability window `[start, end)`.
///
/// Well-formed windows have `start < end`; schedule validation enforces this
/// before any window reaches the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalWindow {
    pub start: LocalTimeOfDay,
    pub end: LocalTimeOfDay,
}

impl LocalWindow {
    /// Window length in minutes.
    pub fn minutes(&self) -> u16 {
        self.end.minutes_from_midnight() - self.start.minutes_from_midnight()
    }

    /// Whether a time of day falls inside the window. The end boundary is
    /// excluded.
    pub fn contains(&self, time: LocalTimeOfDay) -> bool {
        self.start <= time && time < self.end
    }

    /// Two windows overlap iff a.start < b.end AND b.start < a.end.
    pub fn overlaps(&self, other: &LocalWindow) -> bool {
        self.start < other.end && other.start < self.end
    }
}
