//! Post-filters: booking-frequency caps and the future horizon.

use chrono::{DateTime, Datelike, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::generator::Slot;
use crate::providers::BookingStore;

/// Optional caps on accepted bookings per calendar bucket.
///
/// `None` means uncapped. Buckets follow the schedule timezone: the civil
/// date of a slot's start decides its day, ISO week, and month.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyLimits {
    #[serde(default)]
    pub per_day: Option<u32>,
    #[serde(default)]
    pub per_week: Option<u32>,
    #[serde(default)]
    pub per_month: Option<u32>,
}

impl FrequencyLimits {
    /// Whether no cap is configured at all.
    pub fn is_unlimited(&self) -> bool {
        self.per_day.is_none() && self.per_week.is_none() && self.per_month.is_none()
    }
}

/// Drops slots on dates whose existing booking count already meets or
/// exceeds a configured cap.
///
/// Counts come from the hosting service's booking store and cover accepted
/// bookings only; slots produced in the current generation pass do not
/// count against each other.
pub fn apply_frequency_limits(
    slots: Vec<Slot>,
    limits: &FrequencyLimits,
    bookings: &dyn BookingStore,
) -> Vec<Slot> {
    if limits.is_unlimited() {
        return slots;
    }

    slots
        .into_iter()
        .filter(|slot| {
            let date = slot.start.date_naive();
            if let Some(cap) = limits.per_day {
                if bookings.day_count(date) >= cap {
                    return false;
                }
            }
            if let Some(cap) = limits.per_week {
                let week = date.iso_week();
                if bookings.week_count(week.year(), week.week()) >= cap {
                    return false;
                }
            }
            if let Some(cap) = limits.per_month {
                if bookings.month_count(date.year(), date.month()) >= cap {
                    return false;
                }
            }
            true
        })
        .collect()
}

/// Drops slots that start beyond `now + max_days` days.
///
/// `None` disables the horizon. A slot starting exactly on the boundary is
/// kept.
pub fn apply_horizon(slots: Vec<Slot>, now: DateTime<Utc>, max_days: Option<u32>) -> Vec<Slot> {
    let Some(days) = max_days else {
        return slots;
    };
    let boundary = now + Duration::days(i64::from(days));
    slots
        .into_iter()
        .filter(|slot| slot.start <= boundary)
        .collect()
}
