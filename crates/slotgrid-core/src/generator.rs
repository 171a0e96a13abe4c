//! Slot generation: the candidate walk for one day and range orchestration.
//!
//! All arithmetic here is zoned-instant arithmetic: a candidate advances by
//! adding minutes to an instant, never by incrementing a naive local clock.
//! Across a DST transition the local labels therefore skip or repeat exactly
//! as the zone database dictates.

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::busy::{merge_busy_blocks, BusyBlock};
use crate::clock::Clock;
use crate::error::{Result, SlotError};
use crate::limiter::{apply_horizon, FrequencyLimits};
use crate::resolver::resolve_windows;
use crate::schedule::Schedule;
use crate::time::{LocalTimeOfDay, LocalWindow};

/// Longest range [`generate_range`] accepts, in days.
pub const MAX_RANGE_DAYS: i64 = 731;

/// A bookable slot, tagged with the schedule's timezone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Slot {
    /// Start instant.
    pub start: DateTime<Tz>,
    /// End instant; always start plus the configured duration.
    pub end: DateTime<Tz>,
}

impl Slot {
    /// Slot length in real minutes.
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}

/// Day-level generation parameters, with the notice cutoff already resolved
/// to an absolute instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationParams {
    /// Slot length in minutes.
    pub duration_min: u32,
    /// Distance between candidate starts in minutes.
    pub step_min: u32,
    /// Protected minutes before each slot.
    pub buffer_before_min: u32,
    /// Protected minutes after each slot.
    pub buffer_after_min: u32,
    /// No slot may start before this instant.
    pub notice_cutoff: DateTime<Utc>,
}

impl GenerationParams {
    /// # Errors
    ///
    /// Returns [`SlotError::InvalidParams`] when duration or step is zero.
    pub fn validate(&self) -> Result<()> {
        if self.duration_min == 0 {
            return Err(SlotError::InvalidParams(
                "duration must be positive".to_string(),
            ));
        }
        if self.step_min == 0 {
            return Err(SlotError::InvalidParams("step must be positive".to_string()));
        }
        Ok(())
    }
}

/// Per-event-type booking constraints, as a hosting service stores them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventParams {
    /// Slot length in minutes.
    pub duration_min: u32,
    /// Distance between candidate starts in minutes. Independent of the
    /// duration: a smaller step yields overlapping candidates, a larger one
    /// leaves gaps between slots.
    pub step_min: u32,
    /// Protected minutes before each slot.
    #[serde(default)]
    pub buffer_before_min: u32,
    /// Protected minutes after each slot.
    #[serde(default)]
    pub buffer_after_min: u32,
    /// Minimum lead time in minutes between "now" and a bookable start.
    #[serde(default)]
    pub minimum_notice_min: u32,
    /// How far into the future slots may start, in days from "now".
    #[serde(default)]
    pub max_days_in_future: Option<u32>,
    /// Booking-frequency caps, applied by the post-filter.
    #[serde(default)]
    pub limits: FrequencyLimits,
}

impl EventParams {
    /// # Errors
    ///
    /// Returns [`SlotError::InvalidParams`] when duration or step is zero.
    pub fn validate(&self) -> Result<()> {
        if self.duration_min == 0 {
            return Err(SlotError::InvalidParams(
                "duration must be positive".to_string(),
            ));
        }
        if self.step_min == 0 {
            return Err(SlotError::InvalidParams("step must be positive".to_string()));
        }
        Ok(())
    }

    /// Lowers to day-level params by resolving the notice cutoff against
    /// `now`.
    pub fn at(&self, now: DateTime<Utc>) -> GenerationParams {
        GenerationParams {
            duration_min: self.duration_min,
            step_min: self.step_min,
            buffer_before_min: self.buffer_before_min,
            buffer_after_min: self.buffer_after_min,
            notice_cutoff: now + Duration::minutes(i64::from(self.minimum_notice_min)),
        }
    }
}

/// Generates the bookable slots for one civil date, in start order.
///
/// Each window is walked independently: candidates begin at the window's
/// resolved start and advance by `step_min` while a full slot still fits
/// before the window end. A candidate is dropped when it starts before the
/// notice cutoff, or when its buffered footprint
/// `[start - buffer_before, end + buffer_after)` overlaps a busy block.
/// Buffers pad the footprint only; emitted slots are always exactly
/// `duration_min` long.
///
/// A window whose start or end does not resolve to a unique instant on
/// `date` (a spring-forward gap or a fall-back repeat) is skipped whole.
/// Inside a resolvable window the walk follows instant arithmetic, so a
/// window spanning a transition yields candidates whose local labels jump
/// with the offset change.
///
/// # Arguments
///
/// * `date` — The civil date, in the schedule's timezone.
/// * `windows` — Resolved availability windows for that date.
/// * `params` — Day-level parameters, notice cutoff included.
/// * `busy` — Busy blocks to exclude against; pass the output of
///   [`merge_busy_blocks`] so the scan sees disjoint intervals.
/// * `tz` — The schedule's timezone.
///
/// # Errors
///
/// Returns [`SlotError::InvalidParams`] when duration or step is zero.
pub fn generate_day_slots(
    date: NaiveDate,
    windows: &[LocalWindow],
    params: &GenerationParams,
    busy: &[BusyBlock],
    tz: Tz,
) -> Result<Vec<Slot>> {
    params.validate()?;

    let duration = Duration::minutes(i64::from(params.duration_min));
    let step = Duration::minutes(i64::from(params.step_min));
    let buffer_before = Duration::minutes(i64::from(params.buffer_before_min));
    let buffer_after = Duration::minutes(i64::from(params.buffer_after_min));

    let mut slots = Vec::new();
    for window in windows {
        // Both boundaries must resolve to unique instants, or the window is
        // skipped for this date.
        let (Some(window_start), Some(window_end)) = (
            resolve_local(date, window.start, tz),
            resolve_local(date, window.end, tz),
        ) else {
            continue;
        };

        let mut candidate_start = window_start;
        while candidate_start + duration <= window_end {
            let candidate_end = candidate_start + duration;
            if candidate_start >= params.notice_cutoff {
                let footprint_start = candidate_start - buffer_before;
                let footprint_end = candidate_end + buffer_after;
                let blocked = busy
                    .iter()
                    .any(|b| b.overlaps(&footprint_start, &footprint_end));
                if !blocked {
                    slots.push(Slot {
                        start: candidate_start,
                        end: candidate_end,
                    });
                }
            }
            candidate_start = candidate_start + step;
        }
    }
    Ok(slots)
}

/// Generates ordered slots for an instant range.
///
/// Validates the schedule and params, derives the notice cutoff and the
/// horizon from `clock`, merges `busy_blocks` once, then walks every civil
/// date of the schedule timezone touched by `[from, to]` and concatenates
/// the per-day slots in date order. Running the same inputs twice yields
/// the same slots.
///
/// # Arguments
///
/// * `schedule` — Weekly rules, overrides, and the owning timezone.
/// * `params` — Per-event-type constraints.
/// * `busy_blocks` — Busy time from connected calendars, in any order.
/// * `from`, `to` — The instant range to cover; every schedule-zone date
///   overlapping it is considered.
/// * `clock` — Source of "now".
///
/// # Errors
///
/// Configuration errors ([`SlotError::InvalidTimezone`],
/// [`SlotError::InvalidRule`], [`SlotError::InvalidOverride`],
/// [`SlotError::InvalidParams`]) and range errors
/// ([`SlotError::InvalidRange`] when `to < from` or the span exceeds
/// [`MAX_RANGE_DAYS`]) are reported before any generation work. A schedule
/// with no applicable windows is not an error: the result is simply empty.
pub fn generate_range(
    schedule: &Schedule,
    params: &EventParams,
    busy_blocks: &[BusyBlock],
    from: DateTime<Utc>,
    to: DateTime<Utc>,
    clock: &dyn Clock,
) -> Result<Vec<Slot>> {
    schedule.validate()?;
    params.validate()?;
    if to < from {
        return Err(SlotError::InvalidRange(format!(
            "range end {} is before range start {}",
            to, from
        )));
    }
    if to - from > Duration::days(MAX_RANGE_DAYS) {
        return Err(SlotError::InvalidRange(format!(
            "range spans more than {} days",
            MAX_RANGE_DAYS
        )));
    }

    let tz = schedule.tz()?;
    let now = clock.now();
    let day_params = params.at(now);
    let merged = merge_busy_blocks(busy_blocks);

    let first = from.with_timezone(&tz).date_naive();
    let last = to.with_timezone(&tz).date_naive();

    let mut slots = Vec::new();
    for date in first.iter_days() {
        if date > last {
            break;
        }
        let windows = resolve_windows(schedule, date);
        if windows.is_empty() {
            continue;
        }
        slots.extend(generate_day_slots(date, &windows, &day_params, &merged, tz)?);
    }

    Ok(apply_horizon(slots, now, params.max_days_in_future))
}

/// Resolves a local wall-clock time on a date to a unique instant in `tz`.
///
/// `None` when the local time does not exist on that date (spring-forward
/// gap) or occurs twice (fall-back repeat).
fn resolve_local(date: NaiveDate, time: LocalTimeOfDay, tz: Tz) -> Option<DateTime<Tz>> {
    let naive = date.and_hms_opt(u32::from(time.hour()), u32::from(time.minute()), 0)?;
    tz.from_local_datetime(&naive).single()
}
