//! # slotgrid-core
//!
//! Availability resolution and DST-correct bookable-slot generation.
//!
//! The engine turns a schedule (weekly rules plus date overrides, read in
//! the schedule's IANA timezone), an event type's booking constraints, and
//! busy time pulled from connected calendars into a chronologically ordered
//! list of bookable slots. Every local-time resolution goes through the
//! zone database via `chrono-tz`, so generated slots stay correct across
//! DST transitions.
//!
//! ## Modules
//!
//! - [`time`] — Local time-of-day and window primitives
//! - [`schedule`] — Weekly rules, date overrides, validation
//! - [`resolver`] — Effective windows for a civil date
//! - [`busy`] — Busy-block normalization
//! - [`generator`] — Candidate walk per day, range orchestration
//! - [`limiter`] — Frequency and horizon post-filters
//! - [`clock`] — Injectable time source
//! - [`providers`] — Ports to schedule, calendar, and booking stores
//! - [`error`] — Error types
//!
//! ## Quick start
//!
//! ```
//! use chrono::{TimeZone, Utc, Weekday};
//! use slotgrid_core::{
//!     generate_range, EventParams, FixedClock, FrequencyLimits, Schedule, WeeklyRule,
//! };
//!
//! let schedule = Schedule {
//!     timezone: "America/New_York".to_string(),
//!     owner: "demo".to_string(),
//!     weekly_rules: vec![WeeklyRule {
//!         weekday: Weekday::Mon,
//!         start: "09:00".parse()?,
//!         end: "17:00".parse()?,
//!     }],
//!     overrides: vec![],
//! };
//! let params = EventParams {
//!     duration_min: 30,
//!     step_min: 30,
//!     buffer_before_min: 0,
//!     buffer_after_min: 0,
//!     minimum_notice_min: 0,
//!     max_days_in_future: None,
//!     limits: FrequencyLimits::default(),
//! };
//! let clock = FixedClock(Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap());
//!
//! // Monday 2026-03-02, Eastern time: 09:00-17:00 at a 30-minute step.
//! let slots = generate_range(
//!     &schedule,
//!     &params,
//!     &[],
//!     Utc.with_ymd_and_hms(2026, 3, 2, 5, 0, 0).unwrap(),
//!     Utc.with_ymd_and_hms(2026, 3, 3, 4, 59, 59).unwrap(),
//!     &clock,
//! )?;
//! assert_eq!(slots.len(), 16);
//! # Ok::<(), slotgrid_core::SlotError>(())
//! ```

pub mod busy;
pub mod clock;
pub mod error;
pub mod generator;
pub mod limiter;
pub mod providers;
pub mod resolver;
pub mod schedule;
pub mod time;

pub use busy::{merge_busy_blocks, BusyBlock};
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{Result, SlotError};
pub use generator::{
    generate_day_slots, generate_range, EventParams, GenerationParams, Slot, MAX_RANGE_DAYS,
};
pub use limiter::{apply_frequency_limits, apply_horizon, FrequencyLimits};
pub use providers::{BookingStore, CalendarEvent, CalendarProvider, ProviderKind, ScheduleStore};
pub use resolver::resolve_windows;
pub use schedule::{DateOverride, Schedule, WeeklyRule};
pub use time::{LocalTimeOfDay, LocalWindow};
