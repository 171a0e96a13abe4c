//! Busy-time normalization.
//!
//! Busy blocks arrive from connected calendars as arbitrary, possibly
//! overlapping UTC intervals. The generator wants one sorted, disjoint list
//! so the per-candidate conflict check is a plain scan.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// An opaque busy interval `[start, end)` from a connected calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusyBlock {
    /// Start of the busy period.
    pub start: DateTime<Utc>,
    /// End of the busy period (exclusive).
    pub end: DateTime<Utc>,
}

impl BusyBlock {
    /// Two intervals overlap iff a.start < b.end AND b.start < a.end.
    ///
    /// Half-open semantics: a block ending exactly when the candidate
    /// starts does not collide, and neither does one starting exactly at
    /// the candidate's end.
    pub fn overlaps<Tz: TimeZone>(&self, start: &DateTime<Tz>, end: &DateTime<Tz>) -> bool {
        *start < self.end && self.start < *end
    }
}

/// Merges busy blocks into maximal disjoint blocks, sorted by start.
///
/// Overlapping blocks coalesce, and so do back-to-back blocks
/// (`next.start == current.end`): adjacency leaves no usable seam between
/// them.
///
/// Merging is an optimization only. Generating against the raw, unmerged
/// list yields the same slots; the merged form just keeps the per-candidate
/// scan short.
pub fn merge_busy_blocks(blocks: &[BusyBlock]) -> Vec<BusyBlock> {
    if blocks.is_empty() {
        return Vec::new();
    }

    let mut sorted = blocks.to_vec();
    sorted.sort_by_key(|b| (b.start, b.end));

    let mut merged: Vec<BusyBlock> = Vec::with_capacity(sorted.len());
    for block in sorted {
        if let Some(last) = merged.last_mut() {
            if block.start <= last.end {
                last.end = last.end.max(block.end);
                continue;
            }
        }
        merged.push(block);
    }
    merged
}
