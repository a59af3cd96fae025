//! Timeline compilation: projecting events onto the day's minute grid.
//!
//! `compile` is the only non-trivial logic in the repository. It paints each
//! event over a 1440-slot minute grid in insertion order, so later events
//! overwrite earlier ones wherever they overlap, then run-length-encodes the
//! grid into contiguous labeled segments covering the whole day.

use std::fmt;

use serde::{Serialize, Serializer};
use tracing::debug;

use crate::event::Event;
use crate::types::Label;

/// Number of minutes in the day grid.
pub const MINUTES_PER_DAY: u16 = 1440;

/// Sentinel text for minutes not covered by any event.
pub const UNSCHEDULED: &str = "unscheduled";

/// Label of a compiled segment: an activity, or the unscheduled sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SegmentLabel {
    Activity(Label),
    Unscheduled,
}

impl SegmentLabel {
    /// Returns the activity name, or the sentinel for unscheduled time.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Activity(label) => label.as_str(),
            Self::Unscheduled => UNSCHEDULED,
        }
    }

    /// Whether this is the unscheduled sentinel.
    #[must_use]
    pub const fn is_unscheduled(&self) -> bool {
        matches!(self, Self::Unscheduled)
    }
}

impl fmt::Display for SegmentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for SegmentLabel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

/// A maximal run of consecutive minutes sharing one label.
///
/// Segments from a single compilation are contiguous, non-overlapping,
/// ordered by `start_minute`, and collectively cover exactly `[0, 1440)`.
/// They are pure output of one compile pass and carry no identity across
/// recompilations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub label: SegmentLabel,
    pub start_minute: u16,
    pub length_minutes: u16,
}

impl Segment {
    /// Exclusive offset from midnight where the run ends.
    #[must_use]
    pub const fn end_minute(&self) -> u16 {
        self.start_minute + self.length_minutes
    }
}

/// Projects events onto the minute grid and collapses it into segments.
///
/// Events are painted in the given order (insertion order is the override
/// priority): later events win wherever two intervals overlap. Minutes at or
/// past the day boundary are silently truncated, not an error. The result
/// always covers the full day in order; with no events it is a single
/// unscheduled segment.
///
/// Pure and deterministic: the same event list always yields the same
/// segment sequence, with no wall-clock or global-state dependence.
#[must_use]
pub fn compile(events: &[Event]) -> Vec<Segment> {
    // Local allocation scoped to this call, never shared or reused.
    let mut grid: Vec<Option<&Label>> = vec![None; usize::from(MINUTES_PER_DAY)];

    for event in events {
        // The Event constructor guarantees start < end; a violation here is
        // a store bug, not user input.
        debug_assert!(event.start_minute() < event.end_minute());
        let start = usize::from(event.start_minute()).min(grid.len());
        let end = usize::from(event.end_minute()).min(grid.len());
        for slot in &mut grid[start..end] {
            *slot = Some(event.label());
        }
    }

    let mut segments = Vec::new();
    let Some(first) = grid.first() else {
        return segments;
    };

    let mut current = *first;
    let mut run_start = 0u16;
    for minute in 1..MINUTES_PER_DAY {
        let slot = grid[usize::from(minute)];
        if slot != current {
            segments.push(close_run(current, run_start, minute));
            current = slot;
            run_start = minute;
        }
    }
    segments.push(close_run(current, run_start, MINUTES_PER_DAY));

    debug!(
        events = events.len(),
        segments = segments.len(),
        "timeline compiled"
    );
    segments
}

fn close_run(label: Option<&Label>, start_minute: u16, end_minute: u16) -> Segment {
    Segment {
        label: label.map_or(SegmentLabel::Unscheduled, |label| {
            SegmentLabel::Activity(label.clone())
        }),
        start_minute,
        length_minutes: end_minute - start_minute,
    }
}
