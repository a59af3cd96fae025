//! Wall-clock parsing and formatting for minute-of-day offsets.
//!
//! The core works in integer minute offsets; users type `HH:MM`. This module
//! converts between the two at the presentation boundary.

use anyhow::Context;
use chrono::{NaiveTime, Timelike};

use dayplan_core::MINUTES_PER_DAY;

/// Parses a time of day as `HH:MM` or a bare minute offset.
///
/// `24:00` is accepted as the end-of-day boundary (minute 1440).
pub fn parse_minute(s: &str) -> anyhow::Result<u16> {
    let s = s.trim();
    if s == "24:00" {
        return Ok(MINUTES_PER_DAY);
    }
    if s.contains(':') {
        let time = NaiveTime::parse_from_str(s, "%H:%M")
            .with_context(|| format!("invalid time {s:?}, expected HH:MM (e.g., 09:30)"))?;
        return Ok(u16::try_from(time.hour() * 60 + time.minute())?);
    }
    s.parse()
        .with_context(|| format!("invalid time {s:?}, expected HH:MM or a minute offset"))
}

/// Formats a minute-of-day offset as `HH:MM`; minute 1440 renders as `24:00`.
#[must_use]
pub fn format_minute(minute: u16) -> String {
    format!("{:02}:{:02}", minute / 60, minute % 60)
}
