//! User-declared activity intervals.

use serde::Serialize;

use crate::types::{Label, ValidationError};

/// One activity interval within the day.
///
/// Fields are private so that every constructed event satisfies
/// `start_minute < end_minute`. Events are immutable once created; the only
/// way one leaves the system is a full store clear.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Event {
    label: Label,
    start_minute: u16,
    end_minute: u16,
}

impl Event {
    /// Creates an event after validating the interval.
    ///
    /// Ends past minute 1440 are accepted here; the timeline compiler clamps
    /// them at the day boundary.
    pub fn new(label: Label, start_minute: u16, end_minute: u16) -> Result<Self, ValidationError> {
        if start_minute >= end_minute {
            return Err(ValidationError::NonPositiveDuration {
                start_minute,
                end_minute,
            });
        }
        Ok(Self {
            label,
            start_minute,
            end_minute,
        })
    }

    /// The activity name.
    pub fn label(&self) -> &Label {
        &self.label
    }

    /// Offset from midnight where the interval begins.
    pub const fn start_minute(&self) -> u16 {
        self.start_minute
    }

    /// Exclusive offset from midnight where the interval ends.
    pub const fn end_minute(&self) -> u16 {
        self.end_minute
    }

    /// Interval length in minutes.
    pub const fn duration_minutes(&self) -> u16 {
        self.end_minute - self.start_minute
    }
}
