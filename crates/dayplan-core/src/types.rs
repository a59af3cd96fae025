//! Core type definitions with validation.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Validation errors for user-supplied event data.
///
/// Both variants are local, recoverable conditions: the caller corrects the
/// input and retries. Nothing in this crate produces a transient or fatal
/// error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The activity label was missing or all whitespace.
    #[error("activity label cannot be empty")]
    EmptyLabel,

    /// The interval would have zero or negative duration.
    #[error("end minute {end_minute} must be after start minute {start_minute}")]
    NonPositiveDuration { start_minute: u16, end_minute: u16 },
}

/// A validated activity name.
///
/// Labels are non-empty after trimming surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Label(String);

impl Label {
    /// Creates a label after validation, trimming surrounding whitespace.
    pub fn new(label: impl Into<String>) -> Result<Self, ValidationError> {
        let label = label.into();
        let trimmed = label.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyLabel);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the label text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Label {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Label {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
