use core::fmt;

use thiserror::Error;

/// Which part of a wall clock time was bad
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimeField {
    Hour,
    Minute,
    Second,
}

impl TimeField {
    /// values must be strictly less than this
    pub const fn limit(self) -> u8 {
        match self {
            Self::Hour => 24,
            Self::Minute | Self::Second => 60,
        }
    }

    pub fn check(self, value: u8) -> ClockResult<u8> {
        if value < self.limit() {
            Ok(value)
        } else {
            Err(ClockError::InvalidTimeValue { field: self, value })
        }
    }
}

impl fmt::Display for TimeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hour => f.write_str("hour"),
            Self::Minute => f.write_str("minute"),
            Self::Second => f.write_str("second"),
        }
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockError {
    #[error("{field} {value} is out of range (expected < {})", .field.limit())]
    InvalidTimeValue { field: TimeField, value: u8 },
}

pub type ClockResult<T> = Result<T, ClockError>;
