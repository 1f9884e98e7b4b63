//! Wall clock time as the renderer sees it.
//!
//! The time source only has whole seconds. To animate between them, we remember the host's
//! millisecond counter at the moment the second last changed. Now is roughly that second plus
//! however many ms the counter has moved since.
use crate::errors::{ClockResult, TimeField};

/// ms in a second
pub const SECOND_MS: u32 = 1_000;

/// ms in a minute
pub const MINUTE_MS: u32 = 60 * SECOND_MS;

/// What a time source hands us once per tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimeReading {
    /// 0-23
    pub hour: u8,
    /// 0-59
    pub minute: u8,
    /// 0-59
    pub second: u8,
    /// false until the source has synced (gps fix, ntp, rtc, ...)
    pub valid: bool,
}

impl TimeReading {
    pub const fn new(hour: u8, minute: u8, second: u8) -> Self {
        Self {
            hour,
            minute,
            second,
            valid: true,
        }
    }

    pub const fn invalid() -> Self {
        Self {
            hour: 0,
            minute: 0,
            second: 0,
            valid: false,
        }
    }
}

/// Anything that knows the wall clock time. The host polls it, the renderer never does.
pub trait TimeSource {
    fn now(&mut self) -> TimeReading;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimeState {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub valid: bool,
    /// the host's ms counter when `second` last changed
    pub phase_origin_ms: u32,
}

impl TimeState {
    /// midnight, but not valid yet
    pub const fn new() -> Self {
        Self {
            hour: 0,
            minute: 0,
            second: 0,
            valid: false,
            phase_origin_ms: 0,
        }
    }

    /// Out of range values wrap (25 o'clock is 1 o'clock).
    ///
    /// Returns true if this started a new second and moved the phase origin.
    pub fn set(&mut self, now_ms: u32, hour: u8, minute: u8, second: u8) -> bool {
        let hour = hour % TimeField::Hour.limit();
        let minute = minute % TimeField::Minute.limit();
        let second = second % TimeField::Second.limit();

        let new_second = !self.valid || second != self.second;

        if new_second {
            self.phase_origin_ms = now_ms;
        }

        self.hour = hour;
        self.minute = minute;
        self.second = second;
        self.valid = true;

        new_second
    }

    /// Like `set`, but out of range values are an error and leave the state alone.
    pub fn try_set(&mut self, now_ms: u32, hour: u8, minute: u8, second: u8) -> ClockResult<bool> {
        let hour = TimeField::Hour.check(hour)?;
        let minute = TimeField::Minute.check(minute)?;
        let second = TimeField::Second.check(second)?;

        Ok(self.set(now_ms, hour, minute, second))
    }

    /// ms since the current second started. 0-999.
    ///
    /// The counter is allowed to wrap. A counter that went slightly backwards counts as 0.
    pub fn subsecond_ms(&self, now_ms: u32) -> u32 {
        let ms = now_ms.wrapping_sub(self.phase_origin_ms) as i32;

        ms.clamp(0, SECOND_MS as i32 - 1) as u32
    }

    /// ms since the current minute started. 0-59_999.
    pub fn minute_elapsed_ms(&self, now_ms: u32) -> u32 {
        self.second as u32 * SECOND_MS + self.subsecond_ms(now_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ClockError;

    #[test]
    fn test_starts_invalid() {
        let state = TimeState::new();

        assert!(!state.valid);
        assert_eq!((state.hour, state.minute, state.second), (0, 0, 0));
    }

    #[test]
    fn test_first_set_anchors_phase() {
        let mut state = TimeState::new();

        // second 0 matches the initial value, but the first set still counts as a new second
        assert!(state.set(1_234, 12, 0, 0));
        assert!(state.valid);
        assert_eq!(state.phase_origin_ms, 1_234);
    }

    #[test]
    fn test_phase_only_moves_on_new_second() {
        let mut state = TimeState::new();

        assert!(state.set(100, 1, 2, 3));
        assert!(!state.set(400, 1, 2, 3));
        assert_eq!(state.phase_origin_ms, 100);

        assert!(state.set(1_050, 1, 2, 4));
        assert_eq!(state.phase_origin_ms, 1_050);

        // a new minute with the same second number doesn't move the phase
        assert!(!state.set(1_200, 1, 3, 4));
        assert_eq!(state.phase_origin_ms, 1_050);
        assert_eq!(state.minute, 3);
    }

    #[test]
    fn test_set_wraps() {
        let mut state = TimeState::new();

        state.set(0, 25, 61, 75);

        assert_eq!((state.hour, state.minute, state.second), (1, 1, 15));
    }

    #[test]
    fn test_try_set_rejects() {
        let mut state = TimeState::new();

        assert_eq!(
            state.try_set(0, 10, 60, 0),
            Err(ClockError::InvalidTimeValue {
                field: TimeField::Minute,
                value: 60
            })
        );
        assert_eq!(state, TimeState::new());

        assert_eq!(state.try_set(5, 23, 59, 59), Ok(true));
        assert_eq!((state.hour, state.minute, state.second), (23, 59, 59));
    }

    #[test]
    fn test_subsecond_clamps() {
        let mut state = TimeState::new();
        state.set(10_000, 0, 0, 0);

        assert_eq!(state.subsecond_ms(10_000), 0);
        assert_eq!(state.subsecond_ms(10_250), 250);
        assert_eq!(state.subsecond_ms(10_999), 999);
        assert_eq!(state.subsecond_ms(15_000), 999);
        // slightly behind the origin
        assert_eq!(state.subsecond_ms(9_990), 0);
    }

    #[test]
    fn test_subsecond_counter_wraps() {
        let mut state = TimeState::new();
        state.set(u32::MAX - 99, 0, 0, 0);

        assert_eq!(state.subsecond_ms(u32::MAX), 99);
        assert_eq!(state.subsecond_ms(200), 300);
    }

    #[test]
    fn test_minute_elapsed() {
        let mut state = TimeState::new();
        state.set(500, 0, 10, 58);

        assert_eq!(state.minute_elapsed_ms(500), 58_000);
        assert_eq!(state.minute_elapsed_ms(1_300), 58_800);
        assert_eq!(state.minute_elapsed_ms(9_000), 58_999);
    }
}
