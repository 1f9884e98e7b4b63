use std::time::{Duration, Instant};

use chrono::{Local, Timelike};
use infinity_clock_core::time::{TimeReading, TimeSource};

/// The computer's clock. It can pretend to take a while to sync so the loading spinner shows.
pub struct LocalTime {
    started: Instant,
    sync_delay: Duration,
}

impl LocalTime {
    pub fn new(sync_delay: Duration) -> Self {
        Self {
            started: Instant::now(),
            sync_delay,
        }
    }
}

impl TimeSource for LocalTime {
    fn now(&mut self) -> TimeReading {
        if self.started.elapsed() < self.sync_delay {
            return TimeReading::invalid();
        }

        let now = Local::now();

        TimeReading::new(now.hour() as u8, now.minute() as u8, now.second() as u8)
    }
}
