//! An analog clock face on a ring of 60 lights.
//!
//! Hands are added on top of each other so that overlapping hands mix. Markers only go on lights
//! that are still dark after the hands are drawn, so they have to be drawn last.
use smart_leds::RGB8;

use super::{ColorBuffer, IndexMapper, LightEffect, scale};
use crate::config::{ClockConfig, LED_COUNT};
use crate::errors::ClockResult;
use crate::logging::{debug, info, trace, warn};
use crate::time::{MINUTE_MS, SECOND_MS, TimeReading, TimeState};

pub struct ClockRenderer {
    config: ClockConfig,
    mapper: IndexMapper,
    time: TimeState,
}

impl Default for ClockRenderer {
    fn default() -> Self {
        Self::new(ClockConfig::default())
    }
}

impl ClockRenderer {
    pub const NAME: &'static str = "Infinity Clock";

    /// Starts out without a time. Until `set_time` is called, `render` shows a loading spinner.
    pub fn new(config: ClockConfig) -> Self {
        let mapper = IndexMapper::new(config.offset);

        Self {
            config,
            mapper,
            time: TimeState::new(),
        }
    }

    pub fn config(&self) -> &ClockConfig {
        &self.config
    }

    pub fn mapper(&self) -> IndexMapper {
        self.mapper
    }

    pub fn time(&self) -> &TimeState {
        &self.time
    }

    /// false until the first time arrives
    pub fn is_valid(&self) -> bool {
        self.time.valid
    }

    /// Out of range values wrap. Use `try_set_time` to reject them instead.
    pub fn set_time(&mut self, now_ms: u32, hour: u8, minute: u8, second: u8) {
        let was_valid = self.time.valid;

        if self.time.set(now_ms, hour, minute, second) {
            trace!("second {} started at {}ms", self.time.second, now_ms);
        }

        if !was_valid {
            info!(
                "clock time is {}:{}:{}. done loading",
                self.time.hour, self.time.minute, self.time.second
            );
        }
    }

    pub fn try_set_time(&mut self, now_ms: u32, hour: u8, minute: u8, second: u8) -> ClockResult<()> {
        let was_valid = self.time.valid;

        match self.time.try_set(now_ms, hour, minute, second) {
            Ok(_) => {
                if !was_valid {
                    info!("clock time is {}:{}:{}. done loading", hour, minute, second);
                }
                Ok(())
            }
            Err(err) => {
                warn!("rejected time {}:{}:{}", hour, minute, second);
                Err(err)
            }
        }
    }

    /// Apply a reading from a time source. Readings the source doesn't trust are skipped.
    ///
    /// Returns true if the reading was used.
    pub fn update(&mut self, now_ms: u32, reading: TimeReading) -> bool {
        if !reading.valid {
            debug!("skipping invalid time reading");
            return false;
        }

        self.set_time(now_ms, reading.hour, reading.minute, reading.second);

        true
    }

    pub fn render(&self, now_ms: u32) -> ColorBuffer {
        if !self.time.valid {
            return self.render_loading(now_ms);
        }

        let mut fbuf = ColorBuffer::new();

        self.draw_hour_hand(&mut fbuf);
        self.draw_minute_hand(&mut fbuf, now_ms);
        self.draw_second_hand(&mut fbuf, now_ms);

        // markers check what the hands lit. hands have to go first
        self.draw_cardinal_markers(&mut fbuf);
        self.draw_five_minute_markers(&mut fbuf);

        trace!("rendered {} lights at {}ms", fbuf.lit_count(), now_ms);

        fbuf
    }

    /// A single light spinning counter-clockwise around the strip. This is strip indexes on purpose.
    fn render_loading(&self, now_ms: u32) -> ColorBuffer {
        let mut fbuf = ColorBuffer::new();

        let step = (now_ms / self.config.loading_step_ms.max(1)) % LED_COUNT as u32;

        fbuf.set_if_off(LED_COUNT - 1 - step as usize, self.config.loading_color);

        fbuf
    }

    fn add(&self, fbuf: &mut ColorBuffer, position: i32, color: RGB8) {
        fbuf.add(self.mapper.map(position), color, self.config.blend);
    }

    fn draw_hour_hand(&self, fbuf: &mut ColorBuffer) {
        let center = (self.time.hour % 12) as i32 * 5;
        let half_width = self.config.hour_half_width as i32;

        for position in (center - half_width)..=(center + half_width) {
            self.add(fbuf, position, self.config.hour_color);
        }
    }

    fn draw_minute_hand(&self, fbuf: &mut ColorBuffer, now_ms: u32) {
        let elapsed = self.time.minute_elapsed_ms(now_ms);

        self.draw_gliding_hand(
            fbuf,
            self.time.minute as i32,
            self.config.minute_color,
            elapsed,
            MINUTE_MS,
            self.config.minute_anim_ms,
        );
    }

    fn draw_second_hand(&self, fbuf: &mut ColorBuffer, now_ms: u32) {
        let elapsed = self.time.subsecond_ms(now_ms);

        self.draw_gliding_hand(
            fbuf,
            self.time.second as i32,
            self.config.second_color,
            elapsed,
            SECOND_MS,
            self.config.second_anim_ms,
        );
    }

    /// Full color on `position` for most of the period. During the last `window_ms`, cross-fade
    /// into `position + 1`.
    fn draw_gliding_hand(
        &self,
        fbuf: &mut ColorBuffer,
        position: i32,
        color: RGB8,
        elapsed_ms: u32,
        period_ms: u32,
        window_ms: u32,
    ) {
        if elapsed_ms < period_ms.saturating_sub(window_ms) {
            self.add(fbuf, position, color);
            return;
        }

        // window_ms can't be 0 here. elapsed_ms is always less than period_ms
        let remaining_ms = period_ms.saturating_sub(elapsed_ms);
        let weight = (255 * remaining_ms / window_ms).min(255) as u8;

        self.add(fbuf, position, scale(color, weight));
        self.add(fbuf, position + 1, scale(color, 255 - weight));
    }

    fn draw_cardinal_markers(&self, fbuf: &mut ColorBuffer) {
        for &position in self.config.cardinal_positions {
            fbuf.set_if_off(self.mapper.map(position), self.config.cardinal_color);
        }
    }

    /// These only show up when something nearby is lit. Otherwise the face gets too busy.
    ///
    /// Only hands and cardinal markers count as nearby. Five minute markers don't light each other.
    fn draw_five_minute_markers(&self, fbuf: &mut ColorBuffer) {
        let radius = self.config.proximity_radius as i32;

        let before = *fbuf;

        for &position in self.config.five_minute_positions {
            let n = self.mapper.map(position);

            if before.is_on(n) {
                continue;
            }

            let nearby_lit = (1..=radius).any(|d| {
                before.is_on(self.mapper.map(position - d))
                    || before.is_on(self.mapper.map(position + d))
            });

            if nearby_lit {
                fbuf.set_if_off(n, self.config.five_minute_color);
            }
        }
    }
}

impl LightEffect for ClockRenderer {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn set_time(&mut self, now_ms: u32, hour: u8, minute: u8, second: u8) {
        ClockRenderer::set_time(self, now_ms, hour, minute, second)
    }

    fn render(&self, now_ms: u32) -> ColorBuffer {
        ClockRenderer::render(self, now_ms)
    }
}
