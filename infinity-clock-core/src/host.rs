//! Glue for whatever owns the lights. Call `tick` once per frame.
use smart_leds::{RGB8, SmartLedsWrite};

use crate::config::ClockConfig;
use crate::lights::{ClockRenderer, ColorBuffer};
use crate::logging::info;
use crate::time::TimeSource;

pub struct ClockHost<S, W> {
    renderer: ClockRenderer,
    source: S,
    driver: W,
    frames: u64,
}

impl<S, W> ClockHost<S, W>
where
    S: TimeSource,
    W: SmartLedsWrite<Color = RGB8>,
{
    pub fn new(config: ClockConfig, source: S, driver: W) -> Self {
        info!("starting {}", ClockRenderer::NAME);

        Self {
            renderer: ClockRenderer::new(config),
            source,
            driver,
            frames: 0,
        }
    }

    /// poll the time source, draw a frame, and send it to the lights
    pub fn tick(&mut self, now_ms: u32) -> Result<ColorBuffer, W::Error> {
        let reading = self.source.now();

        self.renderer.update(now_ms, reading);

        let fbuf = self.renderer.render(now_ms);

        fbuf.write_to(&mut self.driver)?;

        self.frames += 1;

        Ok(fbuf)
    }

    pub fn renderer(&self) -> &ClockRenderer {
        &self.renderer
    }

    pub fn driver(&self) -> &W {
        &self.driver
    }

    /// frames successfully sent to the driver
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn into_parts(self) -> (ClockRenderer, S, W) {
        (self.renderer, self.source, self.driver)
    }
}
