use core::ops::Index;

use smart_leds::{RGB8, SmartLedsWrite, colors::BLACK};

use super::{BlendMode, blend};
use crate::config::LED_COUNT;

/// One frame for the whole strip. Indexes are strip indexes, not o'clock positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorBuffer([RGB8; LED_COUNT]);

impl Default for ColorBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorBuffer {
    /// all black
    pub const fn new() -> Self {
        Self([BLACK; LED_COUNT])
    }

    pub fn is_on(&self, n: usize) -> bool {
        blend::is_on(self.0[n])
    }

    pub fn lit_count(&self) -> usize {
        self.iter().filter(|x| blend::is_on(**x)).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RGB8> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[RGB8] {
        &self.0
    }

    pub fn into_inner(self) -> [RGB8; LED_COUNT] {
        self.0
    }

    /// mix with whatever is already there
    pub(crate) fn add(&mut self, n: usize, color: RGB8, mode: BlendMode) {
        self.0[n] = mode.add(self.0[n], color);
    }

    /// returns false if something was already lit here
    pub(crate) fn set_if_off(&mut self, n: usize, color: RGB8) -> bool {
        if self.is_on(n) {
            return false;
        }

        self.0[n] = color;

        true
    }

    /// Hand the frame to the strip driver. Timing and retries are the driver's problem.
    pub fn write_to<W>(&self, driver: &mut W) -> Result<(), W::Error>
    where
        W: SmartLedsWrite<Color = RGB8>,
    {
        driver.write(self.0.iter().copied())
    }
}

impl Index<usize> for ColorBuffer {
    type Output = RGB8;

    fn index(&self, n: usize) -> &Self::Output {
        &self.0[n]
    }
}
