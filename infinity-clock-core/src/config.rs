use smart_leds::RGB8;
use smart_leds::colors::WHITE;

use crate::lights::BlendMode;

/// one light per minute
pub const LED_COUNT: usize = 60;

/// 12, 3, 6, and 9 o'clock
pub const CARDINAL_POSITIONS: [i32; 4] = [0, 15, 30, 45];

/// every five minutes that isn't a cardinal, except 50
pub const FIVE_MINUTE_POSITIONS: [i32; 7] = [5, 10, 20, 25, 35, 40, 55];

/// Everything about how the clock looks. Hosts with different strips or tastes build their own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockConfig {
    /// index on the strip that sits at 12 o'clock
    pub offset: u8,
    pub hour_color: RGB8,
    pub minute_color: RGB8,
    pub second_color: RGB8,
    /// lights on each side of the hour hand's center
    pub hour_half_width: u8,
    pub cardinal_color: RGB8,
    pub cardinal_positions: &'static [i32],
    pub five_minute_color: RGB8,
    pub five_minute_positions: &'static [i32],
    /// how close (in lights) a lit pixel needs to be to show a five minute marker
    pub proximity_radius: u8,
    /// the minute hand glides to the next minute during the last part of the minute
    pub minute_anim_ms: u32,
    /// the second hand glides to the next second during the last part of the second
    pub second_anim_ms: u32,
    pub loading_color: RGB8,
    /// the loading spinner moves one light every this many ms
    pub loading_step_ms: u32,
    pub blend: BlendMode,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            offset: 0,
            hour_color: RGB8::new(255, 0, 0),
            minute_color: RGB8::new(0, 255, 0),
            second_color: RGB8::new(0, 0, 255),
            hour_half_width: 1,
            cardinal_color: RGB8::new(16, 16, 16),
            cardinal_positions: &CARDINAL_POSITIONS,
            five_minute_color: RGB8::new(4, 4, 4),
            five_minute_positions: &FIVE_MINUTE_POSITIONS,
            proximity_radius: 3,
            minute_anim_ms: 1_500,
            second_anim_ms: 200,
            loading_color: WHITE,
            loading_step_ms: 20,
            blend: BlendMode::Wrapping,
        }
    }
}
