use smart_leds::RGB8;

/// What happens when overlapping hands add up past 255 in a channel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BlendMode {
    /// plain u8 math. this is what the clocks on the wall do
    #[default]
    Wrapping,
    /// clip at full brightness
    Saturating,
}

impl BlendMode {
    pub fn add(self, a: RGB8, b: RGB8) -> RGB8 {
        match self {
            Self::Wrapping => RGB8::new(
                a.r.wrapping_add(b.r),
                a.g.wrapping_add(b.g),
                a.b.wrapping_add(b.b),
            ),
            Self::Saturating => RGB8::new(
                a.r.saturating_add(b.r),
                a.g.saturating_add(b.g),
                a.b.saturating_add(b.b),
            ),
        }
    }
}

/// any channel lit counts as on
pub fn is_on(color: RGB8) -> bool {
    color.r > 0 || color.g > 0 || color.b > 0
}

/// 255 is the color unchanged. 0 is black.
pub fn scale(color: RGB8, weight: u8) -> RGB8 {
    let scale_channel = |x: u8| (x as u16 * weight as u16 / 255) as u8;

    RGB8::new(
        scale_channel(color.r),
        scale_channel(color.g),
        scale_channel(color.b),
    )
}
