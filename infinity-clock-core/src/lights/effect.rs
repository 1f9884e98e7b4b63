use super::ColorBuffer;

/// Something a host can drive once per frame.
///
/// `now_ms` is the host's monotonic ms counter. It may wrap.
pub trait LightEffect {
    fn name(&self) -> &'static str;

    /// fresh wall clock time. hosts should call this whenever they have it
    fn set_time(&mut self, now_ms: u32, hour: u8, minute: u8, second: u8);

    /// build the next frame. must not change anything, so calling it twice gives the same frame
    fn render(&self, now_ms: u32) -> ColorBuffer;
}
