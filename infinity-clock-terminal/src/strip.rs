use std::io::{self, Write};

use infinity_clock_core::config::LED_COUNT;
use infinity_clock_core::lights::is_on;
use smart_leds::{RGB8, SmartLedsWrite};

/// Pretends a line of the terminal is the light strip. Needs a terminal with 24-bit color.
pub struct TerminalStrip<W> {
    out: W,
}

impl<W: Write> TerminalStrip<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> SmartLedsWrite for TerminalStrip<W> {
    type Error = io::Error;
    type Color = RGB8;

    /// redraws the same line every frame
    fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
    where
        T: IntoIterator<Item = I>,
        I: Into<Self::Color>,
    {
        let mut line = String::with_capacity(LED_COUNT * 24);

        line.push('\r');

        for color in iterator {
            let color: RGB8 = color.into();

            if is_on(color) {
                line.push_str(&format!(
                    "\x1b[38;2;{};{};{}m●",
                    color.r, color.g, color.b
                ));
            } else {
                // off lights are black, which is invisible on most terminals
                line.push_str("\x1b[0m·");
            }
        }

        line.push_str("\x1b[0m");

        self.out.write_all(line.as_bytes())?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draws_one_line() {
        let mut strip = TerminalStrip::new(Vec::new());

        strip
            .write([RGB8::new(255, 0, 0), RGB8::default(), RGB8::new(0, 0, 4)])
            .unwrap();

        let out = String::from_utf8(strip.into_inner()).unwrap();

        assert_eq!(
            out,
            "\r\x1b[38;2;255;0;0m●\x1b[0m·\x1b[38;2;0;0;4m●\x1b[0m"
        );
    }
}
