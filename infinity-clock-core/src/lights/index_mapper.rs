use crate::config::LED_COUNT;

/// Turns o'clock positions into indexes on the strip.
///
/// Position 0 is 12 o'clock and positions increase clockwise. The strip is wound the other way, so
/// clockwise positions count *down* from `offset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IndexMapper {
    offset: u8,
}

impl IndexMapper {
    pub const fn new(offset: u8) -> Self {
        Self { offset }
    }

    pub const fn offset(&self) -> u8 {
        self.offset
    }

    /// Any position works. Negative and large positions wrap around the face.
    pub const fn map(&self, position: i32) -> usize {
        // i64 so that `offset - i32::MIN` can't overflow
        let n = (self.offset as i64 - position as i64).rem_euclid(LED_COUNT as i64);

        n as usize
    }
}

#[cfg(test)]
mod tests {
    use super::IndexMapper;

    #[test]
    fn test_no_offset() {
        let mapper = IndexMapper::new(0);

        assert_eq!(mapper.map(0), 0);
        assert_eq!(mapper.map(1), 59);
        assert_eq!(mapper.map(15), 45);
        assert_eq!(mapper.map(30), 30);
        assert_eq!(mapper.map(59), 1);
        assert_eq!(mapper.map(60), 0);
    }

    #[test]
    fn test_offset() {
        let mapper = IndexMapper::new(29);

        assert_eq!(mapper.offset(), 29);
        assert_eq!(mapper.map(0), 29);
        assert_eq!(mapper.map(1), 28);
        assert_eq!(mapper.map(29), 0);
        assert_eq!(mapper.map(30), 59);
        assert_eq!(mapper.map(-1), 30);
    }

    #[test]
    fn test_always_in_range() {
        for offset in [0, 1, 29, 59] {
            let mapper = IndexMapper::new(offset);

            for position in (-500..500).chain([i32::MIN, i32::MIN + 1, i32::MAX, i32::MAX - 1]) {
                let n = mapper.map(position);

                assert!(n < 60, "offset {offset} position {position} -> {n}");
            }
        }
    }

    #[test]
    fn test_periodic() {
        let mapper = IndexMapper::new(17);

        for position in -200..200 {
            assert_eq!(mapper.map(position), mapper.map(position + 60));
            assert_eq!(mapper.map(position), mapper.map(position - 120));
        }
    }
}
