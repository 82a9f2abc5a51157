use std::ops::RangeInclusive;

/// Bit helpers for packed pixel bytes.
/// Bit indices go from lsb to msb (right to left), so pixel 0 of a
/// 2bpp byte lives in `6..=7` and pixel 3 in `0..=1`.
pub trait Bits: Sized {
    fn get_bits(&self, bits_range: RangeInclusive<u8>) -> Self;

    fn set_bits(&mut self, bits_range: RangeInclusive<u8>, value: Self);
}

impl Bits for u8 {
    fn get_bits(&self, bits_range: RangeInclusive<u8>) -> Self {
        let start = *bits_range.start();
        let mask = ones(&bits_range);

        (self & (mask << start)) >> start
    }

    fn set_bits(&mut self, bits_range: RangeInclusive<u8>, value: Self) {
        let start = *bits_range.start();
        let mask = ones(&bits_range) << start;

        *self = (*self & !mask) | ((value << start) & mask);
    }
}

/// A value with as many low ones as the range is long.
fn ones(bits_range: &RangeInclusive<u8>) -> u8 {
    debug_assert!(*bits_range.end() < 8);
    let length = u32::from(bits_range.end() - bits_range.start() + 1);

    u8::try_from((1_u16 << length) - 1).unwrap_or(u8::MAX)
}

/// Bit range holding pixel `lane` (0-3, left to right) of a 2bpp byte.
pub const fn lane_bits(lane: u8) -> RangeInclusive<u8> {
    let low = 6 - lane * 2;
    low..=low + 1
}

#[cfg(test)]
mod tests {
    use super::{Bits, lane_bits};
    use pretty_assertions::assert_eq;

    #[test]
    fn get_bits() {
        let b: u8 = 0b1101_0010;
        assert_eq!(b.get_bits(6..=7), 0b11);
        assert_eq!(b.get_bits(4..=5), 0b01);
        assert_eq!(b.get_bits(0..=7), b);
    }

    #[test]
    fn set_bits() {
        let mut b: u8 = 0xFF;
        b.set_bits(2..=3, 0b00);
        assert_eq!(b, 0b1111_0011);

        b.set_bits(2..=3, 0b10);
        assert_eq!(b, 0b1111_1011);

        // Extra high bits in `value` never leak out of the range.
        b.set_bits(0..=1, 0b1100);
        assert_eq!(b, 0b1111_1000);
    }

    #[test]
    fn lanes_run_left_to_right() {
        let b: u8 = 0b00_01_10_11;
        let lanes: Vec<u8> = (0..4).map(|lane| b.get_bits(lane_bits(lane))).collect();
        assert_eq!(lanes, vec![0, 1, 2, 3]);
    }
}
