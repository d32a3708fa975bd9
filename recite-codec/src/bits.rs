//! Bit accumulator shared by the encoder and decoder.
//!
//! Fields go in at one width (8 bits per byte, 11 per symbol) and come out at
//! another, most significant bits first.
//!
//! # Invariants
//! - `len` never exceeds 32: callers drain every full output field before
//!   pushing the next input field, so at most `in_width + out_width - 1` bits
//!   are held at once
//! - bits of `acc` above `len` are always zero

/// Rolling MSB-first bit buffer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BitAccumulator {
    acc: u64,
    len: u32,
}

#[inline]
fn mask(width: u32) -> u64 {
    if width >= 64 {
        u64::MAX
    } else {
        (1u64 << width) - 1
    }
}

impl BitAccumulator {
    /// Create an empty accumulator
    pub const fn new() -> Self {
        Self { acc: 0, len: 0 }
    }

    /// Append the low `width` bits of `value`.
    pub fn push(&mut self, value: u32, width: u32) {
        debug_assert!(width <= 32);
        debug_assert!(self.len + width <= 32, "accumulator overflow");
        self.acc = (self.acc << width) | (u64::from(value) & mask(width));
        self.len += width;
    }

    /// Remove and return the top `width` bits, if that many are held.
    pub fn take(&mut self, width: u32) -> Option<u32> {
        if self.len < width {
            return None;
        }
        self.len -= width;
        let value = (self.acc >> self.len) & mask(width);
        self.acc &= mask(self.len);
        Some(value as u32)
    }

    /// Flush the residual bits as one `width`-bit field, zero-padded on the
    /// low end. Returns `None` when nothing is held.
    pub fn drain_padded(&mut self, width: u32) -> Option<u32> {
        if self.len == 0 {
            return None;
        }
        debug_assert!(self.len < width);
        let value = (self.acc << (width - self.len)) & mask(width);
        self.clear();
        Some(value as u32)
    }

    /// Number of bits currently held
    pub fn len(&self) -> u32 {
        self.len
    }

    /// Whether no bits are held
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Drop every held bit
    pub fn clear(&mut self) {
        self.acc = 0;
        self.len = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_take_msb_first() {
        let mut bits = BitAccumulator::new();
        bits.push(0b1010_1100, 8);
        assert_eq!(bits.take(3), Some(0b101));
        assert_eq!(bits.take(5), Some(0b01100));
        assert!(bits.is_empty());
    }

    #[test]
    fn test_take_requires_enough_bits() {
        let mut bits = BitAccumulator::new();
        bits.push(0xFF, 8);
        assert_eq!(bits.take(11), None);
        assert_eq!(bits.len(), 8);
    }

    #[test]
    fn test_push_masks_extra_bits() {
        let mut bits = BitAccumulator::new();
        bits.push(0xFFFF, 3);
        assert_eq!(bits.len(), 3);
        assert_eq!(bits.take(3), Some(0b111));
    }

    #[test]
    fn test_drain_padded_shifts_left() {
        let mut bits = BitAccumulator::new();
        bits.push(0b101, 3);
        assert_eq!(bits.drain_padded(11), Some(0b101_0000_0000));
        assert_eq!(bits.drain_padded(11), None);
    }

    #[test]
    fn test_mixed_widths() {
        // 0xAB, 0xCD = 1010_1011 1100_1101
        let mut bits = BitAccumulator::new();
        bits.push(0xAB, 8);
        bits.push(0xCD, 8);
        assert_eq!(bits.take(11), Some(0b101_0101_1110));
        assert_eq!(bits.len(), 5);
        assert_eq!(bits.drain_padded(8), Some(0b0110_1000));
    }
}
