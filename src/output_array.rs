//! GPIO output banks for the display's anode and cathode lines.

use embassy_rp::gpio::{self, Level};

use crate::leds::Leds;
use crate::{CELL_COUNT, SEGMENT_COUNT};

/// An array of GPIO output pins driven as one bank.
///
/// The display uses two: the eight shared anode lines and the five cathode
/// select lines. Each write re-asserts every pin in the bank, so a call fully
/// replaces whatever configuration a previous call left behind.
pub struct OutputArray<'a, const N: usize>([gpio::Output<'a>; N]);

impl<'a, const N: usize> OutputArray<'a, N> {
    /// Creates a bank from individual output pins.
    #[must_use]
    pub const fn new(outputs: [gpio::Output<'a>; N]) -> Self {
        Self(outputs)
    }
}

impl OutputArray<'_, SEGMENT_COUNT> {
    /// Writes one segment pattern to the anode lines, segment `a` first.
    ///
    /// Bit 7 of `pattern` drives segment `a`, down to bit 0 for the decimal
    /// point. A set bit drives its line high (segment lit).
    #[inline]
    pub fn set_segments(&mut self, pattern: u8) {
        for (output, high) in self.0.iter_mut().zip(Leds::anode_levels(pattern)) {
            output.set_level(Level::from(high));
        }
    }
}

impl OutputArray<'_, CELL_COUNT> {
    /// Writes one digit-select mask to the cathode lines, first digit first.
    ///
    /// Bit *i* of `mask` selects digit *i*; a selected line is pulled low so
    /// its cathode sinks current, every other line is driven high. In normal
    /// multiplexed operation exactly one bit is set, but any mask is honored.
    #[inline]
    pub fn set_digit_mask(&mut self, mask: u8) {
        for (output, high) in self.0.iter_mut().zip(Leds::cathode_levels(mask)) {
            output.set_level(Level::from(high));
        }
    }

    /// Selects a single digit by zero-based index.
    ///
    /// Equivalent to `set_digit_mask(1 << index)`. Indexes past the last
    /// digit shift out of the mask and select nothing; staying in range is
    /// the caller's contract.
    #[inline]
    pub fn select_digit(&mut self, index: u8) {
        self.set_digit_mask(1_u8.checked_shl(u32::from(index)).unwrap_or(0));
    }
}
