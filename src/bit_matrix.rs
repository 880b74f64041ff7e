//! Per-cell segment state for the whole display.

use core::convert::Infallible;
use core::num::NonZeroU8;
use core::ops::{BitOrAssign, Index, IndexMut};
use core::str::FromStr;

use heapless::LinearMap;

use crate::error::Error::BitsToMasksFull;
use crate::leds::Leds;
use crate::{CELL_COUNT, Result};

/// Internal type for optimizing multiplexing by grouping cells with identical segment patterns.
///
/// Maps from each distinct nonzero segment pattern to the digit-select mask of
/// the cells showing it (bit *i* set means cell *i*, first digit = least
/// significant bit). Cells that share a pattern can be lit together in one
/// multiplex step.
pub type BitsToMasks = LinearMap<NonZeroU8, u8, CELL_COUNT>;

/// LED segment state for the 5-cell display.
///
/// Holds one raw segment pattern per digit position.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitMatrix([u8; CELL_COUNT]);

impl BitMatrix {
    /// Creates a bit matrix from one pattern per cell.
    #[must_use]
    pub const fn new(bits: [u8; CELL_COUNT]) -> Self {
        Self(bits)
    }

    /// Creates a bit matrix with the same pattern in every cell.
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        Self([bits; CELL_COUNT])
    }

    /// Iterates over the cell patterns, first digit first.
    pub fn iter(&self) -> impl Iterator<Item = &u8> {
        self.0.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> core::slice::IterMut<'_, u8> {
        self.0.iter_mut()
    }

    /// Creates a bit matrix from one character per cell.
    #[must_use]
    pub fn from_text(text: &[char; CELL_COUNT]) -> Self {
        Self::new(text.map(Leds::lookup))
    }

    /// Creates a bit matrix from a number. If it overflows the display,
    /// lights every decimal point.
    #[expect(
        clippy::indexing_slicing,
        clippy::integer_division_remainder_used,
        reason = "Indexing and arithmetic are safe: Leds::DIGITS has 10 elements, and (number % 10) is in 0..9. \
        Modulo is required for digit extraction."
    )]
    #[must_use]
    pub fn from_number(mut number: u32, padding: u8) -> Self {
        let mut bit_matrix = Self::from_bits(padding);

        for bits in bit_matrix.iter_mut().rev() {
            *bits = Leds::DIGITS[(number % 10) as usize];
            number /= 10;
            if number == 0 {
                break;
            }
        }
        if number > 0 {
            bit_matrix |= Leds::DECIMAL;
        }

        bit_matrix
    }

    /// Regroups the cells by pattern into `bits_to_masks`.
    ///
    /// Blank cells are skipped: with nothing to light there is nothing to
    /// multiplex.
    ///
    /// # Errors
    ///
    /// Returns an error if the map runs out of preallocated space, which
    /// cannot happen while its capacity is at least [`CELL_COUNT`].
    #[expect(
        clippy::arithmetic_side_effects,
        reason = "index is below CELL_COUNT, which is the shift bound"
    )]
    pub fn bits_to_masks(&self, bits_to_masks: &mut BitsToMasks) -> Result<()> {
        bits_to_masks.clear();
        for (index, &bits) in self.iter().enumerate() {
            if let Some(nonzero_bits) = NonZeroU8::new(bits) {
                let mask_bit = 1_u8 << index;
                if let Some(mask) = bits_to_masks.get_mut(&nonzero_bits) {
                    *mask |= mask_bit;
                } else {
                    bits_to_masks
                        .insert(nonzero_bits, mask_bit)
                        .map_err(|_| BitsToMasksFull)?;
                }
            }
        }
        Ok(())
    }
}

impl FromStr for BitMatrix {
    type Err = Infallible;

    /// Renders a string one character per cell. If the string is too long,
    /// lights every decimal point.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let mut bit_matrix = Self::default();

        for (bits, ch) in bit_matrix.iter_mut().zip(input.chars()) {
            *bits = Leds::lookup(ch);
        }

        if input.chars().count() > CELL_COUNT {
            bit_matrix |= Leds::DECIMAL;
        }

        Ok(bit_matrix)
    }
}

impl Default for BitMatrix {
    fn default() -> Self {
        Self([0; CELL_COUNT])
    }
}

impl BitOrAssign<u8> for BitMatrix {
    fn bitor_assign(&mut self, rhs: u8) {
        self.iter_mut().for_each(|bits| *bits |= rhs);
    }
}

impl Index<usize> for BitMatrix {
    type Output = u8;

    #[expect(clippy::indexing_slicing, reason = "Bounds checking is the caller's responsibility.")]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IndexMut<usize> for BitMatrix {
    #[expect(clippy::indexing_slicing, reason = "Bounds checking is the caller's responsibility.")]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

impl IntoIterator for BitMatrix {
    type Item = u8;
    type IntoIter = core::array::IntoIter<u8, CELL_COUNT>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a BitMatrix {
    type Item = &'a u8;
    type IntoIter = core::slice::Iter<'a, u8>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
