//! Character-to-segment encoding for 7-segment LED cells.
//!
//! Each cell needs exactly one byte where each bit is mapped to a particular
//! segment anode, most significant bit first:
//!
//! ```text
//!                          a
//!  bit 7 ╴a             ┌─────┐
//!  bit 6 ╴b           f │     │ b
//!  bit 5 ╴c             │  g  │
//!  bit 4 ╴d             ├─────┤
//!  bit 3 ╴e           e │     │ c
//!  bit 2 ╴f             │     │
//!  bit 1 ╴g             └─────┘ ▪ dp
//!  bit 0 ╴dp               d
//! ```
//!
//! The bit-to-anode order is the wiring contract of the display board; the
//! patterns below encode which segments draw each glyph and must stay exactly
//! as they are.

use crate::{CELL_COUNT, SEGMENT_COUNT};

/// Constants and lookups for 7-segment LED cells.
pub struct Leds;

impl Leds {
    /// Segment `a`, the top bar.
    pub const SEG_A: u8 = 0b_1000_0000;
    /// Segment `b`, top right.
    pub const SEG_B: u8 = 0b_0100_0000;
    /// Segment `c`, bottom right.
    pub const SEG_C: u8 = 0b_0010_0000;
    /// Segment `d`, the bottom bar.
    pub const SEG_D: u8 = 0b_0001_0000;
    /// Segment `e`, bottom left.
    pub const SEG_E: u8 = 0b_0000_1000;
    /// Segment `f`, top left.
    pub const SEG_F: u8 = 0b_0000_0100;
    /// Segment `g`, the middle bar.
    pub const SEG_G: u8 = 0b_0000_0010;
    /// The decimal point.
    pub const DECIMAL: u8 = 0b_0000_0001;

    /// Segment patterns for the digits 0-9.
    pub const DIGITS: [u8; 10] = [
        0b_1111_1100, // 0
        0b_0110_0000, // 1
        0b_1101_1010, // 2
        0b_1111_0010, // 3
        0b_0110_0110, // 4
        0b_1011_0110, // 5
        0b_1011_1110, // 6
        0b_1110_0000, // 7
        0b_1111_1110, // 8
        0b_1111_0110, // 9
    ];

    /// ASCII table mapping characters to their segment patterns.
    ///
    /// Flattened from `glyph` at compile time, so alias chains such as
    /// `'a'` → `'A'` cost nothing at runtime.
    #[expect(
        clippy::indexing_slicing,
        clippy::arithmetic_side_effects,
        reason = "ch ranges over the table length"
    )]
    pub const ASCII_TABLE: [u8; 128] = {
        let mut table = [0_u8; 128];
        let mut ch = 0_usize;
        while ch < 128 {
            table[ch] = Self::glyph(ch as u8);
            ch += 1;
        }
        table
    };

    /// Segment pattern for one character.
    ///
    /// Total over all of ASCII: characters with no sensible 7-segment
    /// rendering come back blank. Letters that cannot be drawn distinctly
    /// borrow the closest renderable shape, so several arms defer to another
    /// character's pattern.
    const fn glyph(ch: u8) -> u8 {
        match ch {
            // numbers
            b'0' => 0b_1111_1100,
            b'1' => 0b_0110_0000,
            b'2' => 0b_1101_1010,
            b'3' => 0b_1111_0010,
            b'4' => 0b_0110_0110,
            b'5' => 0b_1011_0110,
            b'6' => 0b_1011_1110,
            b'7' => 0b_1110_0000,
            b'8' => 0b_1111_1110,
            b'9' => 0b_1111_0110,
            // alphabet
            b'A' => 0b_1110_1110,
            b'a' => Self::glyph(b'A'),
            b'B' => Self::glyph(b'b'),
            b'b' => 0b_0011_1110,
            b'C' => 0b_1001_1100,
            b'c' => 0b_0001_1010,
            b'D' => Self::glyph(b'd'),
            b'd' => 0b_0111_1010,
            b'E' => 0b_1001_1110,
            b'e' => Self::glyph(b'E'),
            b'F' => 0b_1000_1110,
            b'f' => Self::glyph(b'F'),
            b'G' => Self::glyph(b'6'),
            b'g' => Self::glyph(b'9'),
            b'H' => 0b_0110_1110,
            b'h' => 0b_0010_1110,
            b'I' => 0b_0000_1100,
            b'i' => 0b_0000_1000,
            b'J' => 0b_0111_0000,
            b'j' => Self::glyph(b'J'),
            b'K' => Self::glyph(b'k'),
            b'k' => 0b_1010_1110,
            b'L' => 0b_0001_1100,
            b'l' => Self::glyph(b'I'),
            b'M' => 0b_1100_1100, // M and m are each one half of an 'm' shape
            b'm' => 0b_1110_0100,
            b'N' => Self::glyph(b'n'),
            b'n' => 0b_0010_1010,
            b'O' => Self::glyph(b'0'),
            b'o' => 0b_0011_1010,
            b'P' => 0b_1100_1110,
            b'p' => Self::glyph(b'P'),
            b'Q' => Self::glyph(b'q'),
            b'q' => 0b_1110_0110,
            b'R' => Self::glyph(b'r'),
            b'r' => 0b_0000_1010,
            b'S' => 0b_1011_0110,
            b's' => Self::glyph(b'S'),
            b'T' => Self::glyph(b't'),
            b't' => 0b_0001_1110,
            b'U' => 0b_0111_1100,
            b'u' => 0b_0011_1000,
            b'V' => Self::glyph(b'U'),
            b'v' => Self::glyph(b'u'),
            b'W' => 0b_0011_1100, // W and w pair up like M and m
            b'w' => 0b_0111_1000,
            b'X' | b'x' => Self::glyph(b'H'),
            b'Y' => Self::glyph(b'y'),
            b'y' => 0b_0111_0110,
            b'Z' | b'z' => Self::glyph(b'2'),
            // symbols
            b'.' => 0b_0000_0001,
            b'\'' => 0b_0000_0100,
            b'-' => 0b_0000_0010,
            b'_' => 0b_0001_0000,
            b'>' => 0b_0011_0000,
            b'<' => 0b_0001_1000,
            b'=' => 0b_0001_0010,
            b'~' => 0b_1001_0010,
            // everything else is blank
            _ => 0,
        }
    }

    /// Looks up the segment pattern for `ch`.
    ///
    /// Total: any character outside the table (including all non-ASCII)
    /// yields the blank pattern.
    #[must_use]
    pub fn lookup(ch: char) -> u8 {
        Self::ASCII_TABLE.get(ch as usize).copied().unwrap_or(0)
    }

    /// Pin levels for the eight anode lines, segment `a` first.
    ///
    /// `true` means driven high; anodes are active high, so a set pattern bit
    /// lights its segment.
    #[expect(
        clippy::indexing_slicing,
        clippy::arithmetic_side_effects,
        reason = "index stays below SEGMENT_COUNT, which is the shift bound"
    )]
    #[must_use]
    pub const fn anode_levels(pattern: u8) -> [bool; SEGMENT_COUNT] {
        let mut levels = [false; SEGMENT_COUNT];
        let mut index = 0;
        while index < SEGMENT_COUNT {
            levels[index] = pattern & (Self::SEG_A >> index) != 0;
            index += 1;
        }
        levels
    }

    /// Pin levels for the five cathode lines, first digit first.
    ///
    /// `true` means driven high. Cathodes sink current, so a set mask bit
    /// pulls its line low to select that digit; every other line idles high.
    #[expect(
        clippy::indexing_slicing,
        clippy::arithmetic_side_effects,
        reason = "index stays below CELL_COUNT, which is the shift bound"
    )]
    #[must_use]
    pub const fn cathode_levels(mask: u8) -> [bool; CELL_COUNT] {
        let mut levels = [true; CELL_COUNT];
        let mut index = 0;
        while index < CELL_COUNT {
            levels[index] = mask & (1 << index) == 0;
            index += 1;
        }
        levels
    }
}

#[cfg(all(test, not(target_os = "none")))]
mod tests {
    use super::Leds;

    #[test]
    fn digit_patterns_match_wiring() {
        assert_eq!(Leds::lookup('0'), 0b_1111_1100);
        assert_eq!(Leds::lookup('1'), 0b_0110_0000);
        assert_eq!(Leds::lookup('8'), 0b_1111_1110);
        for (digit, &pattern) in Leds::DIGITS.iter().enumerate() {
            let ch = char::from_digit(digit as u32, 10).expect("digit in range");
            assert_eq!(Leds::lookup(ch), pattern);
            // Digits never light the decimal point
            assert_eq!(pattern & Leds::DECIMAL, 0);
        }
    }

    #[test]
    fn aliases_flatten_to_their_targets() {
        let aliases = [
            ('a', 'A'),
            ('B', 'b'),
            ('D', 'd'),
            ('e', 'E'),
            ('f', 'F'),
            ('G', '6'),
            ('g', '9'),
            ('j', 'J'),
            ('K', 'k'),
            ('l', 'I'),
            ('N', 'n'),
            ('O', '0'),
            ('p', 'P'),
            ('Q', 'q'),
            ('R', 'r'),
            ('s', 'S'),
            ('T', 't'),
            ('V', 'U'),
            ('v', 'u'),
            ('X', 'H'),
            ('x', 'H'),
            ('Y', 'y'),
            ('Z', '2'),
            ('z', '2'),
        ];
        for (from, to) in aliases {
            assert_eq!(Leds::lookup(from), Leds::lookup(to), "{from} -> {to}");
            assert_ne!(Leds::lookup(from), 0, "{from} must render");
        }
    }

    #[test]
    fn distinct_lowercase_shapes_differ_from_uppercase() {
        for (upper, lower) in [('C', 'c'), ('H', 'h'), ('I', 'i'), ('M', 'm'), ('U', 'u'), ('W', 'w')] {
            assert_ne!(Leds::lookup(upper), Leds::lookup(lower));
        }
    }

    #[test]
    fn symbols_have_fixed_patterns() {
        assert_eq!(Leds::lookup('.'), Leds::DECIMAL);
        assert_eq!(Leds::lookup('\''), 0b_0000_0100);
        assert_eq!(Leds::lookup('-'), Leds::SEG_G);
        assert_eq!(Leds::lookup('_'), Leds::SEG_D);
        assert_eq!(Leds::lookup('>'), 0b_0011_0000);
        assert_eq!(Leds::lookup('<'), 0b_0001_1000);
        assert_eq!(Leds::lookup('='), 0b_0001_0010);
        assert_eq!(Leds::lookup('~'), 0b_1001_0010);
    }

    #[test]
    fn unmapped_characters_are_blank() {
        for ch in [' ', '!', '@', '/', ':', ',', '?', '\n', '\u{7f}', 'Ω', 'é'] {
            assert_eq!(Leds::lookup(ch), 0, "{ch:?} should be blank");
        }
    }

    #[test]
    fn anode_levels_follow_msb_first_order() {
        // '8' lights all seven segments but not the decimal point
        let all_on = Leds::anode_levels(Leds::lookup('8'));
        assert_eq!(all_on, [true, true, true, true, true, true, true, false]);

        // blank drives every anode low
        assert_eq!(Leds::anode_levels(0), [false; 8]);

        // the decimal point is the last line
        let dp_only = Leds::anode_levels(Leds::DECIMAL);
        assert_eq!(dp_only, [false, false, false, false, false, false, false, true]);
    }

    #[test]
    fn cathode_levels_invert_the_mask() {
        // no digit selected leaves every cathode high
        assert_eq!(Leds::cathode_levels(0), [true; 5]);

        // one mask bit pulls exactly one line low
        for index in 0..5 {
            let levels = Leds::cathode_levels(1 << index);
            for (line, &level) in levels.iter().enumerate() {
                assert_eq!(level, line != index);
            }
        }

        // multi-digit masks are allowed
        assert_eq!(
            Leds::cathode_levels(0b_1_0001),
            [false, true, true, true, false]
        );
    }
}
