//! Host-level tests for the character encoding and the drive-level contracts.

use led5::{BitMatrix, Leds};

#[test]
fn reference_digit_patterns() {
    assert_eq!(Leds::lookup('0'), 0b_1111_1100);
    assert_eq!(Leds::lookup('8'), 0b_1111_1110);
    assert_eq!(Leds::lookup('1'), 0b_0110_0000);
}

#[test]
fn lookup_is_total() {
    // Every possible char yields some pattern; everything past ASCII is blank
    assert_eq!(Leds::lookup('\u{80}'), 0);
    assert_eq!(Leds::lookup('漢'), 0);
    assert_eq!(Leds::lookup(char::MAX), 0);
    for ch in '\0'..='\u{7f}' {
        let _pattern = Leds::lookup(ch);
    }
}

#[test]
fn alias_targets_are_canonical_patterns() {
    assert_eq!(Leds::lookup('a'), Leds::lookup('A'));
    assert_eq!(Leds::lookup('O'), Leds::lookup('0'));
    assert_eq!(Leds::lookup('g'), Leds::lookup('9'));
    assert_eq!(Leds::lookup('z'), Leds::lookup('2'));
    assert_eq!(Leds::lookup('p'), Leds::lookup('P'));
    assert_eq!(Leds::lookup('V'), Leds::lookup('U'));
}

#[test]
fn decimal_point_is_its_own_character() {
    // Rendering "8.0-" puts the dot in its own cell, not merged into the '8'
    let patterns: Vec<u8> = "8.0-".chars().map(Leds::lookup).collect();
    assert_eq!(patterns.len(), 4);
    for (index, &pattern) in patterns.iter().enumerate() {
        let is_dot = index == 1;
        assert_eq!(pattern & Leds::DECIMAL != 0, is_dot);
    }

    let Ok(matrix) = "8.0-".parse::<BitMatrix>();
    assert_eq!(matrix[0], Leds::lookup('8'));
    assert_eq!(matrix[1], Leds::DECIMAL);
    assert_eq!(matrix[2], Leds::lookup('0'));
    assert_eq!(matrix[3], Leds::lookup('-'));
    assert_eq!(matrix[4], 0);
}

#[test]
fn anode_levels_reassert_every_line() {
    // "8" drives all seven segment lines active and the decimal point inactive
    let eight = Leds::anode_levels(Leds::lookup('8'));
    assert_eq!(eight, [true, true, true, true, true, true, true, false]);

    // blank drives all eight anode lines inactive
    assert_eq!(Leds::anode_levels(0), [false; 8]);
}

#[test]
fn digit_selection_is_not_sticky() {
    // Selecting digit 0 then digit 2: the second call fully re-specifies all
    // five lines, so line 0 reverts to inactive
    let first = Leds::cathode_levels(1 << 0);
    assert_eq!(first, [false, true, true, true, true]);

    let second = Leds::cathode_levels(1 << 2);
    assert_eq!(second, [true, true, false, true, true]);
}

#[test]
fn each_digit_select_activates_exactly_one_line() {
    for index in 0..5 {
        let levels = Leds::cathode_levels(1 << index);
        let active = levels.iter().filter(|&&high| !high).count();
        assert_eq!(active, 1);
        assert!(!levels[index]);
    }
}
