//! A device abstraction for a 5-digit, 7-segment multiplexed LED display.
//!
//! The display bank shares its eight anode lines (segments `a`..`g` plus the
//! decimal point) across all five digit positions; one cathode line per digit
//! selects which position currently sinks current. Cycling the selection
//! faster than about 60 full passes per second makes all five digits appear
//! lit at once.
//!
//! The crate splits into:
//!
//! - [`Leds`]: the character-to-segment-pattern encoding (pure, host-testable).
//! - [`BitMatrix`]: the per-digit pattern buffer for the whole display.
//! - `OutputArray`: the anode/cathode drive primitives over GPIO outputs.
//! - `Led5`: the background multiplexing device, fed through a signal.
//! - `Hardware`: the display's fixed pin assignment.
//!
//! Build with the `host` feature to compile and test the pure modules on a
//! development machine: `cargo test --no-default-features --features host`.
#![cfg_attr(not(feature = "host"), no_std)]

// Compile-time checks: exactly one board must be selected (unless testing with host feature)
#[cfg(all(not(any(feature = "pico1", feature = "pico2")), not(feature = "host")))]
compile_error!("Must enable exactly one board feature: 'pico1' or 'pico2'");

#[cfg(all(feature = "pico1", feature = "pico2"))]
compile_error!("Cannot enable both 'pico1' and 'pico2' features simultaneously");

#[cfg(all(not(feature = "arm"), not(feature = "host")))]
compile_error!("Must enable the 'arm' architecture feature");

mod bit_matrix;
#[cfg(not(feature = "host"))]
mod display;
mod error;
#[cfg(not(feature = "host"))]
mod hardware;
pub mod leds;
#[cfg(not(feature = "host"))]
mod output_array;

pub use bit_matrix::{BitMatrix, BitsToMasks};
#[cfg(not(feature = "host"))]
pub use display::{Led5, Led5Notifier};
pub use error::{Error, Result};
#[cfg(not(feature = "host"))]
pub use hardware::Hardware;
pub use leds::Leds;
#[cfg(not(feature = "host"))]
pub use output_array::OutputArray;

/// The number of cells (digit positions) in the display.
pub const CELL_COUNT: usize = 5;

/// The number of segment lines per cell, including the decimal point.
pub const SEGMENT_COUNT: usize = 8;
