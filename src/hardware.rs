//! The display's fixed pin assignment.

use embassy_rp::gpio::{self, Level};

use crate::output_array::OutputArray;
use crate::{CELL_COUNT, SEGMENT_COUNT};

/// The display board's wiring, bound to GPIO outputs at their idle levels.
///
/// Taking `Default::default()` initializes the RP peripherals, so construct
/// it exactly once, before anything else touches them.
pub struct Hardware {
    /// Cathode select lines, first digit first. Idle high; a digit is
    /// selected by pulling its cathode low.
    pub cells: OutputArray<'static, CELL_COUNT>,
    /// Shared anode lines in segment order `a` through `g`, then the decimal
    /// point. Idle low.
    pub segments: OutputArray<'static, SEGMENT_COUNT>,
}

impl Default for Hardware {
    fn default() -> Self {
        let peripherals: embassy_rp::Peripherals =
            embassy_rp::init(embassy_rp::config::Config::default());

        let cells = OutputArray::new([
            gpio::Output::new(peripherals.PIN_6, Level::High),
            gpio::Output::new(peripherals.PIN_5, Level::High),
            gpio::Output::new(peripherals.PIN_19, Level::High),
            gpio::Output::new(peripherals.PIN_16, Level::High),
            gpio::Output::new(peripherals.PIN_26, Level::High),
        ]);

        let segments = OutputArray::new([
            gpio::Output::new(peripherals.PIN_7, Level::Low), // a
            gpio::Output::new(peripherals.PIN_3, Level::Low), // b
            gpio::Output::new(peripherals.PIN_2, Level::Low), // c
            gpio::Output::new(peripherals.PIN_15, Level::Low), // d
            gpio::Output::new(peripherals.PIN_4, Level::Low), // e
            gpio::Output::new(peripherals.PIN_18, Level::Low), // f
            gpio::Output::new(peripherals.PIN_14, Level::Low), // g
            gpio::Output::new(peripherals.PIN_17, Level::Low), // dp
        ]);

        Self { cells, segments }
    }
}
