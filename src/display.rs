//! A device abstraction for the 5-digit display.
//!
//! See [`Led5`] for usage.

use core::convert::Infallible;

use crate::bit_matrix::{BitMatrix, BitsToMasks};
use crate::output_array::OutputArray;
use crate::{CELL_COUNT, Result, SEGMENT_COUNT};
#[cfg(feature = "display-trace")]
use defmt::info;
use embassy_futures::select::{Either, select};
use embassy_sync::{blocking_mutex::raw::CriticalSectionRawMutex, signal::Signal};
use embassy_time::{Duration, Timer};

/// Sleep duration between multiplexing updates.
///
/// With all five cells showing distinct patterns this still completes more
/// than 60 full passes per second, fast enough for persistence of vision.
pub(crate) const MULTIPLEX_SLEEP: Duration = Duration::from_millis(3);

/// Signal for sending new display contents to the [`Led5`] device.
pub type Led5Notifier = Signal<CriticalSectionRawMutex, BitMatrix>;

/// A device abstraction for a 5-digit, 7-segment multiplexed LED display.
///
/// # Hardware Requirements
///
/// Designed for common-cathode displays where:
/// - Cathode pins select which digit is active (low = on, high = off)
/// - Anode pins control which segments light up (high = on, low = off)
///
/// # Example
///
/// ```no_run
/// #![no_std]
/// #![no_main]
///
/// use led5::{Hardware, Led5, Led5Notifier};
/// # use embassy_executor::Spawner;
/// # use core::panic::PanicInfo;
/// # #[panic_handler]
/// # fn panic(_: &PanicInfo) -> ! { loop {} }
///
/// async fn example(spawner: Spawner) -> led5::Result<()> {
///     let hardware = Hardware::default();
///
///     static NOTIFIER: Led5Notifier = Led5::notifier();
///     let display = Led5::new(hardware.cells, hardware.segments, &NOTIFIER, spawner)?;
///
///     // Display "HELLO"
///     display.write_str("HELLO");
///
///     // Display a number, blank-padded
///     display.write_number(42, 0);
///
///     Ok(())
/// }
/// ```
pub struct Led5<'a>(&'a Led5Notifier);

impl Led5<'_> {
    /// Creates a notifier for the display.
    #[must_use]
    pub const fn notifier() -> Led5Notifier {
        Signal::new()
    }

    /// Creates the display device and spawns its background multiplexing task.
    ///
    /// The task takes exclusive ownership of both pin banks.
    ///
    /// # Errors
    ///
    /// Returns an error if the task cannot be spawned.
    #[must_use = "Must be used to manage the spawned task"]
    pub fn new(
        cell_pins: OutputArray<'static, CELL_COUNT>,
        segment_pins: OutputArray<'static, SEGMENT_COUNT>,
        notifier: &'static Led5Notifier,
        spawner: embassy_executor::Spawner,
    ) -> Result<Self> {
        let token = device_loop(cell_pins, segment_pins, notifier)?;
        spawner.spawn(token);
        Ok(Self(notifier))
    }

    /// Sends text to the display, one character per cell.
    pub fn write_text(&self, text: [char; CELL_COUNT]) {
        self.write_bit_matrix(BitMatrix::from_text(&text));
    }

    /// Sends a string to the display. Too-long input lights every decimal point.
    pub fn write_str(&self, text: &str) {
        let Ok(bit_matrix) = text.parse();
        self.write_bit_matrix(bit_matrix);
    }

    /// Sends a number to the display. Overflow lights every decimal point.
    pub fn write_number(&self, number: u32, padding: u8) {
        self.write_bit_matrix(BitMatrix::from_number(number, padding));
    }

    /// Sends raw per-cell segment patterns to the display.
    pub fn write_bit_matrix(&self, bit_matrix: BitMatrix) {
        #[cfg(feature = "display-trace")]
        info!("write_bit_matrix: {:?}", bit_matrix);
        self.0.signal(bit_matrix);
    }
}

#[embassy_executor::task]
async fn device_loop(
    cell_pins: OutputArray<'static, CELL_COUNT>,
    segment_pins: OutputArray<'static, SEGMENT_COUNT>,
    notifier: &'static Led5Notifier,
) -> ! {
    let err = inner_device_loop(cell_pins, segment_pins, notifier)
        .await
        .unwrap_err();
    panic!("{err}");
}

async fn inner_device_loop(
    mut cell_pins: OutputArray<'static, CELL_COUNT>,
    mut segment_pins: OutputArray<'static, SEGMENT_COUNT>,
    notifier: &'static Led5Notifier,
) -> Result<Infallible> {
    let mut bit_matrix = BitMatrix::default();
    let mut bits_to_masks = BitsToMasks::new();
    'outer: loop {
        #[cfg(feature = "display-trace")]
        info!("bit_matrix: {:?}", bit_matrix);
        bit_matrix.bits_to_masks(&mut bits_to_masks)?;
        #[cfg(feature = "display-trace")]
        info!("# of unique cell patterns: {:?}", bits_to_masks.len());

        match bits_to_masks.iter().next() {
            // Nothing to light, wait for the next update
            None => bit_matrix = notifier.wait().await,

            // One distinct pattern (possibly on several cells): set it once
            // and hold it, no multiplexing needed
            Some((&bits, &mask)) if bits_to_masks.len() == 1 => {
                segment_pins.set_segments(bits.get());
                cell_pins.set_digit_mask(mask);
                bit_matrix = notifier.wait().await;
                cell_pins.set_digit_mask(0);
            }

            // Multiple patterns: cycle through them until the next update
            _ => loop {
                for (bits, mask) in &bits_to_masks {
                    segment_pins.set_segments(bits.get());
                    cell_pins.set_digit_mask(*mask);
                    let timeout_or_signal =
                        select(Timer::after(MULTIPLEX_SLEEP), notifier.wait()).await;
                    cell_pins.set_digit_mask(0);
                    if let Either::Second(notification) = timeout_or_signal {
                        bit_matrix = notification;
                        continue 'outer;
                    }
                }
            },
        }
    }
}
