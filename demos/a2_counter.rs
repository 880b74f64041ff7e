//! Counts up on the display, four ticks per second.
//!
//! Counting past 99999 shows the all-decimal-points overflow marker.
#![no_std]
#![no_main]
#![cfg(not(feature = "host"))]

use core::convert::Infallible;

use embassy_executor::Spawner;
use embassy_time::Timer;
use led5::{Hardware, Led5, Led5Notifier, Result, leds::Leds};
use {defmt_rtt as _, panic_probe as _};

#[embassy_executor::main]
async fn main(spawner: Spawner) -> ! {
    let err = inner_main(spawner).await.unwrap_err();
    panic!("{err}");
}

async fn inner_main(spawner: Spawner) -> Result<Infallible> {
    let hardware = Hardware::default();

    static NOTIFIER: Led5Notifier = Led5::notifier();
    let display = Led5::new(hardware.cells, hardware.segments, &NOTIFIER, spawner)?;

    let mut count: u32 = 0;
    loop {
        // Pad with the middle bar so leading cells aren't dark
        display.write_number(count, Leds::SEG_G);
        count = count.wrapping_add(1);
        Timer::after_millis(250).await;
    }
}
