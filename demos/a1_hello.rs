//! Shows a static greeting on the display.
#![no_std]
#![no_main]
#![cfg(not(feature = "host"))]

use core::{convert::Infallible, future};

use embassy_executor::Spawner;
use led5::{Hardware, Led5, Led5Notifier, Result};
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

    display.write_str("HELLO");

    future::pending().await
}
