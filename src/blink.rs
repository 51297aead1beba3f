//! Periodic indicator task
//!
//! Toggles the on-board LED (mirrored on a probe pin for scope
//! measurements) and reports each cycle through the status channel.
//!
//! Drift-corrected scheduling: the ticker wakes at absolute multiples
//! of the blink period, so the long-run average period stays exact even
//! though line building and channel sends take variable time inside the
//! cycle.

use defmt::*;
use embassy_rp::gpio::Output;
use embassy_time::{Ticker, Timer};

use crate::config::BLINK_PERIOD;
use crate::message;
use crate::System;

#[embassy_executor::task]
pub async fn blink_task(
    system: &'static System,
    mut led: Output<'static>,
    mut probe: Output<'static>,
) {
    info!("Blink task started");

    let mut ticker = Ticker::every(BLINK_PERIOD);

    loop {
        led.set_high();
        probe.set_high();

        match message::status_line(message::BLINK_LINE) {
            Ok(line) => system.status.send(line).await,
            // Cannot happen for the fixed text, but the producer policy
            // is the same as for key reports: log and skip the cycle.
            Err(_) => warn!("blink line overflow, report skipped"),
        }

        // Indicator on for the first half of the period.
        Timer::after(BLINK_PERIOD / 2).await;

        led.set_low();
        probe.set_low();

        ticker.next().await;
    }
}
