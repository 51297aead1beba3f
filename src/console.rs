//! Console task - the single status line consumer
//!
//! Drains the status channel in FIFO order and prints each line to the
//! defmt console. The line buffer is dropped right after printing, the
//! only release in the system.

use defmt::*;

use crate::System;

#[embassy_executor::task]
pub async fn console_task(system: &'static System) {
    info!("Console task started");

    let receiver = system.status.receiver();

    loop {
        let line = receiver.receive().await;
        info!("{=str}", line.as_str());
        // `line` is dropped here: released exactly once, by the consumer.
    }
}
