//! Keypulse - RP2040 key press-duration reporter
//!
//! Entry point: constructs the shared system state, spawns the key
//! poll, blink and console tasks and then settles into a low-rate
//! uptime heartbeat.
//!
//! Hardware: Raspberry Pi Pico (RP2040)
//! Keys: 2 push-buttons, active low, internal pull-ups
//! Console: defmt over RTT

#![no_std]
#![no_main]

use defmt::*;
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};
use panic_halt as _;
use static_cell::StaticCell;

use keypulse::config::{BLINK_PERIOD_MS, DEBOUNCE_PERIOD_MS, KEY_COUNT};
use keypulse::{hardware, System};

static SYSTEM: StaticCell<System> = StaticCell::new();

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("========================================");
    info!("Keypulse v0.1 - press-duration reporter");
    info!("Hardware: RP2040 (Raspberry Pi Pico)");
    info!("Keys: {} @ {} ms poll", KEY_COUNT, DEBOUNCE_PERIOD_MS);
    info!("Blink: {} ms period", BLINK_PERIOD_MS);
    info!("========================================");

    let p = embassy_rp::init(Default::default());

    let system: &'static System = SYSTEM.init(System::new());

    // Task creation failures at init are fatal by design.
    unwrap!(hardware::spawn_system_tasks(&spawner, p, system));

    info!("Keypulse initialized successfully");

    // Main supervisor loop
    let mut uptime_counter = 0u32;
    loop {
        Timer::after(Duration::from_secs(10)).await;
        uptime_counter += 10;
        info!("Status: Uptime {} seconds", uptime_counter);
    }
}
