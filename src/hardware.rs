//! Hardware bring-up
//!
//! Creates the GPIO pins named in [`config`](crate::config) and spawns
//! the three system tasks. A spawn failure here is fatal: the system
//! must not start half-wired.

use defmt::*;
use embassy_executor::{SpawnError, Spawner};
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::Peripherals;

use crate::config::{BLINK_LED_PIN, BLINK_PROBE_PIN, KEY_COUNT, KEY_PINS};
use crate::{blink, console, keys, System};

/// Create all pins and spawn the key poll, blink and console tasks.
///
/// Pin choices follow the `config` constants; the `match`-free literal
/// pin names below are the single place they are turned into typed
/// peripherals.
pub fn spawn_system_tasks(
    spawner: &Spawner,
    p: Peripherals,
    system: &'static System,
) -> Result<(), SpawnError> {
    info!(
        "Monitoring {} keys on GPIO {}, blink LED on GPIO {} (probe on GPIO {})",
        KEY_COUNT, KEY_PINS, BLINK_LED_PIN, BLINK_PROBE_PIN
    );

    // Key inputs: active low with internal pull-ups (KEY_PINS).
    let keys: [Input<'static>; KEY_COUNT] = [
        Input::new(p.PIN_4, Pull::Up),
        Input::new(p.PIN_5, Pull::Up),
    ];

    // Blink outputs (BLINK_LED_PIN / BLINK_PROBE_PIN).
    let led = Output::new(p.PIN_25, Level::Low);
    let probe = Output::new(p.PIN_20, Level::Low);

    spawner.spawn(keys::key_poll_task(system, keys))?;
    spawner.spawn(blink::blink_task(system, led, probe))?;
    spawner.spawn(console::console_task(system))?;

    Ok(())
}
