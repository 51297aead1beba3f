//! Hardware configuration for Keypulse
//! Raspberry Pi Pico based press-duration reporter

use embassy_time::Duration;

// ===================================================================
// Monitored Keys
// ===================================================================

pub const KEY_COUNT: usize = 2; // Number of monitored keys

/// Label printed in front of each key's duration report
pub const KEY_LABELS: [&str; KEY_COUNT] = ["KEY1", "KEY2"];

// ===================================================================
// GPIO Pin Assignments - Raspberry Pi Pico
// ===================================================================

// Key inputs (active low with internal pull-ups)
pub const KEY_PINS: [u8; KEY_COUNT] = [4, 5]; // GPIO 4, 5

// Blink outputs
pub const BLINK_LED_PIN: u8 = 25; // Built-in LED on Pico
pub const BLINK_PROBE_PIN: u8 = 20; // Mirrors the LED for scope probing

// ===================================================================
// Timing Configuration
// ===================================================================

pub const DEBOUNCE_PERIOD_MS: u64 = 40; // Key poll / debounce interval
pub const BLINK_PERIOD_MS: u64 = 1000; // Full blink cycle

/// Key poll interval. A press or release must persist across two
/// consecutive polls to be confirmed, so contact bounce shorter than
/// one interval is rejected.
pub const DEBOUNCE_PERIOD: Duration = Duration::from_millis(DEBOUNCE_PERIOD_MS);

/// Blink cycle length. The indicator is on for the first half.
pub const BLINK_PERIOD: Duration = Duration::from_millis(BLINK_PERIOD_MS);

// ===================================================================
// Status Channel Configuration
// ===================================================================

pub const STATUS_QUEUE_DEPTH: usize = 10; // Pending status lines before producers block

/// Maximum length of a formatted status line. "KEY1 T0042" needs 10
/// bytes; two spare digits cover presses up to ~16 minutes before the
/// line builder reports overflow.
pub const STATUS_LINE_LEN: usize = 12;
