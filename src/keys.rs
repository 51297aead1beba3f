//! Key debounce state machine and polling task
//!
//! Each key runs a four-state machine evaluated once per poll tick. A
//! level change is confirmed only if it persists across two consecutive
//! polls, so contact bounce shorter than one poll interval never
//! produces an event. Confirmed presses and releases are stamped into
//! the shared [`TimingStore`]; a confirmed release additionally sends a
//! formatted duration report through the status channel.

use embassy_time::{Duration, Instant};

use crate::channels::StatusQueue;
use crate::config::KEY_LABELS;
use crate::message;
use crate::timing::TimingStore;
use crate::types::{KeyEvent, KeyState, StatusLine};

#[cfg(feature = "hardware")]
use {
    crate::config::{DEBOUNCE_PERIOD, KEY_COUNT},
    crate::System,
    defmt::info,
    embassy_rp::gpio::Input,
    embassy_time::Timer,
};

// ===================================================================
// Debounce State Machine
// ===================================================================

/// Debounce state for `N` keys.
///
/// Owned exclusively by the poll task; only the timing fields it stamps
/// into the [`TimingStore`] are shared with other tasks.
pub struct Keypad<const N: usize> {
    states: [KeyState; N],
}

impl<const N: usize> Keypad<N> {
    /// All keys start released.
    pub const fn new() -> Self {
        Self {
            states: [KeyState::Released; N],
        }
    }

    /// Current debounce state of one key.
    pub fn state(&self, key: usize) -> KeyState {
        self.states[key]
    }

    /// Advance one key's state machine by one poll step.
    ///
    /// `active` is the sampled input level (true = key held down), `now`
    /// the tick of this poll. A confirmed press records `now` as the
    /// press tick; a confirmed release records the release tick, derives
    /// the held duration and returns it in the event.
    pub fn poll(
        &mut self,
        key: usize,
        active: bool,
        now: Instant,
        timings: &TimingStore<N>,
    ) -> Option<KeyEvent> {
        match self.states[key] {
            KeyState::Released => {
                if active {
                    self.states[key] = KeyState::FallingEdge;
                }
                None
            }

            KeyState::FallingEdge => {
                if active {
                    // Active on two consecutive polls: genuine press.
                    self.states[key] = KeyState::Pressed;
                    timings.record_press(key, now);
                    Some(KeyEvent::Pressed)
                } else {
                    // Reverted within one poll: bounce, rejected.
                    self.states[key] = KeyState::Released;
                    None
                }
            }

            KeyState::Pressed => {
                if !active {
                    self.states[key] = KeyState::RisingEdge;
                }
                None
            }

            KeyState::RisingEdge => {
                if !active {
                    // Inactive on two consecutive polls: genuine release.
                    self.states[key] = KeyState::Released;
                    timings
                        .record_release(key, now)
                        .map(|held| KeyEvent::Released { held })
                } else {
                    // Reverted within one poll: bounce, rejected.
                    self.states[key] = KeyState::Pressed;
                    None
                }
            }

            KeyState::Invalid => {
                // Fault recovery: back to Released with cleared timing,
                // no event emitted.
                self.states[key] = KeyState::Released;
                timings.reset(key);
                #[cfg(feature = "defmt")]
                defmt::warn!("key {} state fault, reset to released", key);
                None
            }
        }
    }
}

// ===================================================================
// Release Reporting
// ===================================================================

/// Build the status line for a completed press, or `None` when the
/// cycle should not be reported.
///
/// A zero-length press is filtered out, matching the reference policy
/// of treating a zero duration as "no event". A line that does not fit
/// its buffer is dropped for this cycle; the duration stays readable in
/// the timing store either way.
fn release_report(key: usize, held: Duration) -> Option<StatusLine> {
    if held.as_ticks() == 0 {
        return None;
    }
    match message::release_line(KEY_LABELS[key], held) {
        Ok(line) => Some(line),
        Err(_) => {
            #[cfg(feature = "defmt")]
            defmt::warn!("status line overflow for key {}, report skipped", key);
            None
        }
    }
}

/// Poll one key and forward any confirmed release through the status
/// channel. Blocks only when the channel is full.
pub async fn poll_once<const N: usize>(
    keypad: &mut Keypad<N>,
    key: usize,
    active: bool,
    now: Instant,
    timings: &TimingStore<N>,
    status: &StatusQueue,
) {
    match keypad.poll(key, active, now, timings) {
        Some(KeyEvent::Released { held }) => {
            if let Some(line) = release_report(key, held) {
                status.send(line).await;
            }
        }
        Some(KeyEvent::Pressed) => {
            #[cfg(feature = "defmt")]
            defmt::debug!("key {} down", key);
        }
        None => {}
    }
}

// ===================================================================
// Key Poll Task
// ===================================================================

/// Polls every configured key once per debounce interval.
///
/// Fixed-delay rescheduling: the next sweep starts one full interval
/// after the previous one finished, so the schedule tolerates drift
/// rather than correcting it.
#[cfg(feature = "hardware")]
#[embassy_executor::task]
pub async fn key_poll_task(system: &'static System, inputs: [Input<'static>; KEY_COUNT]) {
    info!("Key poll task started");

    let mut keypad: Keypad<KEY_COUNT> = Keypad::new();

    loop {
        let now = Instant::now();
        for (key, pin) in inputs.iter().enumerate() {
            // Active low: pull-up input reads low while held down.
            poll_once(&mut keypad, key, pin.is_low(), now, &system.timings, &system.status).await;
        }
        Timer::after(DEBOUNCE_PERIOD).await;
    }
}

// ===================================================================
// Tests
// ===================================================================
