//! Common types shared across the Keypulse tasks
//!
//! This module contains the debounce state machine's state and event
//! types plus the per-key timing record kept in the shared store.

use embassy_time::{Duration, Instant};

use crate::config::STATUS_LINE_LEN;

/// A formatted status line, owned by exactly one task at a time.
///
/// The line moves from a producer into the status channel and from the
/// channel to the console task, which drops it after printing. Ownership
/// transfer by move makes a double release or a use-after-release
/// unrepresentable.
pub type StatusLine = heapless::String<STATUS_LINE_LEN>;

/// Debounce state of one key.
///
/// The two edge states are candidates: a level change is confirmed only
/// if it persists across one additional poll, which rejects contact
/// bounce shorter than one poll interval.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyState {
    /// Key is up
    Released,
    /// Active level seen once; press pending confirmation
    FallingEdge,
    /// Key is down
    Pressed,
    /// Inactive level seen once; release pending confirmation
    RisingEdge,
    /// Fault state; the next poll resets the key to `Released` and
    /// clears its timing
    Invalid,
}

/// Confirmed key event emitted by [`Keypad::poll`](crate::keys::Keypad::poll).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyEvent {
    /// Press confirmed on the second consecutive active sample
    Pressed,
    /// Release confirmed; `held` is the completed press duration
    Released { held: Duration },
}

/// Timing record of one key, held in the [`TimingStore`](crate::timing::TimingStore).
///
/// `None` is the invalid sentinel: `held_for` is meaningful only right
/// after a completed press/release cycle and readers must treat `None`
/// as "no completed gesture yet".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyTiming {
    /// Tick at which the last press was confirmed
    pub pressed_at: Option<Instant>,
    /// Tick at which the last release was confirmed
    pub released_at: Option<Instant>,
    /// Duration of the last completed press/release cycle
    pub held_for: Option<Duration>,
}

impl KeyTiming {
    /// Record with every field at the invalid sentinel.
    pub const INVALID: KeyTiming = KeyTiming {
        pressed_at: None,
        released_at: None,
        held_for: None,
    };
}
