//! Shared per-key timing store
//!
//! The poll task writes press/release ticks here; any other task may
//! read the last completed press duration. Every access runs inside a
//! scoped critical section: the closure passed to [`Mutex::lock`] is
//! synchronous, so blocking calls and channel operations cannot be
//! performed while the lock is held.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use embassy_time::{Duration, Instant};

use crate::types::KeyTiming;

/// Critical-section guarded timing records for `N` keys.
pub struct TimingStore<const N: usize> {
    slots: Mutex<CriticalSectionRawMutex, RefCell<[KeyTiming; N]>>,
}

impl<const N: usize> TimingStore<N> {
    /// Create a store with every key at the invalid sentinel.
    pub const fn new() -> Self {
        Self {
            slots: Mutex::new(RefCell::new([KeyTiming::INVALID; N])),
        }
    }

    /// Record a confirmed press. Clears the stale release/duration
    /// fields so readers never see a duration from a previous cycle
    /// paired with the new press tick.
    pub fn record_press(&self, key: usize, at: Instant) {
        self.slots.lock(|slots| {
            let mut slots = slots.borrow_mut();
            slots[key] = KeyTiming {
                pressed_at: Some(at),
                released_at: None,
                held_for: None,
            };
        });
    }

    /// Record a confirmed release and derive the completed press
    /// duration. Returns `None` if no press tick was pending.
    pub fn record_release(&self, key: usize, at: Instant) -> Option<Duration> {
        self.slots.lock(|slots| {
            let mut slots = slots.borrow_mut();
            let slot = &mut slots[key];
            slot.released_at = Some(at);
            slot.held_for = slot
                .pressed_at
                .and_then(|pressed| at.checked_duration_since(pressed));
            slot.held_for
        })
    }

    /// Last completed press duration, or `None` if no cycle has
    /// completed since the last [`clear_duration`](Self::clear_duration).
    pub fn duration(&self, key: usize) -> Option<Duration> {
        self.slots.lock(|slots| slots.borrow()[key].held_for)
    }

    /// Reset the duration to the invalid sentinel, acknowledging that
    /// the measurement was consumed. Press/release ticks are kept.
    pub fn clear_duration(&self, key: usize) {
        self.slots.lock(|slots| {
            slots.borrow_mut()[key].held_for = None;
        });
    }

    /// Clear the whole record, used when a key recovers from a fault.
    pub fn reset(&self, key: usize) {
        self.slots.lock(|slots| {
            slots.borrow_mut()[key] = KeyTiming::INVALID;
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_invalid_sentinel() {
        let store: TimingStore<2> = TimingStore::new();
        assert_eq!(store.duration(0), None);
        assert_eq!(store.duration(1), None);
    }

    #[test]
    fn release_derives_duration_from_press() {
        let store: TimingStore<1> = TimingStore::new();
        store.record_press(0, Instant::from_millis(100));
        assert_eq!(store.duration(0), None); // nothing completed yet

        let held = store.record_release(0, Instant::from_millis(220));
        assert_eq!(held, Some(Duration::from_millis(120)));
        assert_eq!(store.duration(0), Some(Duration::from_millis(120)));
    }

    #[test]
    fn clear_duration_resets_to_sentinel_until_next_cycle() {
        let store: TimingStore<1> = TimingStore::new();
        store.record_press(0, Instant::from_millis(0));
        store.record_release(0, Instant::from_millis(40));
        store.clear_duration(0);
        assert_eq!(store.duration(0), None);

        // Stays at the sentinel until another full cycle completes.
        store.record_press(0, Instant::from_millis(1000));
        assert_eq!(store.duration(0), None);
        store.record_release(0, Instant::from_millis(1080));
        assert_eq!(store.duration(0), Some(Duration::from_millis(80)));
    }

    #[test]
    fn new_press_clears_stale_duration() {
        let store: TimingStore<1> = TimingStore::new();
        store.record_press(0, Instant::from_millis(0));
        store.record_release(0, Instant::from_millis(40));
        store.record_press(0, Instant::from_millis(500));
        assert_eq!(store.duration(0), None);
    }

    #[test]
    fn release_without_press_yields_no_duration() {
        let store: TimingStore<1> = TimingStore::new();
        assert_eq!(store.record_release(0, Instant::from_millis(10)), None);
        assert_eq!(store.duration(0), None);
    }

    #[test]
    fn keys_do_not_share_slots() {
        let store: TimingStore<2> = TimingStore::new();
        store.record_press(0, Instant::from_millis(0));
        store.record_press(1, Instant::from_millis(20));
        store.record_release(0, Instant::from_millis(100));
        assert_eq!(store.duration(0), Some(Duration::from_millis(100)));
        assert_eq!(store.duration(1), None);
        store.record_release(1, Instant::from_millis(50));
        assert_eq!(store.duration(1), Some(Duration::from_millis(30)));
        assert_eq!(store.duration(0), Some(Duration::from_millis(100)));
    }
}
