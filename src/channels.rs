//! Inter-task status channel
//!
//! Bounded FIFO of owned status lines from the producer tasks (key
//! polling, blink) to the single console task. Producers block
//! cooperatively when all slots are taken; order is preserved.
//!
//! `CriticalSectionRawMutex` rather than `ThreadModeRawMutex` so the
//! same channel type works in host tests, where there is no Cortex-M
//! thread mode.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Channel, Receiver, Sender};

use crate::config::STATUS_QUEUE_DEPTH;
use crate::types::StatusLine;

/// Status line channel from producer tasks to the console task.
/// Buffer size: 10 (producers block, never drop, once it fills)
pub type StatusQueue = Channel<CriticalSectionRawMutex, StatusLine, STATUS_QUEUE_DEPTH>;

/// Producer handle onto a [`StatusQueue`].
pub type StatusSender<'a> = Sender<'a, CriticalSectionRawMutex, StatusLine, STATUS_QUEUE_DEPTH>;

/// Consumer handle onto a [`StatusQueue`].
pub type StatusReceiver<'a> = Receiver<'a, CriticalSectionRawMutex, StatusLine, STATUS_QUEUE_DEPTH>;
