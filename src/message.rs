//! Status line builders
//!
//! Producers build their lines into fixed-capacity owned buffers before
//! sending. A line that does not fit is reported as [`LineOverflow`] so
//! the producer can skip that message cycle instead of enqueuing a
//! truncated report.

use core::fmt::Write;

use embassy_time::Duration;

use crate::types::StatusLine;

/// Fixed line sent by the blink task at the start of each cycle.
pub const BLINK_LINE: &str = "LED ON";

/// The text did not fit the status line buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LineOverflow;

/// Build a key release report: `"<LABEL> T<duration ms, 4-digit zero-padded>"`.
pub fn release_line(label: &str, held: Duration) -> Result<StatusLine, LineOverflow> {
    let mut line = StatusLine::new();
    write!(line, "{} T{:04}", label, held.as_millis()).map_err(|_| LineOverflow)?;
    Ok(line)
}

/// Copy a fixed message into an owned status line.
pub fn status_line(text: &str) -> Result<StatusLine, LineOverflow> {
    let mut line = StatusLine::new();
    line.push_str(text).map_err(|_| LineOverflow)?;
    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn release_line_is_zero_padded_to_four_digits() {
        let line = release_line("KEY1", Duration::from_millis(42)).unwrap();
        assert_eq!(line.as_str(), "KEY1 T0042");
    }

    #[test]
    fn release_line_grows_past_four_digits() {
        let line = release_line("KEY2", Duration::from_millis(12345)).unwrap();
        assert_eq!(line.as_str(), "KEY2 T12345");
    }

    #[test]
    fn oversized_release_line_reports_overflow() {
        // Seven duration digits push the line past its capacity; the
        // builder must fail rather than truncate.
        let res = release_line("KEY1", Duration::from_millis(1_000_000));
        assert_eq!(res, Err(LineOverflow));
    }

    #[test]
    fn blink_line_fits() {
        let line = status_line(BLINK_LINE).unwrap();
        assert_eq!(line.as_str(), "LED ON");
    }

    #[test]
    fn oversized_fixed_text_reports_overflow() {
        assert_eq!(status_line("A MUCH TOO LONG LINE"), Err(LineOverflow));
    }
}
