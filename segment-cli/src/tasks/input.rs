//! Stdin input task
//!
//! Forwards every line read to the display state. Returns once the
//! reader is exhausted.

use std::io::{self, BufRead};

use log::{debug, info, warn};
use segment_core::glyph::is_supported;
use segment_core::DisplayState;

/// Summary of one input session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputStats {
    /// Lines shown on the display
    pub accepted: usize,
    /// Lines refused by the length policy
    pub rejected: usize,
}

/// Feed lines from `reader` into `state` until end of input
///
/// Lines are decoded lossily: bytes that are not UTF-8 become U+FFFD and
/// show as a blank digit. A refused line is logged and skipped; the display
/// keeps its current text. Only an I/O error ends the task early.
pub fn input_task<R: BufRead>(mut reader: R, state: &DisplayState) -> io::Result<InputStats> {
    info!("Input task started");
    let mut stats = InputStats::default();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        debug!("Input line: {:?}", line);
        if let Some(c) = line.trim().chars().find(|&c| c != ' ' && !is_supported(c)) {
            debug!("No glyph for {:?}; shown blank", c);
        }

        match state.update(&line) {
            Ok(()) => stats.accepted += 1,
            Err(e) => {
                warn!("Ignoring {:?}: {}", line, e);
                stats.rejected += 1;
            }
        }
    }

    info!(
        "End of input ({} shown, {} rejected)",
        stats.accepted, stats.rejected
    );
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use segment_core::config::LengthPolicy;
    use std::io::Cursor;

    #[test]
    fn test_last_line_wins() {
        let state = DisplayState::new();
        let stats = input_task(Cursor::new("one\ntwo\n  three  \n"), &state).unwrap();

        assert_eq!(stats, InputStats { accepted: 3, rejected: 0 });
        assert_eq!(state.text(), "THREE");
        assert_eq!(state.generation(), 3);
    }

    #[test]
    fn test_final_line_without_newline() {
        let state = DisplayState::new();
        input_task(Cursor::new("12\n34"), &state).unwrap();
        assert_eq!(state.text(), "34");
    }

    #[test]
    fn test_crlf_line_endings() {
        let state = DisplayState::new();
        input_task(Cursor::new("ab\r\n"), &state).unwrap();
        assert_eq!(state.text(), "AB");
    }

    #[test]
    fn test_empty_line_clears_display() {
        let state = DisplayState::new();
        input_task(Cursor::new("abcd\n\n"), &state).unwrap();
        assert_eq!(state.text(), "");
    }

    #[test]
    fn test_empty_input_leaves_state_untouched() {
        let state = DisplayState::new();
        state.update("hello").unwrap();
        let stats = input_task(Cursor::new(""), &state).unwrap();

        assert_eq!(stats, InputStats::default());
        assert_eq!(state.text(), "HELLO");
    }

    #[test]
    fn test_rejected_lines_are_skipped() {
        let state = DisplayState::with_policy(LengthPolicy::Reject);
        let stats = input_task(Cursor::new("12.3\ntoo long\n-8-\n"), &state).unwrap();

        assert_eq!(stats, InputStats { accepted: 2, rejected: 1 });
        assert_eq!(state.text(), "-8-");
    }

    #[test]
    fn test_invalid_utf8_shown_blank_and_input_continues() {
        let state = DisplayState::new();
        let input: &[u8] = b"ok\nCAF\xe9\nlater\n";

        let stats = input_task(input, &state).unwrap();
        assert_eq!(stats, InputStats { accepted: 3, rejected: 0 });
        assert_eq!(state.text(), "LATER");
    }

    #[test]
    fn test_invalid_byte_becomes_replacement_char() {
        let state = DisplayState::new();
        let input: &[u8] = b"CAF\xe9\n";

        input_task(input, &state).unwrap();
        assert_eq!(state.text(), "CAF\u{FFFD}");
        assert!(segment_core::glyph('\u{FFFD}').is_blank());
    }

    /// Reader that yields one line, then fails
    struct BrokenPipe {
        sent: bool,
    }

    impl io::Read for BrokenPipe {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.sent {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
            }
            self.sent = true;
            buf[..3].copy_from_slice(b"ab\n");
            Ok(3)
        }
    }

    #[test]
    fn test_io_error_ends_task() {
        let state = DisplayState::new();
        let reader = io::BufReader::new(BrokenPipe { sent: false });

        let err = input_task(reader, &state).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        assert_eq!(state.text(), "AB");
    }
}
