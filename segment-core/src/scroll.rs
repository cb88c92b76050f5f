//! Scroll planning
//!
//! Splits the display text into the 4-character windows the renderer
//! strobes. Text that fits is shown once, left-justified. Longer text
//! scrolls one character per frame until the last character has left the
//! display.

use heapless::String;

/// Number of physical digit positions
pub const DIGIT_COUNT: usize = 4;

/// Characters shown on the four digits, left to right
pub type Window = [char; DIGIT_COUNT];

/// One window and how many consecutive sweeps it is held for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Frame {
    /// Characters for digits 0..3
    pub window: Window,
    /// Number of strobe sweeps to hold this window
    pub sweeps: u16,
}

impl Frame {
    /// Window as a string (for logging and tests)
    pub fn text(&self) -> String<16> {
        let mut s = String::new();
        for c in self.window {
            // 4 chars of at most 4 bytes each always fit
            let _ = s.push(c);
        }
        s
    }
}

/// Whether text of `len` characters needs to scroll
pub const fn is_scrolling(len: usize) -> bool {
    len > DIGIT_COUNT
}

/// Iterator over the frames of one render pass
#[derive(Debug, Clone)]
pub struct Frames<'a> {
    text: &'a [char],
    offset: usize,
    count: usize,
    sweeps: u16,
}

/// Plan the frames for one pass over `text`
///
/// - Up to 4 characters: a single frame, padded on the right, held for one sweep.
/// - More than 4 characters: one frame per starting offset `0..len`, each held
///   for `dwell_sweeps` sweeps. Positions past the end are spaces.
pub fn frames(text: &[char], dwell_sweeps: u16) -> Frames<'_> {
    let (count, sweeps) = if is_scrolling(text.len()) {
        (text.len(), dwell_sweeps)
    } else {
        (1, 1)
    };

    Frames {
        text,
        offset: 0,
        count,
        sweeps,
    }
}

/// Window starting at `offset`, space-padded past the end of the text
pub fn window_at(text: &[char], offset: usize) -> Window {
    core::array::from_fn(|i| text.get(offset + i).copied().unwrap_or(' '))
}

impl Iterator for Frames<'_> {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        if self.offset >= self.count {
            return None;
        }

        let frame = Frame {
            window: window_at(self.text, self.offset),
            sweeps: self.sweeps,
        };
        self.offset += 1;
        Some(frame)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.offset;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Frames<'_> {}
