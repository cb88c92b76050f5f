//! 4-digit display renderer
//!
//! Binds a [`Multiplexer`] to a shared [`DisplayState`] and implements the
//! [`Render`] pass: snapshot the text once, then strobe every planned frame.

use embedded_hal::delay::DelayNs;
use segment_core::config::TimingConfig;
use segment_core::glyph::SEGMENT_COUNT;
use segment_core::scroll::{frames, DIGIT_COUNT};
use segment_core::state::{DisplayState, Snapshot};
use segment_core::traits::Render;
use segment_hal::Pin;

use crate::error::Error;
use crate::multiplex::Multiplexer;

/// Renderer for one 4-digit 7-segment display
pub struct Led4<'a, P, T> {
    mux: Multiplexer<P, T>,
    state: &'a DisplayState,
    snapshot: Snapshot,
    dwell_sweeps: u16,
}

impl<'a, P: Pin, T: DelayNs> Led4<'a, P, T> {
    /// Create a renderer, taking ownership of the pins
    ///
    /// The display is dark when this returns.
    pub fn new(
        digits: [P; DIGIT_COUNT],
        segments: [P; SEGMENT_COUNT],
        delay: T,
        state: &'a DisplayState,
        timing: &TimingConfig,
    ) -> Result<Self, Error<P::Error>> {
        let mux = Multiplexer::new(digits, segments, delay, timing.digit_hold_us)?;
        Ok(Self::with_multiplexer(mux, state, timing.dwell_sweeps))
    }

    /// Create a renderer around an existing multiplexer
    pub fn with_multiplexer(
        mux: Multiplexer<P, T>,
        state: &'a DisplayState,
        dwell_sweeps: u16,
    ) -> Self {
        Self {
            mux,
            state,
            snapshot: Snapshot::new(),
            dwell_sweeps,
        }
    }

    /// Access the underlying multiplexer
    pub fn multiplexer(&self) -> &Multiplexer<P, T> {
        &self.mux
    }

    /// Text used by the most recent pass
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }
}

impl<P: Pin, T: DelayNs> Render for Led4<'_, P, T> {
    type Error = Error<P::Error>;

    fn render_once(&mut self) -> Result<(), Self::Error> {
        // Text is read once per pass; updates land on the next pass
        self.state.snapshot(&mut self.snapshot);

        for frame in frames(self.snapshot.chars(), self.dwell_sweeps) {
            for _ in 0..frame.sweeps {
                self.mux.strobe(&frame.window)?;
            }
        }
        Ok(())
    }

    fn blank(&mut self) -> Result<(), Self::Error> {
        self.mux.blank()
    }
}
