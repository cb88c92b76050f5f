//! Digit multiplexer
//!
//! Drives a 12-pin multiplexed display: four digit-select lines and eight
//! segment lines shared by every digit. Only one digit is lit at a time; a
//! full sweep lights each digit in turn for the configured hold time.

use embedded_hal::delay::DelayNs;
use segment_core::glyph::{glyph, Glyph, SEGMENT_COUNT};
use segment_core::scroll::{Window, DIGIT_COUNT};
use segment_hal::Pin;

use crate::error::Error;

/// Pin-level strobe engine
///
/// Owns all twelve display pins and the hold delay. The cached
/// `segment_active` state always matches the last command written to each
/// segment pin, so unchanged segments are never rewritten.
pub struct Multiplexer<P, T> {
    digits: [P; DIGIT_COUNT],
    segments: [P; SEGMENT_COUNT],
    delay: T,
    segment_active: [bool; SEGMENT_COUNT],
    hold_us: u32,
}

impl<P: Pin, T: DelayNs> Multiplexer<P, T> {
    /// Take ownership of the pins and put the display into a dark state
    ///
    /// Digit pins are switched to outputs and driven low; segment pins are
    /// set inactive.
    ///
    /// # Arguments
    /// - `digits`: digit-select pins, left to right
    /// - `segments`: segment pins in a, b, c, d, e, f, g, dp order
    /// - `delay`: delay provider for the per-digit hold
    /// - `hold_us`: how long each digit stays lit per sweep
    pub fn new(
        mut digits: [P; DIGIT_COUNT],
        mut segments: [P; SEGMENT_COUNT],
        delay: T,
        hold_us: u32,
    ) -> Result<Self, Error<P::Error>> {
        for pin in digits.iter_mut() {
            pin.set_output_mode().map_err(Error::Pin)?;
            pin.set_low().map_err(Error::Pin)?;
        }
        for pin in segments.iter_mut() {
            pin.set_segment_active(false).map_err(Error::Pin)?;
        }

        Ok(Self {
            digits,
            segments,
            delay,
            segment_active: [false; SEGMENT_COUNT],
            hold_us,
        })
    }

    /// Last state written to each segment pin
    pub fn segment_active(&self) -> &[bool; SEGMENT_COUNT] {
        &self.segment_active
    }

    /// Light one sweep of a 4-character window
    pub fn strobe(&mut self, window: &Window) -> Result<(), Error<P::Error>> {
        for (index, &c) in window.iter().enumerate() {
            self.light_digit(index, glyph(c))?;
        }
        Ok(())
    }

    /// Show `glyph` on digit `index` for one hold period
    ///
    /// The previous digit (wrapping from 0 to 3) is switched off before any
    /// segment changes, so it never flashes the new pattern. A blank glyph
    /// leaves the digit dark but still waits out the hold time.
    ///
    /// # Panics
    /// Panics if `index` is not in `0..4`.
    pub fn light_digit(&mut self, index: usize, glyph: Glyph) -> Result<(), Error<P::Error>> {
        let prev = (index + DIGIT_COUNT - 1) % DIGIT_COUNT;
        self.digits[prev].set_low().map_err(Error::Pin)?;

        let segments = glyph.segments();
        for (i, &lit) in segments.iter().enumerate() {
            if self.segment_active[i] != lit {
                self.segments[i].set_segment_active(lit).map_err(Error::Pin)?;
                self.segment_active[i] = lit;
            }
        }

        if !glyph.is_blank() {
            self.digits[index].set_high().map_err(Error::Pin)?;
        }

        self.delay.delay_us(self.hold_us);
        Ok(())
    }

    /// Switch every digit off and every segment inactive
    pub fn blank(&mut self) -> Result<(), Error<P::Error>> {
        for pin in self.digits.iter_mut() {
            pin.set_low().map_err(Error::Pin)?;
        }
        for (pin, active) in self.segments.iter_mut().zip(self.segment_active.iter_mut()) {
            pin.set_segment_active(false).map_err(Error::Pin)?;
            *active = false;
        }
        Ok(())
    }

    /// Give the pins and delay back
    pub fn release(self) -> ([P; DIGIT_COUNT], [P; SEGMENT_COUNT], T) {
        (self.digits, self.segments, self.delay)
    }
}
