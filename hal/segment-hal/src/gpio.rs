//! GPIO pin abstractions
//!
//! Provides the per-pin capability used by the display multiplexer:
//! digital output for digit-select lines and an "energized" switch for
//! segment lines whose electrical meaning depends on the wiring.

use core::fmt::Debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Idle electrical bias of a pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Pull {
    /// Pulled towards the supply rail
    Up,
    /// Pulled towards ground
    Down,
}

/// Which bias lights a segment
///
/// The display package decides whether a segment line lights its LED when
/// sinking or sourcing current. The multiplexer only ever asks for
/// "segment active"; this type maps that onto a bias.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Polarity {
    /// Segment lit when its line is pulled down
    #[default]
    ActiveLow,
    /// Segment lit when its line is pulled up
    ActiveHigh,
}

impl Polarity {
    /// Bias that puts a segment line into the requested state
    pub const fn pull(self, active: bool) -> Pull {
        match (self, active) {
            (Polarity::ActiveLow, true) | (Polarity::ActiveHigh, false) => Pull::Down,
            (Polarity::ActiveLow, false) | (Polarity::ActiveHigh, true) => Pull::Up,
        }
    }
}

/// A single display line (digit-select or segment)
///
/// Implementations handle the actual register or kernel interface of the
/// platform. Every operation may fail; callers treat a failure as fatal
/// for the current render pass.
pub trait Pin {
    /// Error type for pin operations
    type Error: Debug;

    /// Configure the pin as a digital output
    fn set_output_mode(&mut self) -> Result<(), Self::Error>;

    /// Drive the pin high (logic 1)
    fn set_high(&mut self) -> Result<(), Self::Error>;

    /// Drive the pin low (logic 0)
    fn set_low(&mut self) -> Result<(), Self::Error>;

    /// Set the idle bias of the pin
    fn set_pull(&mut self, pull: Pull) -> Result<(), Self::Error>;

    /// Put a segment line into its lit (`true`) or unlit (`false`) state
    fn set_segment_active(&mut self, active: bool) -> Result<(), Self::Error>;
}

/// [`Pin`] adapter for any `embedded-hal` push-pull output
///
/// Push-pull outputs have no separate bias, so a pull request is emulated
/// by driving the line to the matching level.
pub struct PushPullPin<P> {
    pin: P,
    polarity: Polarity,
}

impl<P: embedded_hal::digital::OutputPin> PushPullPin<P> {
    /// Wrap an output pin with the given segment polarity
    pub fn new(pin: P, polarity: Polarity) -> Self {
        Self { pin, polarity }
    }

    /// Release the underlying pin
    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P: embedded_hal::digital::OutputPin> Pin for PushPullPin<P> {
    type Error = P::Error;

    fn set_output_mode(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.pin.set_high()
    }

    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.pin.set_low()
    }

    fn set_pull(&mut self, pull: Pull) -> Result<(), Self::Error> {
        match pull {
            Pull::Up => self.pin.set_high(),
            Pull::Down => self.pin.set_low(),
        }
    }

    fn set_segment_active(&mut self, active: bool) -> Result<(), Self::Error> {
        self.set_pull(self.polarity.pull(active))
    }
}
