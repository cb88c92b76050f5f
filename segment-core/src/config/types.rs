//! Configuration type definitions

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use segment_hal::Polarity;

use super::hardware::PinAssignment;

/// Default per-digit hold time (1 ms)
pub const DEFAULT_DIGIT_HOLD_US: u32 = 1_000;

/// Default number of sweeps each scroll window is held for
pub const DEFAULT_DWELL_SWEEPS: u16 = 50;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// The same host pin is assigned to two display lines
    DuplicatePin(u8),
    /// Digit hold time must be non-zero
    ZeroHoldTime,
    /// Scroll dwell must be at least one sweep
    ZeroDwell,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::DuplicatePin(pin) => write!(f, "pin {} is assigned more than once", pin),
            ConfigError::ZeroHoldTime => f.write_str("digit_hold_us must be greater than zero"),
            ConfigError::ZeroDwell => f.write_str("dwell_sweeps must be greater than zero"),
        }
    }
}

impl core::error::Error for ConfigError {}

/// What to do with text longer than the four digits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LengthPolicy {
    /// Accept any length and scroll it across the display
    #[default]
    Scroll,
    /// Refuse updates longer than four characters, keeping the current text
    Reject,
}

/// Multiplexing timing
///
/// The hold time is the dominant cost of a sweep: one sweep takes roughly
/// `4 * digit_hold_us`, and a scroll step takes `dwell_sweeps` sweeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TimingConfig {
    /// How long each digit stays lit per sweep (microseconds)
    pub digit_hold_us: u32,
    /// Sweeps per scroll window
    pub dwell_sweeps: u16,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            digit_hold_us: DEFAULT_DIGIT_HOLD_US,
            dwell_sweeps: DEFAULT_DWELL_SWEEPS,
        }
    }
}

impl TimingConfig {
    /// Approximate wall-clock time of one full sweep (microseconds)
    pub const fn sweep_us(&self) -> u32 {
        self.digit_hold_us.saturating_mul(4)
    }

    /// Check the timing values are usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.digit_hold_us == 0 {
            return Err(ConfigError::ZeroHoldTime);
        }
        if self.dwell_sweeps == 0 {
            return Err(ConfigError::ZeroDwell);
        }
        Ok(())
    }
}

/// Complete configuration for one display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DisplayConfig {
    /// Host pin wiring
    pub pins: PinAssignment,
    /// Multiplexing timing
    pub timing: TimingConfig,
    /// Handling of text longer than four characters
    pub length_policy: LengthPolicy,
    /// Which bias lights a segment
    pub polarity: Polarity,
}

impl DisplayConfig {
    /// Validate the whole configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.pins.validate()?;
        self.timing.validate()
    }
}
