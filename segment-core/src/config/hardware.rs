//! Hardware configuration types
//!
//! Pin wiring of the 12-pin display package (e.g. 3461BS). Field names
//! follow the package pinout: `d1..d4` select a digit, `a..g` and `dp` are
//! the shared segment lines.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::types::ConfigError;

/// Total number of lines the display package needs
pub const PIN_COUNT: usize = 12;

/// Host pin numbers for every display line
///
/// The default matches the reference wiring on a Raspberry Pi
/// (BCM numbering), listed here in package pin order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PinAssignment {
    /// Package pin 12: digit 1 select
    pub d1: u8,
    /// Package pin 11: segment A
    pub a: u8,
    /// Package pin 10: segment F
    pub f: u8,
    /// Package pin 9: digit 2 select
    pub d2: u8,
    /// Package pin 8: digit 3 select
    pub d3: u8,
    /// Package pin 7: segment B
    pub b: u8,
    /// Package pin 1: segment E
    pub e: u8,
    /// Package pin 2: segment D
    pub d: u8,
    /// Package pin 3: decimal point
    pub dp: u8,
    /// Package pin 4: segment C
    pub c: u8,
    /// Package pin 5: segment G
    pub g: u8,
    /// Package pin 6: digit 4 select
    pub d4: u8,
}

impl Default for PinAssignment {
    fn default() -> Self {
        Self {
            d1: 8,
            a: 7,
            f: 16,
            d2: 20,
            d3: 26,
            b: 19,
            e: 13,
            d: 6,
            dp: 5,
            c: 0,
            g: 11,
            d4: 9,
        }
    }
}

impl PinAssignment {
    /// Digit-select pins, left to right
    pub const fn digits(&self) -> [u8; 4] {
        [self.d1, self.d2, self.d3, self.d4]
    }

    /// Segment pins in wiring order (a, b, c, d, e, f, g, dp)
    pub const fn segments(&self) -> [u8; 8] {
        [
            self.a, self.b, self.c, self.d, self.e, self.f, self.g, self.dp,
        ]
    }

    /// All twelve pins, digits first
    pub const fn all(&self) -> [u8; PIN_COUNT] {
        let digits = self.digits();
        let segments = self.segments();
        [
            digits[0],
            digits[1],
            digits[2],
            digits[3],
            segments[0],
            segments[1],
            segments[2],
            segments[3],
            segments[4],
            segments[5],
            segments[6],
            segments[7],
        ]
    }

    /// Check that no host pin is used twice
    pub fn validate(&self) -> Result<(), ConfigError> {
        let pins = self.all();
        for (i, pin) in pins.iter().enumerate() {
            if pins[i + 1..].contains(pin) {
                return Err(ConfigError::DuplicatePin(*pin));
            }
        }
        Ok(())
    }
}
