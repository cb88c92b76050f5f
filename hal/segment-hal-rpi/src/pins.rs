//! Config-driven wiring of the display pins
//!
//! Takes the twelve BCM pins named in a [`PinAssignment`] from the GPIO
//! driver, in the order the multiplexer expects them.

use log::debug;
use rppal::gpio::{Gpio, Result};
use segment_core::config::PinAssignment;
use segment_core::glyph::SEGMENT_COUNT;
use segment_core::scroll::DIGIT_COUNT;
use segment_hal::Polarity;

use crate::gpio::RpiPin;

/// Display lines taken from the GPIO driver
pub struct WiredPins {
    /// Digit-select lines, left to right
    pub digits: [RpiPin; DIGIT_COUNT],
    /// Segment lines in a, b, c, d, e, f, g, dp order
    pub segments: [RpiPin; SEGMENT_COUNT],
}

/// Take every display pin named in `pins`
///
/// Fails if a pin is unavailable, e.g. already claimed by another process.
/// Pins taken before the failure are released again when dropped.
///
/// # Arguments
/// - `gpio`: open GPIO driver
/// - `pins`: BCM pin numbers for each display line
/// - `polarity`: which bias lights a segment
pub fn wire(gpio: &Gpio, pins: &PinAssignment, polarity: Polarity) -> Result<WiredPins> {
    let take = |number: u8| -> Result<RpiPin> {
        let pin = RpiPin::new(gpio.get(number)?, polarity);
        debug!("Took GPIO {}", pin.number());
        Ok(pin)
    };

    let [d1, d2, d3, d4] = pins.digits();
    let digits = [take(d1)?, take(d2)?, take(d3)?, take(d4)?];

    let [a, b, c, d, e, f, g, dp] = pins.segments();
    let segments = [
        take(a)?,
        take(b)?,
        take(c)?,
        take(d)?,
        take(e)?,
        take(f)?,
        take(g)?,
        take(dp)?,
    ];

    Ok(WiredPins { digits, segments })
}
