//! Display line backed by an `rppal` IO pin
//!
//! Segment lines are never driven. They stay inputs and are lit or
//! darkened by switching the internal pull resistor, which keeps the
//! current through each LED limited by the resistor.

use core::convert::Infallible;

use rppal::gpio::{Bias, IoPin, Mode, Pin as GpioPin};
use segment_hal::{Pin, Polarity, Pull};

/// One display line on the Raspberry Pi header
pub struct RpiPin {
    pin: IoPin,
    polarity: Polarity,
}

impl RpiPin {
    /// Take a GPIO pin as a high-impedance input
    pub fn new(pin: GpioPin, polarity: Polarity) -> Self {
        Self {
            pin: pin.into_io(Mode::Input),
            polarity,
        }
    }

    /// BCM number of the underlying pin
    pub fn number(&self) -> u8 {
        self.pin.pin()
    }
}

impl Pin for RpiPin {
    type Error = Infallible;

    fn set_output_mode(&mut self) -> Result<(), Self::Error> {
        self.pin.set_mode(Mode::Output);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.pin.set_high();
        Ok(())
    }

    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.pin.set_low();
        Ok(())
    }

    fn set_pull(&mut self, pull: Pull) -> Result<(), Self::Error> {
        self.pin.set_bias(bias(pull));
        Ok(())
    }

    fn set_segment_active(&mut self, active: bool) -> Result<(), Self::Error> {
        self.set_pull(self.polarity.pull(active))
    }
}

fn bias(pull: Pull) -> Bias {
    match pull {
        Pull::Up => Bias::PullUp,
        Pull::Down => Bias::PullDown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bias_mapping() {
        assert_eq!(bias(Pull::Up), Bias::PullUp);
        assert_eq!(bias(Pull::Down), Bias::PullDown);
    }

    #[test]
    fn test_default_polarity_lights_on_pull_down() {
        assert_eq!(bias(Polarity::ActiveLow.pull(true)), Bias::PullDown);
        assert_eq!(bias(Polarity::ActiveLow.pull(false)), Bias::PullUp);
    }
}
