//! Driver errors

use core::fmt;

/// Errors raised while driving the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// A pin operation failed; the hardware state is unknown
    Pin(E),
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Pin(e) => write!(f, "pin write failed: {:?}", e),
        }
    }
}

impl<E: fmt::Debug> core::error::Error for Error<E> {}
