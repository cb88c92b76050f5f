//! Raspberry Pi HAL for the 7-segment display driver
//!
//! This crate provides Raspberry Pi implementations of the shared
//! `segment-hal` traits on top of the `rppal` GPIO driver:
//!
//! - Bias-switched display lines (implements `segment_hal::Pin`)
//! - Thread-sleep hold delay (implements `DelayNs`)
//! - Config-driven wiring of the twelve display pins

pub mod delay;
pub mod gpio;
pub mod pins;

pub use delay::ThreadDelay;
pub use gpio::RpiPin;
pub use pins::{wire, WiredPins};

// Re-export shared traits from segment-hal for convenience
pub use segment_hal::{Pin, Polarity};
