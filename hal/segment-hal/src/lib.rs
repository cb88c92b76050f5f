//! Segment Hardware Abstraction Layer
//!
//! This crate defines the pin capability the display renderer is written
//! against. Platform backends (Raspberry Pi via `rppal`, or any board whose
//! HAL implements `embedded-hal` output pins) implement these traits so the
//! same multiplexing code runs everywhere.
//!
//! # Layering
//!
//! ```text
//! segment-cli ─► segment-drivers ─► segment-hal ◄─ segment-hal-rpi
//!                      │
//!                      └──► segment-core (glyphs, scroll, state)
//! ```
//!
//! Boards without an `rppal` backend wrap their `embedded-hal` output pins
//! in [`PushPullPin`].
//!
//! # Traits
//!
//! - [`gpio::Pin`] - Digit-select and segment lines
//! - [`DelayNs`] - Hold delay between digit strobes (re-exported from `embedded-hal`)

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;

pub use embedded_hal::delay::DelayNs;
pub use gpio::{Pin, Polarity, Pull, PushPullPin};
