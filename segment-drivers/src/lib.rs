//! Display driver implementations
//!
//! This crate turns the traits and state defined in segment-core into
//! pin activity:
//!
//! - [`Multiplexer`] - per-digit strobe over 4 digit-select and 8 segment pins
//! - [`Led4`] - renderer binding a multiplexer to a shared display state

#![no_std]
#![deny(unsafe_code)]

pub mod error;
pub mod led4;
pub mod multiplex;

pub use error::Error;
pub use led4::Led4;
pub use multiplex::Multiplexer;
