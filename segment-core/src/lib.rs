//! Board-agnostic core logic for a multiplexed 4-digit 7-segment display
//!
//! This crate contains everything that does not touch a pin:
//!
//! - Segment table (character → glyph)
//! - Scroll planning (text → sequence of 4-character windows)
//! - Shared display state (the text to show, swapped atomically)
//! - Configuration types (pin assignment, timing, length policy)
//! - The `Render` trait and the cancellable driver loop

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

extern crate alloc;

pub mod config;
pub mod driver;
pub mod glyph;
pub mod scroll;
pub mod state;
pub mod traits;

pub use driver::{run_until_cancelled, CancelSignal};
pub use glyph::{glyph, Glyph, Segment, SEGMENT_COUNT};
pub use scroll::{frames, Frame, Window, DIGIT_COUNT};
pub use state::{normalize, DisplayState, Snapshot, UpdateError};
pub use traits::Render;
