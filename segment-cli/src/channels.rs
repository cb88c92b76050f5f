//! Inter-thread communication
//!
//! Defines the statics shared between the render loop and the input
//! thread. Both use critical-section primitives from `segment-core`.

use segment_core::{CancelSignal, DisplayState};
use static_cell::StaticCell;

/// Text to display; initialised once the length policy is known
pub static DISPLAY_STATE: StaticCell<DisplayState> = StaticCell::new();

/// Signal that input has ended and the display should go dark
pub static SHUTDOWN: CancelSignal = CancelSignal::new();
