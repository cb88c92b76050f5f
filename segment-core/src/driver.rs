//! Driver loop
//!
//! Calls [`Render::render_once`] back-to-back until cancelled. Cancellation
//! is only observed between passes, so a digit is never left energized by a
//! pass cut short.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

use crate::traits::Render;

/// Signal used to stop the driver loop
pub type CancelSignal = Signal<CriticalSectionRawMutex, ()>;

/// Drive `display` until `cancel` is signaled, then blank it
///
/// Returns the number of completed passes. A pin failure aborts the loop
/// immediately and is returned as-is; no blanking is attempted on a display
/// whose pins are already failing.
pub fn run_until_cancelled<R: Render>(
    display: &mut R,
    cancel: &CancelSignal,
) -> Result<u64, R::Error> {
    let mut passes: u64 = 0;

    while !cancel.signaled() {
        display.render_once()?;
        passes += 1;
    }

    display.blank()?;
    Ok(passes)
}
