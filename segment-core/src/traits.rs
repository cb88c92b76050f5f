//! Hardware abstraction traits
//!
//! These traits define the interface between the driver loop and a
//! concrete, pin-owning display renderer.

/// A display that can be refreshed one pass at a time
pub trait Render {
    /// Error type for pin-level failures
    type Error;

    /// Perform exactly one multiplexed pass over the current text
    ///
    /// A pass always completes (or fails) before returning; it is the only
    /// safe point to stop driving the display.
    fn render_once(&mut self) -> Result<(), Self::Error>;

    /// De-energize every digit and segment
    fn blank(&mut self) -> Result<(), Self::Error>;
}
