//! Configuration types
//!
//! Board-agnostic configuration for one display: which host pins it is
//! wired to, how long each digit is held and how over-long text is handled.

pub mod hardware;
pub mod types;

pub use hardware::*;
pub use types::*;
