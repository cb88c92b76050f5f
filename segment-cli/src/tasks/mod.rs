//! Worker loops
//!
//! The render loop owns the pins; the input loop only touches the shared
//! display state. They communicate via the statics in `channels`.

pub mod input;
pub mod render;

pub use input::input_task;
pub use render::render_task;
