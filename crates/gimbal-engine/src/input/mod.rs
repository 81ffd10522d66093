//! Press-and-hold rotation controls.
//!
//! Nothing in here knows about winit; the window runtime translates platform
//! key events into [`ControlEvent`]s, and the [`InputController`] turns held
//! controls into repeated angle steps on its own clock.

mod controller;
mod types;

pub use controller::{InputController, REPEAT_PERIOD, STEP_DEGREES};
pub use types::{Control, ControlEvent, ControlState};
