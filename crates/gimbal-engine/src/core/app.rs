use std::time::Instant;

use winit::event::WindowEvent;
use winit::window::WindowId;

use crate::input::ControlEvent;

use super::ctx::FrameCtx;

/// Keep going or shut down; every app callback answers with one of these.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// What the app wants from the event loop after a wake.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Wake {
    /// Request a redraw before the loop sleeps again.
    pub redraw: bool,
    /// Earliest instant the app needs waking again, or `None` to sleep
    /// until the next platform event.
    pub next_deadline: Option<Instant>,
}

impl Wake {
    /// Sleep until the next platform event.
    pub const IDLE: Wake = Wake {
        redraw: false,
        next_deadline: None,
    };
}

/// What the runtime needs from an app.
pub trait App {
    /// Raw window events the runtime did not consume itself. Most apps never
    /// need this hook.
    fn on_window_event(&mut self, _window_id: WindowId, _event: &WindowEvent) -> AppControl {
        AppControl::Continue
    }

    /// A key edge arrived, already translated to a logical control.
    fn on_control(&mut self, event: ControlEvent, now: Instant) -> AppControl;

    /// The event loop woke up, for any reason, and is about to sleep again.
    ///
    /// The app advances its timers here and reports when it next needs
    /// waking. Returning [`Wake::IDLE`] parks the loop on platform events.
    fn on_wake(&mut self, now: Instant) -> Wake;

    /// A frame is being recorded; draw it.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;
}
