//! The contract between the platform runtime and the app.
//!
//! The runtime drives [`App`] callbacks and honors the returned [`AppControl`]
//! and [`Wake`] requests; [`FrameCtx`] is the only channel through which app
//! code reaches the GPU.

mod app;
mod ctx;

pub use app::{App, AppControl, Wake};
pub use ctx::{FrameCtx, WindowCtx};
