//! The platform loop.
//!
//! [`Runtime`] owns the `winit` event loop and the one window, binds a GPU
//! stack to it, translates key events into logical controls, and keeps the
//! loop sleeping until the app's next timer deadline.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig};
