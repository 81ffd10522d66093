//! Drawing the four panes.
//!
//! [`SceneRenderer`] turns the simulation state into GPU commands and owns
//! every GPU resource that takes: pipelines, vertex buffers, uniform slots,
//! and the depth texture.
//!
//! Conventions:
//! - CPU geometry is in model units (right-handed, +Y up).
//! - Pane rectangles, viewports, and scissor rects are in physical pixels.

mod ctx;
mod scene;

pub use ctx::{RenderCtx, RenderTarget};
pub use scene::{SceneRenderer, DEPTH_FORMAT};
