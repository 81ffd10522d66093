//! Views: cameras, model transforms, pane layout.
//!
//! Everything here is pure math over [`AttitudeState`](crate::sim::AttitudeState);
//! the render layer consumes the matrices without knowing the conventions.
//! Sign and composition order mirror the controls (yaw about Y, pitch about X,
//! roll about Z) and must not be reordered.

mod camera;
mod kind;
mod layout;
mod transform;

pub use camera::{Camera, FOV_Y_DEGREES, Z_FAR, Z_NEAR};
pub use kind::ViewKind;
pub use layout::{split_panes, PaneRect};
pub use transform::{axis_model, plane_model, propeller_model, PLANE_SCALE, PROPELLER_OFFSET};
