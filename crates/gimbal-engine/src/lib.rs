//! Gimbal engine crate.
//!
//! This crate owns the platform + GPU runtime pieces used by the viewer,
//! along with the simulation state, geometry, and transform layers the
//! four attitude views are drawn from.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod geometry;
pub mod logging;
pub mod render;
pub mod sim;
pub mod view;

pub use glam;
