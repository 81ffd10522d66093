//! Simulation state.
//!
//! The whole simulation is four integer angles; everything else in the crate
//! derives from them. Angle arithmetic is signed modulo-360 on purpose.

mod state;

pub use state::{wrap_degrees, AttitudeState, RotationAxis, SPIN_STEP_DEGREES};
