//! GPU bring-up and the per-frame surface dance.
//!
//! One [`Gpu`] per window: it owns the device, the queue, and the configured
//! surface, hands out [`GpuFrame`]s to record into, and decides what a
//! presentation error means for the caller.

mod gpu;

pub use gpu::{Gpu, GpuFrame, GpuInit, SurfaceErrorAction};
