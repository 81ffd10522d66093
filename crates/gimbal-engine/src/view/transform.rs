use glam::{Mat4, Vec3};

use crate::sim::AttitudeState;

use super::kind::ViewKind;

/// Uniform scale applied to the plane mesh (the axis triad stays unit size).
pub const PLANE_SCALE: f32 = 1.75;

/// Hub position in plane-local coordinates: just ahead of the nose.
pub const PROPELLER_OFFSET: Vec3 = Vec3::new(0.0, 0.0, -0.36);

/// Rotation every object in a view shares.
///
/// Composition order is yaw about Y, then pitch about X, then roll about Z.
/// Yaw and roll angles are negated going in so that the controls labeled
/// "left" swing the nose and wing leftward on screen; pitch is applied as-is.
/// Single-axis views keep only their own component of the same composition.
fn orientation(kind: ViewKind, state: &AttitudeState) -> Mat4 {
    let pitch = (state.pitch as f32).to_radians();
    let yaw = (-state.yaw as f32).to_radians();
    let roll = (-state.roll as f32).to_radians();

    match kind {
        ViewKind::TopYaw => Mat4::from_rotation_y(yaw),
        ViewKind::FrontPitch => Mat4::from_rotation_x(pitch),
        ViewKind::SideRoll => Mat4::from_rotation_z(roll),
        ViewKind::Combined => {
            Mat4::from_rotation_y(yaw) * Mat4::from_rotation_x(pitch) * Mat4::from_rotation_z(roll)
        }
    }
}

/// Model matrix for the axis triad: orientation only, no scale.
pub fn axis_model(kind: ViewKind, state: &AttitudeState) -> Mat4 {
    orientation(kind, state)
}

/// Model matrix for the plane: uniform scale under the view's orientation.
pub fn plane_model(kind: ViewKind, state: &AttitudeState) -> Mat4 {
    orientation(kind, state) * Mat4::from_scale(Vec3::splat(PLANE_SCALE))
}

/// Model matrix for the propeller.
///
/// Rides the plane's full transform, offset to the hub, then spun about the
/// plane's local Z so the blade disc faces the nose direction.
pub fn propeller_model(kind: ViewKind, state: &AttitudeState) -> Mat4 {
    plane_model(kind, state)
        * Mat4::from_translation(PROPELLER_OFFSET)
        * Mat4::from_rotation_z((state.spin as f32).to_radians())
}
