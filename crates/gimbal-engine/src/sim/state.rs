/// Degrees the propeller moves per frame tick (applied as a decrement).
pub const SPIN_STEP_DEGREES: i32 = 10;

/// One of the three orientation angles.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum RotationAxis {
    /// Nose up/down, about X.
    Pitch,
    /// Nose left/right, about Y.
    Yaw,
    /// Wing tilt, about Z.
    Roll,
}

/// Wraps an angle to signed modulo-360 degrees.
///
/// Rust's `%` truncates toward zero, so repeated decrements stay negative
/// (`-350 - 20` wraps to `-10`, never `350`). Downstream rotation math accepts
/// either sign; nothing normalizes to `[0, 360)`.
#[inline]
pub fn wrap_degrees(angle: i32) -> i32 {
    angle % 360
}

/// Shared attitude of the scene, in whole degrees.
///
/// One writer per field: the input path mutates `pitch`/`yaw`/`roll` (via
/// [`rotate`](AttitudeState::rotate) and [`reset_orientation`](AttitudeState::reset_orientation)),
/// the frame tick mutates `spin` (via [`advance_spin`](AttitudeState::advance_spin)).
/// Both run on the event-loop thread, so reads never observe a torn update.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct AttitudeState {
    pub pitch: i32,
    pub yaw: i32,
    pub roll: i32,
    /// Propeller angle; advances independently of user input.
    pub spin: i32,
}

impl AttitudeState {
    /// All angles zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `delta` degrees to one orientation angle, wrapping signed mod 360.
    pub fn rotate(&mut self, axis: RotationAxis, delta: i32) {
        let angle = match axis {
            RotationAxis::Pitch => &mut self.pitch,
            RotationAxis::Yaw => &mut self.yaw,
            RotationAxis::Roll => &mut self.roll,
        };
        *angle = wrap_degrees(*angle + delta);
    }

    /// Zeroes the three orientation angles. The spin angle is not touched.
    pub fn reset_orientation(&mut self) {
        self.pitch = 0;
        self.yaw = 0;
        self.roll = 0;
    }

    /// Advances the propeller by one tick's worth of rotation.
    pub fn advance_spin(&mut self) {
        self.spin = wrap_degrees(self.spin - SPIN_STEP_DEGREES);
    }

    pub fn angle(&self, axis: RotationAxis) -> i32 {
        match axis {
            RotationAxis::Pitch => self.pitch,
            RotationAxis::Yaw => self.yaw,
            RotationAxis::Roll => self.roll,
        }
    }
}
