use std::fmt;

use crate::sim::RotationAxis;

/// Logical control identifier.
///
/// The runtime maps platform keys into these; everything past that seam is
/// platform-agnostic. Inputs the keymap does not recognize arrive as
/// `Control::Other`, whose defined behavior is to cancel a held action.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Control {
    PitchUp,
    PitchDown,
    YawLeft,
    YawRight,
    RollLeft,
    RollRight,
    /// Zeroes the orientation; edge-triggered, no repeat.
    Reset,
    /// Unrecognized interaction.
    Other,
}

impl Control {
    /// Axis and step direction for the six directional controls.
    ///
    /// Up and left step positive, down and right negative; `Reset` and
    /// `Other` are not directional.
    pub fn rotation(self) -> Option<(RotationAxis, i32)> {
        match self {
            Control::PitchUp => Some((RotationAxis::Pitch, 1)),
            Control::PitchDown => Some((RotationAxis::Pitch, -1)),
            Control::YawLeft => Some((RotationAxis::Yaw, 1)),
            Control::YawRight => Some((RotationAxis::Yaw, -1)),
            Control::RollLeft => Some((RotationAxis::Roll, 1)),
            Control::RollRight => Some((RotationAxis::Roll, -1)),
            Control::Reset | Control::Other => None,
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ControlState {
    Pressed,
    Released,
}

/// Press/release edge on a logical control, emitted by the runtime.
///
/// OS key auto-repeat is filtered out before this point; the controller owns
/// the repeat cadence.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ControlEvent {
    pub control: Control,
    pub state: ControlState,
}

impl ControlEvent {
    pub fn pressed(control: Control) -> Self {
        Self {
            control,
            state: ControlState::Pressed,
        }
    }

    pub fn released(control: Control) -> Self {
        Self {
            control,
            state: ControlState::Released,
        }
    }
}

impl fmt::Display for Control {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
