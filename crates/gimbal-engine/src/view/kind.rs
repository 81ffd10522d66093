use glam::Vec3;

use super::camera::Camera;

/// The four render views.
///
/// Each kind owns a fixed camera and animates a subset of the orientation:
/// the three side panes each isolate one angle, the combined pane shows all
/// three at once.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ViewKind {
    /// Looking straight down; shows yaw only.
    TopYaw,
    /// Looking at the nose; shows pitch only.
    FrontPitch,
    /// Looking along the wings; shows roll only.
    SideRoll,
    /// Perspective view animating yaw, pitch, and roll together.
    Combined,
}

impl ViewKind {
    /// Draw order of the views: the three side panes, then the combined pane.
    pub const ALL: [ViewKind; 4] = [
        ViewKind::TopYaw,
        ViewKind::FrontPitch,
        ViewKind::SideRoll,
        ViewKind::Combined,
    ];

    /// Fixed camera for this view. Every camera looks at the origin.
    pub fn camera(self) -> Camera {
        match self {
            ViewKind::TopYaw => Camera {
                eye: Vec3::new(0.0, 2.0, 0.0),
                target: Vec3::ZERO,
                up: Vec3::new(0.0, 0.0, 1.0),
            },
            ViewKind::FrontPitch => Camera {
                eye: Vec3::new(0.0, 0.0, -2.0),
                target: Vec3::ZERO,
                up: Vec3::new(0.0, 1.0, 0.0),
            },
            ViewKind::SideRoll => Camera {
                eye: Vec3::new(2.0, 0.0, 0.0),
                target: Vec3::ZERO,
                up: Vec3::new(0.0, 1.0, 0.0),
            },
            ViewKind::Combined => Camera {
                eye: Vec3::new(0.0, 0.0, -2.0),
                target: Vec3::ZERO,
                up: Vec3::new(0.0, 1.0, 0.0),
            },
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ViewKind::TopYaw => "top",
            ViewKind::FrontPitch => "front",
            ViewKind::SideRoll => "side",
            ViewKind::Combined => "combined",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_camera_looks_at_the_origin() {
        for kind in ViewKind::ALL {
            assert_eq!(kind.camera().target, Vec3::ZERO, "{}", kind.label());
        }
    }

    #[test]
    fn top_camera_sits_on_the_y_axis() {
        let cam = ViewKind::TopYaw.camera();
        assert_eq!(cam.eye, Vec3::new(0.0, 2.0, 0.0));
        // Up cannot be Y itself when looking down Y.
        assert_eq!(cam.up, Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn combined_shares_the_front_eye() {
        assert_eq!(
            ViewKind::Combined.camera().eye,
            ViewKind::FrontPitch.camera().eye
        );
    }
}
