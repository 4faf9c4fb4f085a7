//! Pose, field of view, and extent types

use crate::quaternion::Quat;
use crate::vector::Vec3;

/// A rigid transform: orientation plus position
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[repr(C)]
pub struct Pose {
    pub orientation: Quat,
    pub position: Vec3,
}

impl Pose {
    /// Identity pose at the origin
    pub const IDENTITY: Self = Self {
        orientation: Quat::IDENTITY,
        position: Vec3::ZERO,
    };

    /// Create a new pose
    #[inline]
    pub const fn new(orientation: Quat, position: Vec3) -> Self {
        Self {
            orientation,
            position,
        }
    }

    /// Create from position only
    #[inline]
    pub const fn from_position(position: Vec3) -> Self {
        Self {
            orientation: Quat::IDENTITY,
            position,
        }
    }

    /// Transform a point from this pose's local space
    #[inline]
    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        self.position + self.orientation * point
    }
}

/// Field of view as four half-angles in radians.
///
/// Left and down are conventionally negative.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[repr(C)]
pub struct Fov {
    pub angle_left: f32,
    pub angle_right: f32,
    pub angle_up: f32,
    pub angle_down: f32,
}

impl Fov {
    /// Create a new field of view
    #[inline]
    pub const fn new(angle_left: f32, angle_right: f32, angle_up: f32, angle_down: f32) -> Self {
        Self {
            angle_left,
            angle_right,
            angle_up,
            angle_down,
        }
    }

    /// A symmetric frustum with the given half-angle on every side
    #[inline]
    pub const fn symmetric(half_angle: f32) -> Self {
        Self::new(-half_angle, half_angle, half_angle, -half_angle)
    }
}

/// A 2D extent in meters
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[repr(C)]
pub struct Extent2D {
    pub width: f32,
    pub height: f32,
}

impl Extent2D {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_pose() {
        let p = Pose::IDENTITY;
        let point = Vec3::new(1.0, 2.0, 3.0);
        assert!((p.transform_point(point) - point).length() < 1e-6);
    }

    #[test]
    fn test_pose_translates() {
        let p = Pose::from_position(Vec3::new(1.0, 0.0, -1.0));
        let moved = p.transform_point(Vec3::new(0.0, 1.0, 0.0));
        assert!((moved - Vec3::new(1.0, 1.0, -1.0)).length() < 1e-6);
    }

    #[test]
    fn test_symmetric_fov() {
        let fov = Fov::symmetric(0.5);
        assert_eq!(fov.angle_left, -0.5);
        assert_eq!(fov.angle_right, 0.5);
        assert_eq!(fov.angle_up, 0.5);
        assert_eq!(fov.angle_down, -0.5);
    }
}
