//! # mockxr_math - Spatial math for the mock XR runtime
//!
//! Small, dependency-free value types for poses, fields of view, and the
//! vectors and quaternions they are built from. Everything is `Copy` and
//! `#[repr(C)]` so states can be handed across API boundaries unchanged.

pub mod pose;
pub mod quaternion;
pub mod vector;

pub use pose::*;
pub use quaternion::*;
pub use vector::*;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::pose::{Extent2D, Fov, Pose};
    pub use crate::quaternion::Quat;
    pub use crate::vector::{Vec2, Vec3};
}
