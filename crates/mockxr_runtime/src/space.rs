//! Reference and action spaces
//!
//! Spaces are cheap records: a kind, a cached pose, and location flags.
//! Reference spaces answer locates from the cache, which the test-control
//! surface updates; action spaces re-resolve through their action's bindings
//! at locate time. Destroyed spaces keep their slot so stale handles fail
//! cleanly instead of aliasing a newer space.

use mockxr_core::{Handle, Path, RuntimeError, RuntimeResult};
use mockxr_input::ActionHandle;
use mockxr_math::{Extent2D, Pose, Vec3};

/// Marker type for space handles
pub enum SpaceTag {}

/// Packs (space slot + 1) in the lower half
pub type SpaceHandle = Handle<SpaceTag>;

/// Well-known reference frames
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ReferenceSpaceType {
    View,
    Local,
    Stage,
    UnboundedMsft,
}

/// Every reference frame the emulator supports
pub const REFERENCE_SPACE_TYPES: &[ReferenceSpaceType] = &[
    ReferenceSpaceType::View,
    ReferenceSpaceType::Local,
    ReferenceSpaceType::Stage,
    ReferenceSpaceType::UnboundedMsft,
];

impl ReferenceSpaceType {
    /// Decode the wire value a client hands across the API boundary
    pub fn from_raw(raw: u32) -> RuntimeResult<Self> {
        match raw {
            1 => Ok(Self::View),
            2 => Ok(Self::Local),
            3 => Ok(Self::Stage),
            1_000_038_000 => Ok(Self::UnboundedMsft),
            _ => Err(RuntimeError::ReferenceSpaceUnsupported),
        }
    }
}

/// Validity and tracking bits of a located space
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpaceLocationFlags(u64);

impl SpaceLocationFlags {
    pub const NONE: Self = Self(0);
    pub const ORIENTATION_VALID: Self = Self(0x1);
    pub const POSITION_VALID: Self = Self(0x2);
    pub const ORIENTATION_TRACKED: Self = Self(0x4);
    pub const POSITION_TRACKED: Self = Self(0x8);
    pub const ALL: Self = Self(0xF);
    pub const TRACKED: Self = Self(0xC);

    #[inline]
    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// This set with `other`'s bits removed
    #[inline]
    pub fn without(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    #[inline]
    pub fn bits(self) -> u64 {
        self.0
    }
}

impl core::ops::BitOr for SpaceLocationFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// A located space
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpaceLocation {
    pub flags: SpaceLocationFlags,
    pub pose: Pose,
}

/// Velocities of a located space; absent components were not reported
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct SpaceVelocity {
    pub linear: Option<Vec3>,
    pub angular: Option<Vec3>,
}

/// What a space is anchored to
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SpaceKind {
    Reference(ReferenceSpaceType),
    Action {
        action: ActionHandle,
        subaction: Path,
    },
}

pub struct Space {
    pub kind: SpaceKind,
    pub pose: Pose,
    pub flags: SpaceLocationFlags,
    destroyed: bool,
}

/// Bounds record for one reference-space type, created on first use
struct ReferenceRecord {
    ty: ReferenceSpaceType,
    extent: Option<Extent2D>,
}

/// All spaces of one runtime instance
#[derive(Default)]
pub struct SpaceStore {
    spaces: Vec<Space>,
    records: Vec<ReferenceRecord>,
}

impl SpaceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_reference(&mut self, ty: ReferenceSpaceType, pose: Pose) -> SpaceHandle {
        self.ensure_record(ty);
        self.push(SpaceKind::Reference(ty), pose)
    }

    /// Action validity is the caller's concern; the store only records
    pub fn create_action(
        &mut self,
        action: ActionHandle,
        subaction: Path,
        pose: Pose,
    ) -> SpaceHandle {
        self.push(SpaceKind::Action { action, subaction }, pose)
    }

    pub fn destroy(&mut self, handle: SpaceHandle) -> RuntimeResult<()> {
        let slot = self.slot(handle)?;
        self.spaces[slot].destroyed = true;
        Ok(())
    }

    pub fn get(&self, handle: SpaceHandle) -> RuntimeResult<&Space> {
        let slot = self.slot(handle)?;
        Ok(&self.spaces[slot])
    }

    /// Update every live space anchored to a reference-space type
    pub fn set_reference_pose(&mut self, ty: ReferenceSpaceType, pose: Pose) {
        for space in self.live_mut() {
            if space.kind == SpaceKind::Reference(ty) {
                space.pose = pose;
            }
        }
    }

    /// Update location flags on every live space of a reference-space type
    pub fn set_reference_flags(&mut self, ty: ReferenceSpaceType, flags: SpaceLocationFlags) {
        for space in self.live_mut() {
            if space.kind == SpaceKind::Reference(ty) {
                space.flags = flags;
            }
        }
    }

    /// Set play-area bounds; the record is created if no space of this type
    /// exists yet
    pub fn set_bounds(&mut self, ty: ReferenceSpaceType, extent: Extent2D) {
        self.ensure_record(ty);
        for record in &mut self.records {
            if record.ty == ty {
                record.extent = Some(extent);
            }
        }
    }

    /// Play-area bounds, absent until set
    pub fn bounds(&self, ty: ReferenceSpaceType) -> Option<Extent2D> {
        self.records
            .iter()
            .find(|record| record.ty == ty)
            .and_then(|record| record.extent)
    }

    fn push(&mut self, kind: SpaceKind, pose: Pose) -> SpaceHandle {
        self.spaces.push(Space {
            kind,
            pose,
            flags: SpaceLocationFlags::ALL,
            destroyed: false,
        });
        SpaceHandle::from_halves(self.spaces.len() as u32, 0)
    }

    fn slot(&self, handle: SpaceHandle) -> RuntimeResult<usize> {
        let index = handle.lower() as usize;
        if handle.upper() != 0 || index == 0 || index > self.spaces.len() {
            return Err(RuntimeError::HandleInvalid);
        }
        let slot = index - 1;
        if self.spaces[slot].destroyed {
            return Err(RuntimeError::HandleInvalid);
        }
        Ok(slot)
    }

    fn live_mut(&mut self) -> impl Iterator<Item = &mut Space> + '_ {
        self.spaces.iter_mut().filter(|space| !space.destroyed)
    }

    fn ensure_record(&mut self, ty: ReferenceSpaceType) {
        if !self.records.iter().any(|record| record.ty == ty) {
            self.records.push(ReferenceRecord { ty, extent: None });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_pose_updates_all_matching() {
        let mut store = SpaceStore::new();
        let a = store.create_reference(ReferenceSpaceType::Stage, Pose::IDENTITY);
        let b = store.create_reference(ReferenceSpaceType::Stage, Pose::IDENTITY);
        let local = store.create_reference(ReferenceSpaceType::Local, Pose::IDENTITY);

        let moved = Pose::from_position(Vec3::new(0.0, 1.0, 0.0));
        store.set_reference_pose(ReferenceSpaceType::Stage, moved);
        assert_eq!(store.get(a).unwrap().pose, moved);
        assert_eq!(store.get(b).unwrap().pose, moved);
        assert_eq!(store.get(local).unwrap().pose, Pose::IDENTITY);
    }

    #[test]
    fn test_bounds_absent_until_set() {
        let mut store = SpaceStore::new();
        store.create_reference(ReferenceSpaceType::Stage, Pose::IDENTITY);
        assert_eq!(store.bounds(ReferenceSpaceType::Stage), None);
        store.set_bounds(ReferenceSpaceType::Stage, Extent2D::new(3.0, 2.0));
        assert_eq!(
            store.bounds(ReferenceSpaceType::Stage),
            Some(Extent2D::new(3.0, 2.0))
        );
    }

    #[test]
    fn test_destroyed_space_rejected() {
        let mut store = SpaceStore::new();
        let space = store.create_reference(ReferenceSpaceType::Local, Pose::IDENTITY);
        store.destroy(space).unwrap();
        assert_eq!(store.get(space).err(), Some(RuntimeError::HandleInvalid));
        assert_eq!(store.destroy(space), Err(RuntimeError::HandleInvalid));
    }

    #[test]
    fn test_reference_type_from_raw() {
        assert_eq!(ReferenceSpaceType::from_raw(3), Ok(ReferenceSpaceType::Stage));
        assert_eq!(
            ReferenceSpaceType::from_raw(1_000_038_000),
            Ok(ReferenceSpaceType::UnboundedMsft)
        );
        assert_eq!(
            ReferenceSpaceType::from_raw(99),
            Err(RuntimeError::ReferenceSpaceUnsupported)
        );
    }

    #[test]
    fn test_new_spaces_fully_tracked() {
        let mut store = SpaceStore::new();
        let space = store.create_reference(ReferenceSpaceType::View, Pose::IDENTITY);
        assert_eq!(store.get(space).unwrap().flags, SpaceLocationFlags::ALL);
    }
}
