//! Instantiated interaction profiles
//!
//! The static catalog in [`crate::profiles`] is turned into live state here:
//! every source of every available profile becomes an [`InputState`] in one
//! flat table, and bindings elsewhere refer to states by table index. The
//! registry also tracks which profile is active on each top-level user path.

use crate::profiles::{self, InteractionProfileDef};
use crate::state::{ActionType, InputState};
use mockxr_core::{ExtensionFlags, Path, PathInterner, RuntimeResult};

/// An interaction profile available in this runtime instance
pub struct InteractionProfile {
    pub path: Path,
    pub name: &'static str,
    pub localized_name: &'static str,
    pub user_paths: Vec<Path>,
}

struct UserPathSlot {
    path: Path,
    active_profile: Option<usize>,
}

/// Which pieces make up a localized source name
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SourceNameFlags(u32);

impl SourceNameFlags {
    pub const USER_PATH: Self = Self(0x1);
    pub const INTERACTION_PROFILE: Self = Self(0x2);
    pub const COMPONENT: Self = Self(0x4);

    #[inline]
    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl core::ops::BitOr for SourceNameFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// All instantiated profiles and their input-source states
pub struct InputRegistry {
    profiles: Vec<InteractionProfile>,
    states: Vec<InputState>,
    user_slots: Vec<UserPathSlot>,
}

impl InputRegistry {
    /// Instantiate every catalog profile the enabled extensions allow.
    ///
    /// All profile and source paths are interned up front, so lookups after
    /// construction never touch the interner.
    pub fn new(paths: &mut PathInterner, flags: ExtensionFlags) -> RuntimeResult<Self> {
        let mut registry = Self {
            profiles: Vec::new(),
            states: Vec::new(),
            user_slots: paths
                .user_paths()
                .map(|path| UserPathSlot {
                    path,
                    active_profile: None,
                })
                .collect(),
        };

        for def in profiles::INTERACTION_PROFILES {
            if !flags.contains(def.required) {
                continue;
            }
            registry.add_profile(paths, def)?;
        }
        log::debug!(
            "instantiated {} interaction profiles, {} input sources",
            registry.profiles.len(),
            registry.states.len()
        );
        Ok(registry)
    }

    fn add_profile(
        &mut self,
        paths: &mut PathInterner,
        def: &InteractionProfileDef,
    ) -> RuntimeResult<()> {
        let profile_path = paths.string_to_path(def.path)?;
        let mut user_paths = Vec::with_capacity(def.user_paths.len());
        for user_path in def.user_paths {
            user_paths.push(paths.string_to_path(user_path)?);
        }
        for source in def.sources {
            let source_path = paths.string_to_path(source.path)?;
            self.states.push(InputState::new(
                profile_path,
                source_path,
                source.ty,
                source.localized_name,
            ));
        }
        self.profiles.push(InteractionProfile {
            path: profile_path,
            name: def.path,
            localized_name: def.localized_name,
            user_paths,
        });
        Ok(())
    }

    pub fn profiles(&self) -> &[InteractionProfile] {
        &self.profiles
    }

    pub fn profile_by_path(&self, path: Path) -> Option<&InteractionProfile> {
        self.profiles.iter().find(|profile| profile.path == path)
    }

    #[inline]
    pub fn state(&self, index: usize) -> &InputState {
        &self.states[index]
    }

    #[inline]
    pub fn state_mut(&mut self, index: usize) -> &mut InputState {
        &mut self.states[index]
    }

    pub fn states(&self) -> &[InputState] {
        &self.states
    }

    /// Find the state bound to `(profile, source)` exactly
    pub fn find_state(&self, profile: Path, source: Path) -> Option<usize> {
        self.states
            .iter()
            .position(|state| state.profile_path == profile && state.source_path == source)
    }

    /// Find a state for a suggested binding, with component fallback.
    ///
    /// A binding may name a source one component short of the catalog entry:
    /// boolean actions fall back to `…/value` then `…/click`, float actions
    /// to `…/value`.
    pub fn find_state_with_fallback(
        &self,
        paths: &mut PathInterner,
        profile: Path,
        source: Path,
        ty: ActionType,
    ) -> Option<usize> {
        if let Some(index) = self.find_state(profile, source) {
            return Some(index);
        }
        let suffixes: &[&str] = match ty {
            ActionType::Boolean => &["/value", "/click"],
            ActionType::Float => &["/value"],
            _ => &[],
        };
        for suffix in suffixes {
            if let Ok(appended) = paths.append_path(source, suffix) {
                if let Some(index) = self.find_state(profile, appended) {
                    return Some(index);
                }
            }
        }
        None
    }

    /// The profile currently active on a top-level user path
    pub fn active_profile(&self, user_path: Path) -> Option<&InteractionProfile> {
        let slot = PathInterner::user_slot(user_path)?;
        let index = self.user_slots.get(slot)?.active_profile?;
        Some(&self.profiles[index])
    }

    /// Activate a profile on a user path unless one is already active.
    ///
    /// The first suggested binding set wins; returns whether the slot
    /// changed so the caller can raise a profile-changed event.
    pub fn activate_profile_if_unset(&mut self, user_path: Path, profile: Path) -> bool {
        let Some(index) = self.profiles.iter().position(|p| p.path == profile) else {
            return false;
        };
        let Some(slot) = PathInterner::user_slot(user_path) else {
            return false;
        };
        let Some(entry) = self.user_slots.get_mut(slot) else {
            return false;
        };
        if entry.active_profile.is_some() {
            return false;
        }
        entry.active_profile = Some(index);
        log::info!(
            "activated interaction profile {} on user path slot {}",
            self.profiles[index].name,
            slot
        );
        true
    }

    /// Force a profile (or none) onto a user path, returning whether the
    /// active profile changed.
    pub fn set_active_profile(&mut self, user_path: Path, profile: Path) -> bool {
        let index = self.profiles.iter().position(|p| p.path == profile);
        let Some(slot) = PathInterner::user_slot(user_path) else {
            return false;
        };
        let Some(entry) = self.user_slots.get_mut(slot) else {
            return false;
        };
        if entry.active_profile == index {
            return false;
        }
        entry.active_profile = index;
        true
    }

    /// Handles of every top-level user path known to the registry
    pub fn user_paths(&self) -> impl Iterator<Item = Path> + '_ {
        self.user_slots.iter().map(|slot| slot.path)
    }

    /// Build the human-readable name of a bound source.
    ///
    /// The requested pieces are joined with single spaces in profile, user
    /// path, component order: "KHR Simple Controller Left Hand Select".
    pub fn source_localized_name(
        &self,
        paths: &PathInterner,
        state_index: usize,
        which: SourceNameFlags,
    ) -> String {
        let state = &self.states[state_index];
        let mut parts: Vec<&str> = Vec::new();
        if which.contains(SourceNameFlags::INTERACTION_PROFILE) {
            if let Some(profile) = self.profile_by_path(state.profile_path) {
                parts.push(profile.localized_name);
            }
        }
        if which.contains(SourceNameFlags::USER_PATH) {
            if let Some(name) = paths.user_path_name(PathInterner::user_path(state.source_path)) {
                parts.push(name);
            }
        }
        if which.contains(SourceNameFlags::COMPONENT) {
            if let Some(name) = state.localized_name {
                parts.push(name);
            }
        }
        parts.join(" ")
    }
}
