//! Conformance-automation overrides
//!
//! A side store of externally injected input: per-source value overrides and
//! per-device activity flags. Overrides do not touch the profile registry
//! directly; they are copied into bound states when the action system syncs,
//! so an override set between syncs behaves like real device input.

use crate::state::{ActionType, InputState};
use mockxr_core::{Path, NULL_PATH};
use mockxr_math::{Pose, Vec2, Vec3};
use std::collections::HashMap;

/// Injected input values and device activity
#[derive(Default)]
pub struct ConformanceAutomation {
    /// Value overrides keyed by full source path, typed on first write
    states: HashMap<Path, InputState>,
    /// Activity keyed by `(interaction profile, top-level user path)`.
    /// A null profile key applies to every profile on that user path.
    active: HashMap<(Path, Path), bool>,
}

impl ConformanceAutomation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a device active or inactive for one profile, or for all
    /// profiles when `interaction_profile` is null.
    pub fn set_active(&mut self, interaction_profile: Path, top_level: Path, is_active: bool) {
        self.active
            .insert((interaction_profile, top_level), is_active);
    }

    /// Whether the device on `top_level` is active.
    ///
    /// The profile-specific entry wins over the any-profile entry; with
    /// neither present the caller's default stands.
    pub fn is_active(&self, interaction_profile: Path, top_level: Path, default: bool) -> bool {
        if let Some(&active) = self.active.get(&(interaction_profile, top_level)) {
            return active;
        }
        if let Some(&active) = self.active.get(&(NULL_PATH, top_level)) {
            return active;
        }
        default
    }

    pub fn set_boolean(&mut self, source: Path, value: bool) {
        self.override_state(source, ActionType::Boolean)
            .set_boolean(value);
    }

    pub fn set_float(&mut self, source: Path, value: f32) {
        self.override_state(source, ActionType::Float).set_float(value);
    }

    pub fn set_vector2(&mut self, source: Path, value: Vec2) {
        self.override_state(source, ActionType::Vector2)
            .set_vector2(value);
    }

    pub fn set_pose(&mut self, source: Path, pose: Pose) {
        self.override_state(source, ActionType::Pose).set_pose(pose);
    }

    pub fn set_velocity(&mut self, source: Path, linear: Option<Vec3>, angular: Option<Vec3>) {
        self.override_state(source, ActionType::Pose)
            .set_velocity(linear, angular);
    }

    /// Copy the override for `state`'s source into it, if one exists
    pub fn refresh(&self, state: &mut InputState) {
        if let Some(value) = self.states.get(&state.source_path) {
            state.copy_value_from(value);
        }
    }

    fn override_state(&mut self, source: Path, ty: ActionType) -> &mut InputState {
        self.states
            .entry(source)
            .or_insert_with(|| InputState::detached(ty))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockxr_core::{ExtensionFlags, PathInterner};

    #[test]
    fn test_activity_fallback() {
        let mut paths = PathInterner::new(ExtensionFlags::NONE);
        let mut auto = ConformanceAutomation::new();
        let left = paths.string_to_path("/user/hand/left").unwrap();
        let profile = paths
            .string_to_path("/interaction_profiles/khr/simple_controller")
            .unwrap();

        assert!(auto.is_active(profile, left, true));
        assert!(!auto.is_active(profile, left, false));

        auto.set_active(NULL_PATH, left, false);
        assert!(!auto.is_active(profile, left, true));

        // Profile-specific entry takes precedence over the wildcard.
        auto.set_active(profile, left, true);
        assert!(auto.is_active(profile, left, false));
    }

    #[test]
    fn test_refresh_copies_override() {
        let mut paths = PathInterner::new(ExtensionFlags::NONE);
        let mut auto = ConformanceAutomation::new();
        let source = paths
            .string_to_path("/user/hand/right/input/select/click")
            .unwrap();
        auto.set_boolean(source, true);

        let mut state = InputState::detached(ActionType::Boolean);
        state.source_path = source;
        auto.refresh(&mut state);
        assert!(state.get_boolean());
    }

    #[test]
    fn test_refresh_coerces_across_types() {
        let mut paths = PathInterner::new(ExtensionFlags::NONE);
        let mut auto = ConformanceAutomation::new();
        let source = paths
            .string_to_path("/user/hand/right/input/trigger/value")
            .unwrap();
        auto.set_boolean(source, true);

        let mut state = InputState::detached(ActionType::Float);
        state.source_path = source;
        auto.refresh(&mut state);
        assert_eq!(state.get_float(), 1.0);
    }

    #[test]
    fn test_no_override_leaves_state_alone() {
        let mut auto = ConformanceAutomation::new();
        let mut state = InputState::detached(ActionType::Float);
        state.set_float(0.5);
        auto.refresh(&mut state);
        assert_eq!(state.get_float(), 0.5);
    }
}
