//! Action sets, actions, and bindings
//!
//! Applications group actions ("fire", "teleport") into action sets, suggest
//! bindings per interaction profile, attach the sets once, then sync and read
//! aggregated state. Handles are packed indices into the map's tables:
//! destroying a set or action tombstones its slot, and a tombstoned slot is
//! only reused for an entry of the same name so stale handles keep resolving
//! to the entry they were created for.

use crate::conformance::ConformanceAutomation;
use crate::registry::InputRegistry;
use crate::state::{ActionType, InputState, Location};
use mockxr_core::{
    validate_name_chars, Handle, Path, PathInterner, RuntimeError, RuntimeResult, NULL_PATH,
};
use mockxr_math::Vec2;

/// Marker type for action-set handles
pub enum ActionSetTag {}

/// Marker type for action handles
pub enum ActionTag {}

/// Packs (set slot + 1) in the lower half
pub type ActionSetHandle = Handle<ActionSetTag>;

/// Packs (set slot + 1) in the lower half and (action slot + 1) in the upper
pub type ActionHandle = Handle<ActionTag>;

/// Names must be strictly shorter than this
pub const MAX_NAME_LENGTH: usize = 64;

/// Localized names must be strictly shorter than this
pub const MAX_LOCALIZED_NAME_LENGTH: usize = 128;

/// Handles are 1-based 16-bit-ish slots; the table never grows past this.
const MAX_ENTRIES: usize = 0xFFFE;

/// One entry of a binding suggestion list
#[derive(Clone, Copy, Debug)]
pub struct SuggestedBinding {
    pub action: ActionHandle,
    pub binding: Path,
}

/// One entry of a sync request
#[derive(Clone, Copy, Debug)]
pub struct ActiveActionSet {
    pub set: ActionSetHandle,
    /// Restricts the refresh to sources under this user path; null means all
    pub subaction_path: Path,
}

/// Result of a successful sync
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SyncOutcome {
    Synced,
    /// The session is running but not focused; no state was refreshed
    NotFocused,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ActionStateBoolean {
    pub current_state: bool,
    pub is_active: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ActionStateFloat {
    pub current_state: f32,
    pub is_active: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ActionStateVector2 {
    pub current_state: Vec2,
    pub is_active: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ActionStatePose {
    pub is_active: bool,
    pub location: Location,
}

struct Action {
    handle: ActionHandle,
    name: String,
    localized_name: String,
    ty: ActionType,
    subaction_paths: Vec<Path>,
    /// Weak references into the registry's state table
    bindings: Vec<usize>,
    destroyed: bool,
}

struct ActionSet {
    handle: ActionSetHandle,
    name: String,
    localized_name: String,
    actions: Vec<Action>,
    attached: bool,
    destroyed: bool,
}

/// All action sets of one runtime instance
#[derive(Default)]
pub struct ActionMap {
    sets: Vec<ActionSet>,
    attached: bool,
}

fn validate_names(name: &str, localized_name: &str) -> RuntimeResult<()> {
    if name.is_empty() {
        return Err(RuntimeError::NameInvalid);
    }
    if localized_name.is_empty() {
        return Err(RuntimeError::LocalizedNameInvalid);
    }
    if name.len() >= MAX_NAME_LENGTH {
        return Err(RuntimeError::NameInvalid);
    }
    if localized_name.len() >= MAX_LOCALIZED_NAME_LENGTH {
        return Err(RuntimeError::LocalizedNameInvalid);
    }
    validate_name_chars(name)
}

impl ActionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `attach` has been called
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn create_action_set(
        &mut self,
        name: &str,
        localized_name: &str,
    ) -> RuntimeResult<ActionSetHandle> {
        validate_names(name, localized_name)?;
        for set in self.sets.iter().filter(|set| !set.destroyed) {
            if set.name == name {
                return Err(RuntimeError::NameDuplicated);
            }
            if set.localized_name == localized_name {
                return Err(RuntimeError::LocalizedNameDuplicated);
            }
        }

        let slot = self
            .sets
            .iter()
            .position(|set| set.destroyed && set.name == name);
        let slot = match slot {
            Some(slot) => {
                let set = &mut self.sets[slot];
                set.localized_name = localized_name.to_owned();
                set.actions.clear();
                set.attached = false;
                set.destroyed = false;
                slot
            }
            None => {
                if self.sets.len() >= MAX_ENTRIES {
                    return Err(RuntimeError::LimitReached);
                }
                let slot = self.sets.len();
                self.sets.push(ActionSet {
                    handle: ActionSetHandle::from_halves(slot as u32 + 1, 0),
                    name: name.to_owned(),
                    localized_name: localized_name.to_owned(),
                    actions: Vec::new(),
                    attached: false,
                    destroyed: false,
                });
                slot
            }
        };
        Ok(self.sets[slot].handle)
    }

    pub fn destroy_action_set(&mut self, handle: ActionSetHandle) -> RuntimeResult<()> {
        let slot = self.set_slot(handle)?;
        self.sets[slot].destroyed = true;
        Ok(())
    }

    pub fn create_action(
        &mut self,
        paths: &PathInterner,
        set: ActionSetHandle,
        name: &str,
        localized_name: &str,
        ty: ActionType,
        subaction_paths: &[Path],
    ) -> RuntimeResult<ActionHandle> {
        let set_slot = self.set_slot(set)?;
        if self.sets[set_slot].attached {
            return Err(RuntimeError::ActionSetsAlreadyAttached);
        }
        validate_names(name, localized_name)?;
        for action in self.sets[set_slot].actions.iter().filter(|a| !a.destroyed) {
            if action.name == name {
                return Err(RuntimeError::NameDuplicated);
            }
            if action.localized_name == localized_name {
                return Err(RuntimeError::LocalizedNameDuplicated);
            }
        }
        for (index, &subaction) in subaction_paths.iter().enumerate() {
            if !PathInterner::is_user_path(subaction)
                || subaction.lower() as usize > paths.user_path_count()
            {
                return Err(RuntimeError::PathUnsupported);
            }
            if subaction_paths[..index].contains(&subaction) {
                return Err(RuntimeError::PathUnsupported);
            }
        }

        let actions = &mut self.sets[set_slot].actions;
        let slot = actions
            .iter()
            .position(|action| action.destroyed && action.name == name);
        let slot = match slot {
            Some(slot) => {
                let action = &mut actions[slot];
                action.localized_name = localized_name.to_owned();
                action.ty = ty;
                action.subaction_paths = subaction_paths.to_vec();
                action.bindings.clear();
                action.destroyed = false;
                slot
            }
            None => {
                if actions.len() >= MAX_ENTRIES {
                    return Err(RuntimeError::LimitReached);
                }
                let slot = actions.len();
                actions.push(Action {
                    handle: ActionHandle::from_halves(set.lower(), slot as u32 + 1),
                    name: name.to_owned(),
                    localized_name: localized_name.to_owned(),
                    ty,
                    subaction_paths: subaction_paths.to_vec(),
                    bindings: Vec::new(),
                    destroyed: false,
                });
                slot
            }
        };
        Ok(actions[slot].handle)
    }

    pub fn destroy_action(&mut self, handle: ActionHandle) -> RuntimeResult<()> {
        let (set_slot, action_slot) = self.action_slots(handle)?;
        self.sets[set_slot].actions[action_slot].destroyed = true;
        Ok(())
    }

    /// Record suggested bindings for one interaction profile.
    ///
    /// The first suggestion naming a user path activates the profile there;
    /// the returned list holds every user path whose active profile changed,
    /// so the caller can raise profile-changed events.
    pub fn suggest_bindings(
        &mut self,
        paths: &mut PathInterner,
        registry: &mut InputRegistry,
        profile: Path,
        bindings: &[SuggestedBinding],
    ) -> RuntimeResult<Vec<Path>> {
        if bindings.is_empty() {
            return Err(RuntimeError::ValidationFailure);
        }
        if self.attached {
            return Err(RuntimeError::ActionSetsAlreadyAttached);
        }
        if registry.profile_by_path(profile).is_none() {
            return Err(RuntimeError::PathUnsupported);
        }

        let mut changed_user_paths = Vec::new();
        for suggestion in bindings {
            let (set_slot, action_slot) = self.action_slots(suggestion.action)?;
            let user_path = PathInterner::user_path(suggestion.binding);
            if user_path.is_null() || user_path.lower() as usize > paths.user_path_count() {
                return Err(RuntimeError::PathUnsupported);
            }
            if registry.activate_profile_if_unset(user_path, profile) {
                changed_user_paths.push(user_path);
            }

            let ty = self.sets[set_slot].actions[action_slot].ty;
            let Some(state_index) =
                registry.find_state_with_fallback(paths, profile, suggestion.binding, ty)
            else {
                log::error!(
                    "no input source for binding {:?} on profile {:?}",
                    suggestion.binding,
                    profile
                );
                return Err(RuntimeError::PathUnsupported);
            };
            self.sets[set_slot].actions[action_slot]
                .bindings
                .push(state_index);
        }
        Ok(changed_user_paths)
    }

    /// Attach the given sets; a one-shot operation
    pub fn attach(&mut self, sets: &[ActionSetHandle]) -> RuntimeResult<()> {
        if sets.is_empty() {
            return Err(RuntimeError::ValidationFailure);
        }
        if self.attached {
            return Err(RuntimeError::ActionSetsAlreadyAttached);
        }
        let mut slots = Vec::with_capacity(sets.len());
        for &handle in sets {
            slots.push(self.set_slot(handle)?);
        }
        for slot in slots {
            self.sets[slot].attached = true;
        }
        self.attached = true;
        Ok(())
    }

    /// Refresh the bound states of the listed sets.
    ///
    /// With conformance automation present, every binding matching the set's
    /// sub-action filter is re-read from the override store. Outside focus
    /// the sets are still validated but nothing is refreshed.
    pub fn sync(
        &self,
        registry: &mut InputRegistry,
        conformance: Option<&ConformanceAutomation>,
        active_sets: &[ActiveActionSet],
        focused: bool,
    ) -> RuntimeResult<SyncOutcome> {
        let mut slots = Vec::with_capacity(active_sets.len());
        for active in active_sets {
            let slot = self.set_slot(active.set)?;
            if !self.sets[slot].attached {
                return Err(RuntimeError::ActionSetNotAttached);
            }
            slots.push((slot, active.subaction_path));
        }
        if !focused {
            return Ok(SyncOutcome::NotFocused);
        }

        if let Some(conformance) = conformance {
            for (slot, subaction) in slots {
                for action in self.sets[slot].actions.iter().filter(|a| !a.destroyed) {
                    for &state_index in &action.bindings {
                        if binding_matches(registry.state(state_index), subaction) {
                            conformance.refresh(registry.state_mut(state_index));
                        }
                    }
                }
            }
        }
        Ok(SyncOutcome::Synced)
    }

    pub fn action_state_boolean(
        &self,
        registry: &InputRegistry,
        handle: ActionHandle,
        subaction: Path,
    ) -> RuntimeResult<ActionStateBoolean> {
        let action = self.action_for_read(handle, ActionType::Boolean, subaction)?;
        let mut state = ActionStateBoolean {
            current_state: false,
            is_active: false,
        };
        for &index in &action.bindings {
            let bound = registry.state(index);
            if !binding_matches(bound, subaction) {
                continue;
            }
            if !bound.is_compatible_type(ActionType::Boolean) {
                return Err(RuntimeError::ActionTypeMismatch);
            }
            state.is_active = true;
            state.current_state |= bound.get_boolean();
        }
        Ok(state)
    }

    pub fn action_state_float(
        &self,
        registry: &InputRegistry,
        handle: ActionHandle,
        subaction: Path,
    ) -> RuntimeResult<ActionStateFloat> {
        let action = self.action_for_read(handle, ActionType::Float, subaction)?;
        let mut state = ActionStateFloat {
            current_state: 0.0,
            is_active: false,
        };
        for &index in &action.bindings {
            let bound = registry.state(index);
            if !binding_matches(bound, subaction) {
                continue;
            }
            if !bound.is_compatible_type(ActionType::Float) {
                return Err(RuntimeError::ActionTypeMismatch);
            }
            state.is_active = true;
            let value = bound.get_float();
            // Largest magnitude wins; the sign of the winner is kept.
            if value.abs() > state.current_state.abs() {
                state.current_state = value;
            }
        }
        Ok(state)
    }

    pub fn action_state_vector2(
        &self,
        registry: &InputRegistry,
        handle: ActionHandle,
        subaction: Path,
    ) -> RuntimeResult<ActionStateVector2> {
        let action = self.action_for_read(handle, ActionType::Vector2, subaction)?;
        let mut state = ActionStateVector2 {
            current_state: Vec2::ZERO,
            is_active: false,
        };
        for &index in &action.bindings {
            let bound = registry.state(index);
            if !binding_matches(bound, subaction) {
                continue;
            }
            if !bound.is_compatible_type(ActionType::Vector2) {
                return Err(RuntimeError::ActionTypeMismatch);
            }
            state.is_active = true;
            let value = bound.get_vector2();
            if value.length_squared() > state.current_state.length_squared() {
                state.current_state = value;
            }
        }
        Ok(state)
    }

    pub fn action_state_pose(
        &self,
        registry: &InputRegistry,
        conformance: Option<&ConformanceAutomation>,
        handle: ActionHandle,
        subaction: Path,
    ) -> RuntimeResult<ActionStatePose> {
        let action = self.action_for_read(handle, ActionType::Pose, subaction)?;
        let mut state = ActionStatePose {
            is_active: false,
            location: Location::default(),
        };
        for &index in &action.bindings {
            let bound = registry.state(index);
            if !binding_matches(bound, subaction) {
                continue;
            }
            if !bound.is_compatible_type(ActionType::Pose) {
                return Err(RuntimeError::ActionTypeMismatch);
            }
            if !state.is_active {
                state.location = bound.location();
            }
            state.is_active = true;
        }
        state.is_active = qualify_active(conformance, subaction, state.is_active);
        Ok(state)
    }

    /// Check an action may drive haptic output
    pub fn validate_haptic_action(&self, handle: ActionHandle) -> RuntimeResult<()> {
        let (set_slot, action_slot) = self.action_slots(handle)?;
        let action = &self.sets[set_slot].actions[action_slot];
        if !self.sets[set_slot].attached {
            return Err(RuntimeError::ActionSetNotAttached);
        }
        if action.ty != ActionType::Vibration {
            return Err(RuntimeError::ActionTypeMismatch);
        }
        Ok(())
    }

    /// Check an action may back an action space.
    ///
    /// The action must be a pose action, and a non-null sub-action path must
    /// be among the paths declared at creation.
    pub fn validate_pose_action(&self, handle: ActionHandle, subaction: Path) -> RuntimeResult<()> {
        let (set_slot, action_slot) = self.action_slots(handle)?;
        let action = &self.sets[set_slot].actions[action_slot];
        if action.ty != ActionType::Pose {
            return Err(RuntimeError::ActionTypeMismatch);
        }
        if !subaction.is_null() && !action.subaction_paths.contains(&subaction) {
            return Err(RuntimeError::PathUnsupported);
        }
        Ok(())
    }

    /// State-table indices bound to an action, optionally filtered by
    /// sub-action path
    pub fn bound_state_indices(
        &self,
        registry: &InputRegistry,
        handle: ActionHandle,
        subaction: Path,
    ) -> RuntimeResult<Vec<usize>> {
        let (set_slot, action_slot) = self.action_slots(handle)?;
        Ok(self.sets[set_slot].actions[action_slot]
            .bindings
            .iter()
            .copied()
            .filter(|&index| binding_matches(registry.state(index), subaction))
            .collect())
    }

    /// Source paths currently bound to an action
    pub fn bound_sources(
        &self,
        registry: &InputRegistry,
        handle: ActionHandle,
    ) -> RuntimeResult<Vec<Path>> {
        let (set_slot, action_slot) = self.action_slots(handle)?;
        if !self.attached {
            return Err(RuntimeError::ActionSetNotAttached);
        }
        Ok(self.sets[set_slot].actions[action_slot]
            .bindings
            .iter()
            .map(|&index| registry.state(index).source_path)
            .collect())
    }

    fn action_for_read(
        &self,
        handle: ActionHandle,
        ty: ActionType,
        subaction: Path,
    ) -> RuntimeResult<&Action> {
        let (set_slot, action_slot) = self.action_slots(handle)?;
        if !self.sets[set_slot].attached {
            return Err(RuntimeError::ActionSetNotAttached);
        }
        let action = &self.sets[set_slot].actions[action_slot];
        if action.ty != ty {
            return Err(RuntimeError::ActionTypeMismatch);
        }
        if !subaction.is_null() && !action.subaction_paths.contains(&subaction) {
            return Err(RuntimeError::PathUnsupported);
        }
        Ok(action)
    }

    fn set_slot(&self, handle: ActionSetHandle) -> RuntimeResult<usize> {
        let index = handle.lower() as usize;
        if handle.upper() != 0 || index == 0 || index > self.sets.len() {
            return Err(RuntimeError::HandleInvalid);
        }
        let slot = index - 1;
        if self.sets[slot].handle != handle {
            return Err(RuntimeError::HandleInvalid);
        }
        Ok(slot)
    }

    fn action_slots(&self, handle: ActionHandle) -> RuntimeResult<(usize, usize)> {
        let set_index = handle.lower() as usize;
        let action_index = handle.upper() as usize;
        if set_index == 0 || set_index > self.sets.len() || action_index == 0 {
            return Err(RuntimeError::HandleInvalid);
        }
        let set_slot = set_index - 1;
        if action_index > self.sets[set_slot].actions.len() {
            return Err(RuntimeError::HandleInvalid);
        }
        let action_slot = action_index - 1;
        if self.sets[set_slot].actions[action_slot].handle != handle {
            return Err(RuntimeError::HandleInvalid);
        }
        Ok((set_slot, action_slot))
    }
}

fn binding_matches(state: &InputState, subaction: Path) -> bool {
    subaction.is_null() || PathInterner::user_path(state.source_path) == subaction
}

/// Apply the conformance-automation activity override for a sub-action
/// path. Only pose activity is qualified this way; the value accessors
/// report activity from their bindings alone.
fn qualify_active(
    conformance: Option<&ConformanceAutomation>,
    subaction: Path,
    is_active: bool,
) -> bool {
    match conformance {
        Some(conformance) if !subaction.is_null() => {
            conformance.is_active(NULL_PATH, subaction, is_active)
        }
        _ => is_active,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockxr_core::ExtensionFlags;

    struct Harness {
        paths: PathInterner,
        registry: InputRegistry,
        map: ActionMap,
    }

    impl Harness {
        fn new() -> Self {
            let mut paths = PathInterner::new(ExtensionFlags::NONE);
            let registry = InputRegistry::new(&mut paths, ExtensionFlags::NONE).unwrap();
            Self {
                paths,
                registry,
                map: ActionMap::new(),
            }
        }

        fn path(&mut self, text: &str) -> Path {
            self.paths.string_to_path(text).unwrap()
        }

        fn set(&mut self) -> ActionSetHandle {
            self.map.create_action_set("gameplay", "Gameplay").unwrap()
        }

        fn action(&mut self, set: ActionSetHandle, name: &str, ty: ActionType) -> ActionHandle {
            self.map
                .create_action(&self.paths, set, name, name, ty, &[])
                .unwrap()
        }

        fn suggest(&mut self, profile: &str, bindings: &[SuggestedBinding]) -> Vec<Path> {
            let profile = self.path(profile);
            self.map
                .suggest_bindings(&mut self.paths, &mut self.registry, profile, bindings)
                .unwrap()
        }
    }

    #[test]
    fn test_name_validation_order() {
        let mut h = Harness::new();
        assert_eq!(
            h.map.create_action_set("", ""),
            Err(RuntimeError::NameInvalid)
        );
        assert_eq!(
            h.map.create_action_set("a", ""),
            Err(RuntimeError::LocalizedNameInvalid)
        );
        assert_eq!(
            h.map.create_action_set(&"a".repeat(64), "A"),
            Err(RuntimeError::NameInvalid)
        );
        assert_eq!(
            h.map.create_action_set("a", &"a".repeat(128)),
            Err(RuntimeError::LocalizedNameInvalid)
        );
        assert_eq!(
            h.map.create_action_set("Upper", "Upper"),
            Err(RuntimeError::PathFormatInvalid)
        );
    }

    #[test]
    fn test_duplicate_names_and_reuse_after_destroy() {
        let mut h = Harness::new();
        let first = h.map.create_action_set("gameplay", "Gameplay").unwrap();
        assert_eq!(
            h.map.create_action_set("gameplay", "Other"),
            Err(RuntimeError::NameDuplicated)
        );
        assert_eq!(
            h.map.create_action_set("other", "Gameplay"),
            Err(RuntimeError::LocalizedNameDuplicated)
        );

        h.map.destroy_action_set(first).unwrap();
        // A tombstoned slot of the same name is recycled, so the handle
        // stays stable across destroy/create.
        let second = h.map.create_action_set("gameplay", "Gameplay").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_action_reuse_keeps_slot() {
        let mut h = Harness::new();
        let set = h.set();
        let fire = h.action(set, "fire", ActionType::Boolean);
        h.map.destroy_action(fire).unwrap();
        let again = h
            .map
            .create_action(&h.paths, set, "fire", "fire", ActionType::Float, &[])
            .unwrap();
        assert_eq!(fire, again);
    }

    #[test]
    fn test_subaction_path_validation() {
        let mut h = Harness::new();
        let set = h.set();
        let left = h.path("/user/hand/left");
        let not_user = h.path("/user/hand/left/input/trigger");

        assert_eq!(
            h.map
                .create_action(&h.paths, set, "a", "a", ActionType::Boolean, &[not_user]),
            Err(RuntimeError::PathUnsupported)
        );
        assert_eq!(
            h.map
                .create_action(&h.paths, set, "a", "a", ActionType::Boolean, &[left, left]),
            Err(RuntimeError::PathUnsupported)
        );
        assert!(h
            .map
            .create_action(&h.paths, set, "a", "a", ActionType::Boolean, &[left])
            .is_ok());
    }

    #[test]
    fn test_attach_lifecycle() {
        let mut h = Harness::new();
        let set = h.set();
        let fire = h.action(set, "fire", ActionType::Boolean);
        let select = h.path("/user/hand/right/input/select/click");

        assert_eq!(h.map.attach(&[]), Err(RuntimeError::ValidationFailure));
        h.map.attach(&[set]).unwrap();
        assert_eq!(
            h.map.attach(&[set]),
            Err(RuntimeError::ActionSetsAlreadyAttached)
        );
        assert_eq!(
            h.map
                .create_action(&h.paths, set, "b", "b", ActionType::Boolean, &[]),
            Err(RuntimeError::ActionSetsAlreadyAttached)
        );
        let profile = h.path("/interaction_profiles/khr/simple_controller");
        assert_eq!(
            h.map.suggest_bindings(
                &mut h.paths,
                &mut h.registry,
                profile,
                &[SuggestedBinding {
                    action: fire,
                    binding: select,
                }],
            ),
            Err(RuntimeError::ActionSetsAlreadyAttached)
        );
    }

    #[test]
    fn test_suggest_activates_profile_and_falls_back() {
        let mut h = Harness::new();
        let set = h.set();
        let fire = h.action(set, "fire", ActionType::Boolean);
        // One component short of the catalog entry; resolved via /click.
        let select = h.path("/user/hand/right/input/select");
        let changed = h.suggest(
            "/interaction_profiles/khr/simple_controller",
            &[SuggestedBinding {
                action: fire,
                binding: select,
            }],
        );
        let right = h.path("/user/hand/right");
        assert_eq!(changed, vec![right]);

        h.map.attach(&[set]).unwrap();
        let sources = h.map.bound_sources(&h.registry, fire).unwrap();
        assert_eq!(sources.len(), 1);
        assert_eq!(
            h.paths.path_to_string(sources[0]).unwrap(),
            "/user/hand/right/input/select/click"
        );
    }

    #[test]
    fn test_suggest_rejects_unknown_profile_and_source() {
        let mut h = Harness::new();
        let set = h.set();
        let fire = h.action(set, "fire", ActionType::Boolean);
        let select = h.path("/user/hand/right/input/select/click");
        let unknown_profile = h.path("/interaction_profiles/nobody/nothing");
        assert_eq!(
            h.map.suggest_bindings(
                &mut h.paths,
                &mut h.registry,
                unknown_profile,
                &[SuggestedBinding {
                    action: fire,
                    binding: select,
                }],
            ),
            Err(RuntimeError::PathUnsupported)
        );

        let profile = h.path("/interaction_profiles/khr/simple_controller");
        assert_eq!(
            h.map
                .suggest_bindings(&mut h.paths, &mut h.registry, profile, &[]),
            Err(RuntimeError::ValidationFailure)
        );

        let missing = h.path("/user/hand/right/input/no_such_source");
        assert_eq!(
            h.map.suggest_bindings(
                &mut h.paths,
                &mut h.registry,
                profile,
                &[SuggestedBinding {
                    action: fire,
                    binding: missing,
                }],
            ),
            Err(RuntimeError::PathUnsupported)
        );
    }

    #[test]
    fn test_float_aggregation_largest_magnitude() {
        let mut h = Harness::new();
        let set = h.set();
        let throttle = h.action(set, "throttle", ActionType::Float);
        let left = h.path("/user/hand/left/input/trigger/value");
        let right = h.path("/user/hand/right/input/trigger/value");
        h.suggest(
            "/interaction_profiles/mockxr/mock_controller",
            &[
                SuggestedBinding {
                    action: throttle,
                    binding: left,
                },
                SuggestedBinding {
                    action: throttle,
                    binding: right,
                },
            ],
        );
        h.map.attach(&[set]).unwrap();

        let profile = h.path("/interaction_profiles/mockxr/mock_controller");
        let left_index = h.registry.find_state(profile, left).unwrap();
        let right_index = h.registry.find_state(profile, right).unwrap();
        h.registry.state_mut(left_index).set_float(-0.8);
        h.registry.state_mut(right_index).set_float(0.3);

        let state = h
            .map
            .action_state_float(&h.registry, throttle, NULL_PATH)
            .unwrap();
        assert!(state.is_active);
        assert_eq!(state.current_state, -0.8);
    }

    #[test]
    fn test_boolean_aggregation_is_or() {
        let mut h = Harness::new();
        let set = h.set();
        let fire = h.action(set, "fire", ActionType::Boolean);
        let left = h.path("/user/hand/left/input/select/click");
        let right = h.path("/user/hand/right/input/select/click");
        h.suggest(
            "/interaction_profiles/khr/simple_controller",
            &[
                SuggestedBinding {
                    action: fire,
                    binding: left,
                },
                SuggestedBinding {
                    action: fire,
                    binding: right,
                },
            ],
        );
        h.map.attach(&[set]).unwrap();

        let profile = h.path("/interaction_profiles/khr/simple_controller");
        let right_index = h.registry.find_state(profile, right).unwrap();
        h.registry.state_mut(right_index).set_boolean(true);

        let state = h
            .map
            .action_state_boolean(&h.registry, fire, NULL_PATH)
            .unwrap();
        assert!(state.current_state);
    }

    #[test]
    fn test_pose_binding_on_boolean_action_rejected() {
        let mut h = Harness::new();
        let set = h.set();
        let fire = h.action(set, "fire", ActionType::Boolean);
        // Exact lookup resolves regardless of source type; the accessor has
        // to reject the pose source itself.
        let grip = h.path("/user/hand/left/input/grip/pose");
        h.suggest(
            "/interaction_profiles/khr/simple_controller",
            &[SuggestedBinding {
                action: fire,
                binding: grip,
            }],
        );
        h.map.attach(&[set]).unwrap();

        assert_eq!(
            h.map.action_state_boolean(&h.registry, fire, NULL_PATH),
            Err(RuntimeError::ActionTypeMismatch)
        );
    }

    #[test]
    fn test_subaction_filter() {
        let mut h = Harness::new();
        let set = h.set();
        let left = h.path("/user/hand/left");
        let right = h.path("/user/hand/right");
        let fire = h
            .map
            .create_action(
                &h.paths,
                set,
                "fire",
                "fire",
                ActionType::Boolean,
                &[left, right],
            )
            .unwrap();
        let left_click = h.path("/user/hand/left/input/select/click");
        let right_click = h.path("/user/hand/right/input/select/click");
        h.suggest(
            "/interaction_profiles/khr/simple_controller",
            &[
                SuggestedBinding {
                    action: fire,
                    binding: left_click,
                },
                SuggestedBinding {
                    action: fire,
                    binding: right_click,
                },
            ],
        );
        h.map.attach(&[set]).unwrap();

        let profile = h.path("/interaction_profiles/khr/simple_controller");
        let right_index = h.registry.find_state(profile, right_click).unwrap();
        h.registry.state_mut(right_index).set_boolean(true);

        let left_state = h
            .map
            .action_state_boolean(&h.registry, fire, left)
            .unwrap();
        assert!(!left_state.current_state);
        let right_state = h
            .map
            .action_state_boolean(&h.registry, fire, right)
            .unwrap();
        assert!(right_state.current_state);

        // Undeclared sub-action paths are rejected.
        let head = h.path("/user/head");
        assert_eq!(
            h.map.action_state_boolean(&h.registry, fire, head),
            Err(RuntimeError::PathUnsupported)
        );
    }

    #[test]
    fn test_state_requires_attach_and_matching_type() {
        let mut h = Harness::new();
        let set = h.set();
        let fire = h.action(set, "fire", ActionType::Boolean);
        assert_eq!(
            h.map.action_state_boolean(&h.registry, fire, NULL_PATH),
            Err(RuntimeError::ActionSetNotAttached)
        );
        h.map.attach(&[set]).unwrap();
        assert_eq!(
            h.map.action_state_float(&h.registry, fire, NULL_PATH),
            Err(RuntimeError::ActionTypeMismatch)
        );
    }

    #[test]
    fn test_sync_refreshes_from_conformance() {
        let mut h = Harness::new();
        let set = h.set();
        let fire = h.action(set, "fire", ActionType::Boolean);
        let click = h.path("/user/hand/right/input/select/click");
        h.suggest(
            "/interaction_profiles/khr/simple_controller",
            &[SuggestedBinding {
                action: fire,
                binding: click,
            }],
        );
        h.map.attach(&[set]).unwrap();

        let mut conformance = ConformanceAutomation::new();
        conformance.set_boolean(click, true);

        let active = [ActiveActionSet {
            set,
            subaction_path: NULL_PATH,
        }];
        let outcome = h
            .map
            .sync(&mut h.registry, Some(&conformance), &active, true)
            .unwrap();
        assert_eq!(outcome, SyncOutcome::Synced);
        let state = h
            .map
            .action_state_boolean(&h.registry, fire, NULL_PATH)
            .unwrap();
        assert!(state.current_state);
    }

    #[test]
    fn test_sync_unfocused_and_unattached() {
        let mut h = Harness::new();
        let set = h.set();
        let active = [ActiveActionSet {
            set,
            subaction_path: NULL_PATH,
        }];
        assert_eq!(
            h.map.sync(&mut h.registry, None, &active, true),
            Err(RuntimeError::ActionSetNotAttached)
        );
        h.map.attach(&[set]).unwrap();
        assert_eq!(
            h.map.sync(&mut h.registry, None, &active, false),
            Ok(SyncOutcome::NotFocused)
        );
    }

    #[test]
    fn test_conformance_activity_override_on_pose() {
        let mut h = Harness::new();
        let set = h.set();
        let left = h.path("/user/hand/left");
        let aim = h
            .map
            .create_action(&h.paths, set, "aim", "aim", ActionType::Pose, &[left])
            .unwrap();
        let aim_pose = h.path("/user/hand/left/input/aim/pose");
        h.suggest(
            "/interaction_profiles/khr/simple_controller",
            &[SuggestedBinding {
                action: aim,
                binding: aim_pose,
            }],
        );
        h.map.attach(&[set]).unwrap();

        let state = h
            .map
            .action_state_pose(&h.registry, None, aim, left)
            .unwrap();
        assert!(state.is_active);

        // The override only qualifies pose activity.
        let mut conformance = ConformanceAutomation::new();
        conformance.set_active(NULL_PATH, left, false);
        let state = h
            .map
            .action_state_pose(&h.registry, Some(&conformance), aim, left)
            .unwrap();
        assert!(!state.is_active);
    }

    #[test]
    fn test_stale_handle_rejected() {
        let mut h = Harness::new();
        let set = h.set();
        let bogus_set = ActionSetHandle::from_halves(42, 0);
        assert_eq!(h.map.destroy_action_set(bogus_set), Err(RuntimeError::HandleInvalid));
        let bogus_action = ActionHandle::from_halves(set.lower(), 7);
        assert_eq!(h.map.destroy_action(bogus_action), Err(RuntimeError::HandleInvalid));
    }
}
