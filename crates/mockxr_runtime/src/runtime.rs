//! The runtime façade
//!
//! [`MockRuntime`] owns every subsystem and is the single object a test
//! driver or API shim talks to. One instance corresponds to one emulated
//! runtime instance: extension negotiation happens at construction and is
//! immutable afterwards.

use crate::capability::{Capability, CapabilityRegistry};
use crate::events::{Event, ScriptEvent};
use crate::session::{Session, SessionState};
use crate::space::{
    ReferenceSpaceType, SpaceHandle, SpaceKind, SpaceLocation, SpaceLocationFlags, SpaceStore,
    SpaceVelocity, REFERENCE_SPACE_TYPES,
};
use crate::view::{
    EnvironmentBlendMode, View, ViewConfigurationType, ViewConfigurationView, ViewStateFlags,
    ViewStore, ENVIRONMENT_BLEND_MODES,
};
use mockxr_core::{
    ExtensionFlags, Path, PathInterner, RuntimeError, RuntimeResult, Time, NULL_PATH,
};
use mockxr_event::EventQueue;
use mockxr_input::{
    ActionHandle, ActionMap, ActionSetHandle, ActionStateBoolean, ActionStateFloat,
    ActionStatePose, ActionStateVector2, ActionType, ActiveActionSet, ConformanceAutomation,
    InputRegistry, Location, SourceNameFlags, SuggestedBinding, SyncOutcome,
};
use mockxr_math::{Extent2D, Pose, Vec2, Vec3};
use std::time::Instant;

/// Nominal display refresh period
pub const DISPLAY_PERIOD: Time = 16_666_000;

/// Grace period announced with an instance loss
const INSTANCE_LOSS_DELAY: Time = 5_000_000_000;

/// Static device description
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SystemProperties {
    pub system_id: u64,
    pub vendor_id: u32,
    pub system_name: &'static str,
    pub max_composition_layers: u32,
    pub orientation_tracking: bool,
    pub position_tracking: bool,
    pub supports_eye_gaze: bool,
}

/// Per-frame state of one secondary view configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SecondaryViewState {
    pub ty: ViewConfigurationType,
    pub active: bool,
}

/// What `wait_frame` hands back
#[derive(Clone, Debug, PartialEq)]
pub struct FrameState {
    pub predicted_display_time: Time,
    pub predicted_display_period: Time,
    pub should_render: bool,
    pub secondary_views: Vec<SecondaryViewState>,
}

/// Layers submitted for one secondary view configuration
#[derive(Clone, Copy, Debug)]
pub struct SecondaryLayerSubmission {
    pub ty: ViewConfigurationType,
    pub layer_count: u32,
}

/// Layer counts of the most recent `end_frame`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EndFrameStats {
    pub primary_layer_count: u32,
    pub secondary_layer_count: u32,
}

/// Callback receiving intercepted script events
pub type ScriptEventCallback = Box<dyn FnMut(ScriptEvent) + Send>;

/// One emulated runtime instance
pub struct MockRuntime {
    flags: ExtensionFlags,
    paths: PathInterner,
    registry: InputRegistry,
    actions: ActionMap,
    conformance: Option<ConformanceAutomation>,
    capabilities: CapabilityRegistry,
    events: EventQueue<Event>,
    session: Session,
    spaces: SpaceStore,
    views: ViewStore,
    start: Instant,
    lost: bool,
    frame_stats: EndFrameStats,
}

impl MockRuntime {
    /// Build a runtime with an already negotiated extension set
    pub fn new(flags: ExtensionFlags) -> RuntimeResult<Self> {
        let mut paths = PathInterner::new(flags);
        let registry = InputRegistry::new(&mut paths, flags)?;
        let conformance = flags
            .contains(ExtensionFlags::CONFORMANCE_AUTOMATION)
            .then(ConformanceAutomation::new);
        log::info!("mock runtime created, extensions {:?}", flags);
        Ok(Self {
            flags,
            paths,
            registry,
            actions: ActionMap::new(),
            conformance,
            capabilities: CapabilityRegistry::new(flags),
            events: EventQueue::new(),
            session: Session::new(),
            spaces: SpaceStore::new(),
            views: ViewStore::new(flags),
            start: Instant::now(),
            lost: false,
            frame_stats: EndFrameStats::default(),
        })
    }

    /// Negotiate extensions from their wire names; unknown names are ignored
    pub fn from_extension_names<'a, I>(names: I) -> RuntimeResult<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        Self::new(ExtensionFlags::from_names(names))
    }

    #[inline]
    pub fn extension_flags(&self) -> ExtensionFlags {
        self.flags
    }

    /// Nanoseconds on the runtime clock
    pub fn predicted_display_time(&self) -> Time {
        self.start.elapsed().as_nanos() as Time
    }

    fn ensure_not_lost(&self) -> RuntimeResult<()> {
        if self.lost {
            Err(RuntimeError::InstanceLost)
        } else {
            Ok(())
        }
    }

    fn ensure_running(&self) -> RuntimeResult<()> {
        if self.session.is_running() {
            Ok(())
        } else {
            Err(RuntimeError::SessionNotRunning)
        }
    }

    fn queue_session_states(&self, entered: &[SessionState]) {
        for &state in entered {
            self.events.push(Event::SessionStateChanged { state });
        }
    }

    // --- paths ---

    pub fn string_to_path(&mut self, text: &str) -> RuntimeResult<Path> {
        self.paths.string_to_path(text)
    }

    pub fn path_to_string(&self, path: Path) -> RuntimeResult<String> {
        self.paths.path_to_string(path)
    }

    // --- events ---

    /// Next application-visible event, draining script events on the way
    pub fn poll_event(&self) -> Option<Event> {
        self.events.poll()
    }

    /// Install or clear the script-event callback
    pub fn register_script_event_callback(&self, callback: Option<ScriptEventCallback>) {
        self.events.set_intercept_callback(callback);
    }

    // --- session ---

    pub fn create_session(&mut self) -> RuntimeResult<()> {
        self.ensure_not_lost()?;
        let entered = self.session.create();
        self.queue_session_states(&entered);
        Ok(())
    }

    /// Begin the session with a primary configuration, enabling the listed
    /// secondary configurations for its lifetime.
    pub fn begin_session(
        &mut self,
        primary: ViewConfigurationType,
        secondary: &[ViewConfigurationType],
    ) -> RuntimeResult<()> {
        self.ensure_not_lost()?;
        if !primary.is_primary() || self.views.get(primary).is_none() {
            return Err(RuntimeError::ViewConfigurationTypeUnsupported);
        }
        for (index, &ty) in secondary.iter().enumerate() {
            let Some(config) = self.views.get(ty) else {
                return Err(RuntimeError::ViewConfigurationTypeUnsupported);
            };
            if ty.is_primary() {
                return Err(RuntimeError::ViewConfigurationTypeUnsupported);
            }
            if config.enabled || secondary[..index].contains(&ty) {
                return Err(RuntimeError::ValidationFailure);
            }
        }
        for &ty in secondary {
            if let Some(config) = self.views.get_mut(ty) {
                config.enabled = true;
            }
        }
        let entered = self.session.begin(primary);
        self.queue_session_states(&entered);
        Ok(())
    }

    pub fn request_exit_session(&mut self) -> RuntimeResult<()> {
        let entered = self.session.request_exit()?;
        self.queue_session_states(&entered);
        Ok(())
    }

    pub fn end_session(&mut self) -> RuntimeResult<()> {
        let entered = self.session.end()?;
        self.queue_session_states(&entered);
        Ok(())
    }

    /// Drop the session; action sets detach and secondary view
    /// configurations fall back to disabled
    pub fn destroy_session(&mut self) {
        self.session.destroy();
        self.actions = ActionMap::new();
        self.views.reset_secondaries();
        self.frame_stats = EndFrameStats::default();
    }

    #[inline]
    pub fn session_state(&self) -> SessionState {
        self.session.state()
    }

    #[inline]
    pub fn is_session_running(&self) -> bool {
        self.session.is_running()
    }

    /// Steer the session from the test driver. With `force` the validity
    /// table is bypassed; either way a state-changed event is queued when
    /// the state actually moves.
    pub fn transition_session_state(&mut self, state: SessionState, force: bool) -> bool {
        let changed = if force {
            self.session.force_state(state)
        } else {
            self.session.transition(state)
        };
        if changed {
            self.events.push(Event::SessionStateChanged { state });
        }
        changed
    }

    // --- frame loop ---

    pub fn wait_frame(&self) -> RuntimeResult<FrameState> {
        self.ensure_not_lost()?;
        self.ensure_running()?;
        let secondary_views = if self
            .flags
            .contains(ExtensionFlags::MSFT_SECONDARY_VIEW_CONFIGURATION)
        {
            self.views
                .secondary_types()
                .into_iter()
                .filter(|&ty| self.views.get(ty).is_some_and(|c| c.enabled))
                .map(|ty| SecondaryViewState {
                    ty,
                    active: self.views.get(ty).map(|c| c.active).unwrap_or(false),
                })
                .collect()
        } else {
            Vec::new()
        };
        Ok(FrameState {
            predicted_display_time: self.predicted_display_time(),
            predicted_display_period: DISPLAY_PERIOD,
            should_render: self.flags.intersects(ExtensionFlags::ALL_GFX),
            secondary_views,
        })
    }

    pub fn begin_frame(&self) -> RuntimeResult<()> {
        self.ensure_not_lost()?;
        self.ensure_running()
    }

    /// Submit a frame: record layer statistics and notify the driver
    pub fn end_frame(
        &mut self,
        primary_layer_count: u32,
        secondary: &[SecondaryLayerSubmission],
    ) -> RuntimeResult<()> {
        self.ensure_not_lost()?;
        self.ensure_running()?;
        let mut secondary_layer_count = 0;
        for submission in secondary {
            if submission.ty.is_primary() {
                return Err(RuntimeError::LayerInvalid);
            }
            match self.views.get(submission.ty) {
                Some(config) if config.enabled => {}
                _ => return Err(RuntimeError::SecondaryViewConfigurationTypeNotEnabled),
            }
            secondary_layer_count += submission.layer_count;
        }
        self.frame_stats = EndFrameStats {
            primary_layer_count,
            secondary_layer_count,
        };
        self.events.push(Event::Script(ScriptEvent::EndFrame));
        Ok(())
    }

    pub fn end_frame_stats(&self) -> EndFrameStats {
        self.frame_stats
    }

    // --- spaces ---

    pub fn enumerate_reference_spaces(&self) -> &'static [ReferenceSpaceType] {
        REFERENCE_SPACE_TYPES
    }

    pub fn create_reference_space(&mut self, ty: ReferenceSpaceType, pose: Pose) -> SpaceHandle {
        self.spaces.create_reference(ty, pose)
    }

    pub fn create_action_space(
        &mut self,
        action: ActionHandle,
        subaction: Path,
        pose: Pose,
    ) -> RuntimeResult<SpaceHandle> {
        self.actions.validate_pose_action(action, subaction)?;
        Ok(self.spaces.create_action(action, subaction, pose))
    }

    pub fn destroy_space(&mut self, space: SpaceHandle) -> RuntimeResult<()> {
        self.spaces.destroy(space)
    }

    /// Locate a space on the runtime clock.
    ///
    /// Reference spaces answer from their cached pose. Action spaces follow
    /// the first binding matching their sub-action filter; without a binding
    /// they report their creation pose untracked.
    pub fn locate_space(
        &self,
        space: SpaceHandle,
    ) -> RuntimeResult<(SpaceLocation, SpaceVelocity)> {
        let space = self.spaces.get(space)?;
        match space.kind {
            SpaceKind::Reference(_) => Ok((
                SpaceLocation {
                    flags: space.flags,
                    pose: space.pose,
                },
                SpaceVelocity::default(),
            )),
            SpaceKind::Action { action, subaction } => {
                let indices =
                    self.actions
                        .bound_state_indices(&self.registry, action, subaction)?;
                let Some(&first) = indices.first() else {
                    return Ok((
                        SpaceLocation {
                            flags: space.flags.without(SpaceLocationFlags::TRACKED),
                            pose: space.pose,
                        },
                        SpaceVelocity::default(),
                    ));
                };
                let location = self.registry.state(first).location();
                let mut flags = space.flags;
                if let (Some(conformance), false) = (self.conformance.as_ref(), subaction.is_null())
                {
                    if !conformance.is_active(NULL_PATH, subaction, true) {
                        flags = flags.without(SpaceLocationFlags::TRACKED);
                    }
                }
                Ok((
                    SpaceLocation {
                        flags,
                        pose: location.pose,
                    },
                    SpaceVelocity {
                        linear: location.linear_velocity,
                        angular: location.angular_velocity,
                    },
                ))
            }
        }
    }

    /// Play-area bounds, absent until the driver sets them
    pub fn reference_space_bounds(&self, ty: ReferenceSpaceType) -> Option<Extent2D> {
        self.spaces.bounds(ty)
    }

    // --- views ---

    pub fn enumerate_view_configurations(&self) -> Vec<ViewConfigurationType> {
        self.views.types()
    }

    pub fn enumerate_view_configuration_views(
        &self,
        ty: ViewConfigurationType,
    ) -> RuntimeResult<Vec<ViewConfigurationView>> {
        let config = self
            .views
            .get(ty)
            .ok_or(RuntimeError::ViewConfigurationTypeUnsupported)?;
        Ok(config.dimensions.clone())
    }

    pub fn enumerate_environment_blend_modes(
        &self,
        ty: ViewConfigurationType,
    ) -> RuntimeResult<&'static [EnvironmentBlendMode]> {
        if self.views.get(ty).is_none() {
            return Err(RuntimeError::ViewConfigurationTypeUnsupported);
        }
        Ok(ENVIRONMENT_BLEND_MODES)
    }

    /// Quad views locate as the session's primary configuration when the
    /// session was begun with a different primary. Kept for compatibility
    /// with drivers that rely on it.
    fn effective_view_configuration(&self, ty: ViewConfigurationType) -> ViewConfigurationType {
        if ty == ViewConfigurationType::PrimaryQuadVarjo {
            if let Some(primary) = self.session.primary_view_configuration() {
                if primary != ViewConfigurationType::PrimaryQuadVarjo {
                    return primary;
                }
            }
        }
        ty
    }

    pub fn locate_views(
        &self,
        ty: ViewConfigurationType,
    ) -> RuntimeResult<(ViewStateFlags, Vec<View>)> {
        let ty = self.effective_view_configuration(ty);
        let config = self
            .views
            .get(ty)
            .ok_or(RuntimeError::ViewConfigurationTypeUnsupported)?;
        // Registered is not enough: secondaries must have been enabled at
        // session begin.
        if !config.enabled {
            return Err(RuntimeError::ViewConfigurationTypeUnsupported);
        }
        let mut flags = config.state_flags;
        if !config.active {
            flags = flags.without(ViewStateFlags::TRACKED);
        }
        Ok((flags, config.views.clone()))
    }

    /// Buffer-filling variant of [`locate_views`](Self::locate_views).
    ///
    /// An empty buffer queries the required capacity; a non-empty but too
    /// small one is an error.
    pub fn locate_views_into(
        &self,
        ty: ViewConfigurationType,
        out: &mut [View],
    ) -> RuntimeResult<(ViewStateFlags, usize)> {
        let (flags, views) = self.locate_views(ty)?;
        if out.is_empty() {
            return Ok((flags, views.len()));
        }
        if out.len() < views.len() {
            return Err(RuntimeError::SizeInsufficient);
        }
        out[..views.len()].copy_from_slice(&views);
        Ok((flags, views.len()))
    }

    /// Switch a secondary view configuration on or off
    pub fn activate_secondary_view(
        &mut self,
        ty: ViewConfigurationType,
        active: bool,
    ) -> RuntimeResult<()> {
        if ty.is_primary() {
            return Err(RuntimeError::ViewConfigurationTypeUnsupported);
        }
        let config = self
            .views
            .get_mut(ty)
            .ok_or(RuntimeError::ViewConfigurationTypeUnsupported)?;
        config.active = active;
        Ok(())
    }

    pub fn set_view_pose(
        &mut self,
        ty: ViewConfigurationType,
        view_index: usize,
        pose: Pose,
    ) -> RuntimeResult<()> {
        let config = self
            .views
            .get_mut(ty)
            .ok_or(RuntimeError::ViewConfigurationTypeUnsupported)?;
        let view = config
            .views
            .get_mut(view_index)
            .ok_or(RuntimeError::ValidationFailure)?;
        view.pose = pose;
        Ok(())
    }

    pub fn set_view_state_flags(
        &mut self,
        ty: ViewConfigurationType,
        flags: ViewStateFlags,
    ) -> RuntimeResult<()> {
        let config = self
            .views
            .get_mut(ty)
            .ok_or(RuntimeError::ViewConfigurationTypeUnsupported)?;
        config.state_flags = flags;
        Ok(())
    }

    /// Announce a visibility-mask change for one view
    pub fn visibility_mask_changed(&self, ty: ViewConfigurationType, view_index: u32) {
        self.events.push(Event::VisibilityMaskChanged {
            view_configuration: ty,
            view_index,
        });
    }

    // --- actions ---

    pub fn create_action_set(
        &mut self,
        name: &str,
        localized_name: &str,
    ) -> RuntimeResult<ActionSetHandle> {
        self.actions.create_action_set(name, localized_name)
    }

    pub fn destroy_action_set(&mut self, set: ActionSetHandle) -> RuntimeResult<()> {
        self.actions.destroy_action_set(set)
    }

    pub fn create_action(
        &mut self,
        set: ActionSetHandle,
        name: &str,
        localized_name: &str,
        ty: ActionType,
        subaction_paths: &[Path],
    ) -> RuntimeResult<ActionHandle> {
        self.actions
            .create_action(&self.paths, set, name, localized_name, ty, subaction_paths)
    }

    pub fn destroy_action(&mut self, action: ActionHandle) -> RuntimeResult<()> {
        self.actions.destroy_action(action)
    }

    pub fn suggest_bindings(
        &mut self,
        profile: Path,
        bindings: &[SuggestedBinding],
    ) -> RuntimeResult<()> {
        let changed =
            self.actions
                .suggest_bindings(&mut self.paths, &mut self.registry, profile, bindings)?;
        for _ in changed {
            self.events.push(Event::InteractionProfileChanged);
        }
        Ok(())
    }

    pub fn attach_action_sets(&mut self, sets: &[ActionSetHandle]) -> RuntimeResult<()> {
        self.actions.attach(sets)
    }

    pub fn sync_actions(&mut self, active_sets: &[ActiveActionSet]) -> RuntimeResult<SyncOutcome> {
        self.ensure_not_lost()?;
        self.ensure_running()?;
        let focused = self.session.state() == SessionState::Focused;
        self.actions.sync(
            &mut self.registry,
            self.conformance.as_ref(),
            active_sets,
            focused,
        )
    }

    pub fn action_state_boolean(
        &self,
        action: ActionHandle,
        subaction: Path,
    ) -> RuntimeResult<ActionStateBoolean> {
        self.actions
            .action_state_boolean(&self.registry, action, subaction)
    }

    pub fn action_state_float(
        &self,
        action: ActionHandle,
        subaction: Path,
    ) -> RuntimeResult<ActionStateFloat> {
        self.actions
            .action_state_float(&self.registry, action, subaction)
    }

    pub fn action_state_vector2(
        &self,
        action: ActionHandle,
        subaction: Path,
    ) -> RuntimeResult<ActionStateVector2> {
        self.actions
            .action_state_vector2(&self.registry, action, subaction)
    }

    pub fn action_state_pose(
        &self,
        action: ActionHandle,
        subaction: Path,
    ) -> RuntimeResult<ActionStatePose> {
        self.actions
            .action_state_pose(&self.registry, self.conformance.as_ref(), action, subaction)
    }

    /// The interaction profile active on a top-level user path
    pub fn current_interaction_profile(&self, user_path: Path) -> RuntimeResult<Path> {
        if !self.actions.is_attached() {
            return Err(RuntimeError::ActionSetNotAttached);
        }
        if !PathInterner::is_user_path(user_path)
            || user_path.lower() as usize > self.paths.user_path_count()
        {
            return Err(RuntimeError::PathUnsupported);
        }
        Ok(self
            .registry
            .active_profile(user_path)
            .map(|profile| profile.path)
            .unwrap_or(NULL_PATH))
    }

    pub fn enumerate_bound_sources(&self, action: ActionHandle) -> RuntimeResult<Vec<Path>> {
        self.actions.bound_sources(&self.registry, action)
    }

    /// Human-readable name of a bound source, assembled from the requested
    /// pieces
    pub fn input_source_localized_name(
        &self,
        source: Path,
        which: SourceNameFlags,
    ) -> RuntimeResult<String> {
        if !self.actions.is_attached() {
            return Err(RuntimeError::ActionSetNotAttached);
        }
        let user_path = PathInterner::user_path(source);
        let profile = self
            .registry
            .active_profile(user_path)
            .ok_or(RuntimeError::PathUnsupported)?;
        let state_index = self
            .registry
            .find_state(profile.path, source)
            .ok_or(RuntimeError::PathUnsupported)?;
        Ok(self
            .registry
            .source_localized_name(&self.paths, state_index, which))
    }

    // --- haptics ---

    pub fn apply_haptic_feedback(&self, action: ActionHandle) -> RuntimeResult<()> {
        self.actions.validate_haptic_action(action)?;
        self.events
            .push(Event::Script(ScriptEvent::HapticImpulse { action }));
        Ok(())
    }

    pub fn stop_haptic_feedback(&self, action: ActionHandle) -> RuntimeResult<()> {
        self.actions.validate_haptic_action(action)?;
        self.events
            .push(Event::Script(ScriptEvent::HapticStop { action }));
        Ok(())
    }

    // --- conformance automation ---

    fn conformance_mut(&mut self) -> RuntimeResult<&mut ConformanceAutomation> {
        self.conformance
            .as_mut()
            .ok_or(RuntimeError::FunctionUnsupported)
    }

    pub fn set_input_device_active(
        &mut self,
        interaction_profile: Path,
        top_level: Path,
        is_active: bool,
    ) -> RuntimeResult<()> {
        self.conformance_mut()?
            .set_active(interaction_profile, top_level, is_active);
        Ok(())
    }

    pub fn set_input_device_boolean(&mut self, source: Path, value: bool) -> RuntimeResult<()> {
        self.conformance_mut()?.set_boolean(source, value);
        Ok(())
    }

    pub fn set_input_device_float(&mut self, source: Path, value: f32) -> RuntimeResult<()> {
        self.conformance_mut()?.set_float(source, value);
        Ok(())
    }

    pub fn set_input_device_vector2(&mut self, source: Path, value: Vec2) -> RuntimeResult<()> {
        self.conformance_mut()?.set_vector2(source, value);
        Ok(())
    }

    pub fn set_input_device_location(&mut self, source: Path, pose: Pose) -> RuntimeResult<()> {
        self.conformance_mut()?.set_pose(source, pose);
        Ok(())
    }

    pub fn set_input_device_velocity(
        &mut self,
        source: Path,
        linear: Option<Vec3>,
        angular: Option<Vec3>,
    ) -> RuntimeResult<()> {
        self.conformance_mut()?.set_velocity(source, linear, angular);
        Ok(())
    }

    // --- test control ---

    /// Move every space of a reference-space type
    pub fn set_reference_space_pose(&mut self, ty: ReferenceSpaceType, pose: Pose) {
        self.spaces.set_reference_pose(ty, pose);
    }

    pub fn set_reference_space_flags(&mut self, ty: ReferenceSpaceType, flags: SpaceLocationFlags) {
        self.spaces.set_reference_flags(ty, flags);
    }

    /// Write a pose through an action's bindings
    pub fn set_action_space_pose(
        &mut self,
        action: ActionHandle,
        subaction: Path,
        location: Location,
    ) -> RuntimeResult<()> {
        let indices = self
            .actions
            .bound_state_indices(&self.registry, action, subaction)?;
        for index in indices {
            let state = self.registry.state_mut(index);
            state.set_pose(location.pose);
            state.set_velocity(location.linear_velocity, location.angular_velocity);
        }
        Ok(())
    }

    /// Set play-area bounds and notify pollers
    pub fn set_reference_space_bounds(&mut self, ty: ReferenceSpaceType, extent: Extent2D) {
        self.spaces.set_bounds(ty, extent);
        self.events.push(Event::ReferenceSpaceChangePending {
            reference_space: ty,
        });
    }

    /// Simulate losing the instance; the announced kill time is five
    /// seconds out, and the deadline is not enforced
    pub fn cause_instance_loss(&mut self) {
        self.lost = true;
        let loss_time = self.predicted_display_time() + INSTANCE_LOSS_DELAY;
        log::warn!("instance loss scheduled at {loss_time}");
        self.events.push(Event::InstanceLossPending { loss_time });
    }

    pub fn system_properties(&self) -> SystemProperties {
        SystemProperties {
            system_id: 2,
            vendor_id: 0xFEFE,
            system_name: "Mock XR Device",
            max_composition_layers: 16,
            orientation_tracking: true,
            position_tracking: true,
            supports_eye_gaze: self.flags.contains(ExtensionFlags::EYE_GAZE_INTERACTION),
        }
    }

    /// Resolve an entry-point name through the capability registry
    pub fn resolve_function(&self, name: &str) -> RuntimeResult<Capability> {
        self.capabilities.resolve(name)
    }
}
