//! Typed input-source state
//!
//! Every input source an interaction profile exposes (a trigger, a
//! thumbstick, a grip pose) is one [`InputState`]. The state's type is fixed
//! at creation; setters coerce between boolean and float and reset on any
//! other mismatch, so a state can never hold a value of the wrong shape.

use mockxr_core::Path;
use mockxr_math::{Pose, Vec2, Vec3};

/// The value class of an action or input source
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ActionType {
    Boolean,
    Float,
    Vector2,
    Pose,
    Vibration,
}

/// A located pose with optional velocities
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Location {
    pub pose: Pose,
    pub linear_velocity: Option<Vec3>,
    pub angular_velocity: Option<Vec3>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum InputValue {
    Boolean(bool),
    Float(f32),
    Vector2(Vec2),
    Location(Location),
    Vibration,
}

/// The live state of a single input source
#[derive(Clone, Debug)]
pub struct InputState {
    /// Profile this source belongs to; null for detached override states
    pub profile_path: Path,
    /// Full source path, e.g. `/user/hand/left/input/trigger/value`
    pub source_path: Path,
    pub localized_name: Option<&'static str>,
    ty: ActionType,
    value: InputValue,
}

impl InputState {
    /// Create a source owned by an interaction profile
    pub fn new(
        profile_path: Path,
        source_path: Path,
        ty: ActionType,
        localized_name: &'static str,
    ) -> Self {
        Self {
            profile_path,
            source_path,
            localized_name: Some(localized_name),
            ty,
            value: Self::default_value(ty),
        }
    }

    /// Create a free-standing state, used for override stores
    pub fn detached(ty: ActionType) -> Self {
        Self {
            profile_path: Path::null(),
            source_path: Path::null(),
            localized_name: None,
            ty,
            value: Self::default_value(ty),
        }
    }

    #[inline]
    pub fn action_type(&self) -> ActionType {
        self.ty
    }

    fn default_value(ty: ActionType) -> InputValue {
        match ty {
            ActionType::Boolean => InputValue::Boolean(false),
            ActionType::Float => InputValue::Float(0.0),
            ActionType::Vector2 => InputValue::Vector2(Vec2::ZERO),
            ActionType::Pose => InputValue::Location(Location::default()),
            ActionType::Vibration => InputValue::Vibration,
        }
    }

    /// Return the state to its zero value
    pub fn reset(&mut self) {
        self.value = Self::default_value(self.ty);
    }

    /// Set a float; booleans coerce, any other type resets
    pub fn set_float(&mut self, v: f32) {
        match self.ty {
            ActionType::Float => self.value = InputValue::Float(v),
            ActionType::Boolean => self.value = InputValue::Boolean(v != 0.0),
            _ => self.reset(),
        }
    }

    /// Set a boolean; floats coerce to 0.0/1.0, any other type resets
    pub fn set_boolean(&mut self, v: bool) {
        match self.ty {
            ActionType::Boolean => self.value = InputValue::Boolean(v),
            ActionType::Float => self.value = InputValue::Float(if v { 1.0 } else { 0.0 }),
            _ => self.reset(),
        }
    }

    pub fn set_vector2(&mut self, v: Vec2) {
        if self.ty == ActionType::Vector2 {
            self.value = InputValue::Vector2(v);
        } else {
            self.reset();
        }
    }

    /// Set the pose of a pose source, keeping its velocities
    pub fn set_pose(&mut self, pose: Pose) {
        if self.ty != ActionType::Pose {
            self.reset();
            return;
        }
        if let InputValue::Location(location) = &mut self.value {
            location.pose = pose;
        }
    }

    /// Set the velocities of a pose source
    pub fn set_velocity(&mut self, linear: Option<Vec3>, angular: Option<Vec3>) {
        if let InputValue::Location(location) = &mut self.value {
            location.linear_velocity = linear;
            location.angular_velocity = angular;
        }
    }

    /// Read as a float; booleans coerce to 0.0/1.0
    pub fn get_float(&self) -> f32 {
        match self.value {
            InputValue::Float(v) => v,
            InputValue::Boolean(v) => v as u8 as f32,
            _ => 0.0,
        }
    }

    /// Read as a boolean; floats coerce via `!= 0.0`
    pub fn get_boolean(&self) -> bool {
        match self.value {
            InputValue::Boolean(v) => v,
            InputValue::Float(v) => v != 0.0,
            _ => false,
        }
    }

    pub fn get_vector2(&self) -> Vec2 {
        match self.value {
            InputValue::Vector2(v) => v,
            _ => Vec2::ZERO,
        }
    }

    pub fn location(&self) -> Location {
        match self.value {
            InputValue::Location(location) => location,
            _ => Location::default(),
        }
    }

    /// Whether an action of `action_type` may bind to this source.
    ///
    /// Boolean and float sources are interchangeable; every other type must
    /// match exactly.
    pub fn is_compatible_type(&self, action_type: ActionType) -> bool {
        match self.ty {
            ActionType::Boolean | ActionType::Float => {
                matches!(action_type, ActionType::Boolean | ActionType::Float)
            }
            ty => ty == action_type,
        }
    }

    /// Copy another state's value through this state's type
    pub fn copy_value_from(&mut self, other: &InputState) {
        match self.ty {
            ActionType::Boolean => self.value = InputValue::Boolean(other.get_boolean()),
            ActionType::Float => self.value = InputValue::Float(other.get_float()),
            ActionType::Vector2 => self.value = InputValue::Vector2(other.get_vector2()),
            ActionType::Pose => self.value = InputValue::Location(other.location()),
            ActionType::Vibration => {}
        }
    }
}
