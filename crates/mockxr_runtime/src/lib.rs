//! # mockxr_runtime - The emulated runtime
//!
//! Ties the lower crates together into a [`MockRuntime`]: the session state
//! machine, reference and action spaces, view configurations, the capability
//! registry for entry-point dispatch, and the test-control surface a driver
//! uses to steer the emulator from outside.

pub mod capability;
pub mod events;
pub mod runtime;
pub mod session;
pub mod space;
pub mod view;

pub use capability::*;
pub use events::*;
pub use runtime::*;
pub use session::*;
pub use space::*;
pub use view::*;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::capability::{Capability, CapabilityRegistry};
    pub use crate::events::{Event, ScriptEvent};
    pub use crate::runtime::{FrameState, MockRuntime, SystemProperties};
    pub use crate::session::SessionState;
    pub use crate::space::{ReferenceSpaceType, SpaceHandle, SpaceLocation, SpaceLocationFlags};
    pub use crate::view::{EnvironmentBlendMode, View, ViewConfigurationType, ViewStateFlags};
}
