//! # mockxr_input - Emulated input
//!
//! The input half of the mock runtime:
//! - a static catalog of interaction profiles and the input sources they
//!   expose ([`profiles`])
//! - typed input-source states with the coercion rules the emulator uses
//!   ([`state`])
//! - the instantiated profile registry with per-user-path active profiles
//!   ([`registry`])
//! - action sets, actions, suggested bindings, and state aggregation
//!   ([`action`])
//! - the conformance-automation override store ([`conformance`])

pub mod action;
pub mod conformance;
pub mod profiles;
pub mod registry;
pub mod state;

pub use action::*;
pub use conformance::*;
pub use registry::*;
pub use state::*;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::action::{
        ActionHandle, ActionMap, ActionSetHandle, ActiveActionSet, SuggestedBinding, SyncOutcome,
    };
    pub use crate::conformance::ConformanceAutomation;
    pub use crate::registry::{InputRegistry, SourceNameFlags};
    pub use crate::state::{ActionType, InputState, Location};
}
