//! # mockxr_core - Mock XR Runtime Core
//!
//! Foundational primitives shared by every other crate in the workspace:
//! - **Result codes**: the closed [`RuntimeError`] set every fallible
//!   operation draws from
//! - **Handles**: type-tagged 64-bit identifiers packing two 32-bit halves
//! - **Paths**: the semantic path interner (`/user/hand/left/input/trigger`)
//! - **Extension flags**: the feature set negotiated at runtime creation

pub mod flags;
pub mod handle;
pub mod path;
pub mod result;

pub use flags::*;
pub use handle::*;
pub use path::*;
pub use result::*;

/// Timestamps on the runtime clock, in nanoseconds.
pub type Time = i64;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::flags::ExtensionFlags;
    pub use crate::handle::Handle;
    pub use crate::path::{Path, PathInterner, NULL_PATH};
    pub use crate::result::{RuntimeError, RuntimeResult};
    pub use crate::Time;
}
