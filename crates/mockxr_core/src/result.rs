//! Result codes for the public runtime surface
//!
//! Every fallible operation validates its preconditions in a fixed order and
//! returns the code of the first violated contract before mutating any state.

use thiserror::Error;

/// Failure codes returned by the runtime.
///
/// This is a closed set. Status-like conditions that are not failures
/// (an empty event queue, unavailable bounds, an unfocused sync) are
/// expressed through return types instead of error variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum RuntimeError {
    #[error("validation failure")]
    ValidationFailure,

    #[error("handle invalid")]
    HandleInvalid,

    #[error("path format invalid")]
    PathFormatInvalid,

    #[error("path invalid")]
    PathInvalid,

    #[error("path unsupported")]
    PathUnsupported,

    #[error("name invalid")]
    NameInvalid,

    #[error("name duplicated")]
    NameDuplicated,

    #[error("localized name invalid")]
    LocalizedNameInvalid,

    #[error("localized name duplicated")]
    LocalizedNameDuplicated,

    #[error("limit reached")]
    LimitReached,

    #[error("action type mismatch")]
    ActionTypeMismatch,

    #[error("action set not attached")]
    ActionSetNotAttached,

    #[error("action sets already attached")]
    ActionSetsAlreadyAttached,

    #[error("session not running")]
    SessionNotRunning,

    #[error("session not stopping")]
    SessionNotStopping,

    #[error("view configuration type unsupported")]
    ViewConfigurationTypeUnsupported,

    #[error("reference space unsupported")]
    ReferenceSpaceUnsupported,

    #[error("size insufficient")]
    SizeInsufficient,

    #[error("layer invalid")]
    LayerInvalid,

    #[error("secondary view configuration type not enabled")]
    SecondaryViewConfigurationTypeNotEnabled,

    #[error("function unsupported")]
    FunctionUnsupported,

    #[error("instance lost")]
    InstanceLost,

    #[error("runtime failure")]
    RuntimeFailure,
}

/// Result type for runtime operations
pub type RuntimeResult<T> = Result<T, RuntimeError>;
