//! Runtime event types
//!
//! Two classes share one queue: ordinary events the application polls, and
//! script events consumed by the test driver's callback. Script events are
//! the interceptable half of the stream and never reach `poll_event`.

use crate::session::SessionState;
use crate::space::ReferenceSpaceType;
use crate::view::ViewConfigurationType;
use mockxr_core::Time;
use mockxr_event::Interceptable;
use mockxr_input::ActionHandle;

/// Events surfaced to the polling application
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Event {
    SessionStateChanged {
        state: SessionState,
    },
    InteractionProfileChanged,
    ReferenceSpaceChangePending {
        reference_space: ReferenceSpaceType,
    },
    InstanceLossPending {
        loss_time: Time,
    },
    VisibilityMaskChanged {
        view_configuration: ViewConfigurationType,
        view_index: u32,
    },
    /// Consumed by the script-event callback, never surfaced
    Script(ScriptEvent),
}

/// Notifications for the test driver
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScriptEvent {
    /// A frame was submitted
    EndFrame,
    HapticImpulse { action: ActionHandle },
    HapticStop { action: ActionHandle },
}

impl Interceptable for Event {
    type Intercepted = ScriptEvent;

    fn intercept(self) -> Result<ScriptEvent, Self> {
        match self {
            Event::Script(script) => Ok(script),
            other => Err(other),
        }
    }
}
