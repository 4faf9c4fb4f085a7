//! Session lifecycle
//!
//! The session walks a fixed state graph. Public transitions go through the
//! validity table; the test-control surface may force arbitrary states. The
//! machine itself queues nothing: every method returns the states actually
//! entered so the caller can raise one event per hop.

use crate::view::ViewConfigurationType;
use mockxr_core::{RuntimeError, RuntimeResult};

/// Application-visible session states
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SessionState {
    Unknown,
    Idle,
    Ready,
    Synchronized,
    Visible,
    Focused,
    Stopping,
    LossPending,
    Exiting,
}

impl SessionState {
    /// Whether the state graph permits moving from `self` to `next`.
    ///
    /// Loss is always reachable; once lost, nothing else is.
    pub fn can_transition_to(self, next: SessionState) -> bool {
        use SessionState::*;
        if next == LossPending {
            return true;
        }
        match self {
            Unknown => false,
            Idle => matches!(next, Ready | Exiting),
            Ready => next == Synchronized,
            Synchronized => matches!(next, Stopping | Visible),
            Visible => matches!(next, Synchronized | Focused),
            Focused => next == Visible,
            Stopping => next == Idle,
            LossPending => false,
            Exiting => next == Idle,
        }
    }
}

/// The session state machine
pub struct Session {
    state: SessionState,
    running: bool,
    exit_requested: bool,
    primary_view_configuration: Option<ViewConfigurationType>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            state: SessionState::Unknown,
            running: false,
            exit_requested: false,
            primary_view_configuration: None,
        }
    }

    #[inline]
    pub fn state(&self) -> SessionState {
        self.state
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// The primary view configuration the session was begun with
    pub fn primary_view_configuration(&self) -> Option<ViewConfigurationType> {
        self.primary_view_configuration
    }

    /// Enter a state regardless of the validity table. No-op when already
    /// there; returns whether the state changed.
    pub fn force_state(&mut self, next: SessionState) -> bool {
        if self.state == next {
            return false;
        }
        log::debug!("session state {:?} -> {:?} (forced)", self.state, next);
        self.state = next;
        true
    }

    /// Enter a state if the validity table allows it
    pub fn transition(&mut self, next: SessionState) -> bool {
        if self.state == next {
            return false;
        }
        if !self.state.can_transition_to(next) {
            log::warn!("rejected session transition {:?} -> {:?}", self.state, next);
            return false;
        }
        log::debug!("session state {:?} -> {:?}", self.state, next);
        self.state = next;
        true
    }

    /// A session comes into existence Idle and immediately becomes Ready
    pub fn create(&mut self) -> Vec<SessionState> {
        let mut entered = Vec::new();
        if self.force_state(SessionState::Idle) {
            entered.push(SessionState::Idle);
        }
        if self.transition(SessionState::Ready) {
            entered.push(SessionState::Ready);
        }
        entered
    }

    /// Begin running: the session climbs straight to Focused
    pub fn begin(&mut self, primary: ViewConfigurationType) -> Vec<SessionState> {
        self.running = true;
        self.primary_view_configuration = Some(primary);
        let mut entered = Vec::new();
        for next in [
            SessionState::Synchronized,
            SessionState::Visible,
            SessionState::Focused,
        ] {
            if self.transition(next) {
                entered.push(next);
            }
        }
        entered
    }

    /// Ask the application to quit; the session descends to Stopping
    pub fn request_exit(&mut self) -> RuntimeResult<Vec<SessionState>> {
        if !self.running {
            return Err(RuntimeError::SessionNotRunning);
        }
        self.exit_requested = true;
        let mut entered = Vec::new();
        for next in [
            SessionState::Visible,
            SessionState::Synchronized,
            SessionState::Stopping,
        ] {
            if self.transition(next) {
                entered.push(next);
            }
        }
        Ok(entered)
    }

    /// End a stopping session, continuing to Exiting when an exit was
    /// requested
    pub fn end(&mut self) -> RuntimeResult<Vec<SessionState>> {
        if self.state != SessionState::Stopping {
            return Err(RuntimeError::SessionNotStopping);
        }
        self.running = false;
        let mut entered = Vec::new();
        if self.transition(SessionState::Idle) {
            entered.push(SessionState::Idle);
        }
        if self.exit_requested && self.transition(SessionState::Exiting) {
            entered.push(SessionState::Exiting);
        }
        Ok(entered)
    }

    /// Tear the session down, back to Unknown
    pub fn destroy(&mut self) {
        self.state = SessionState::Unknown;
        self.running = false;
        self.exit_requested = false;
        self.primary_view_configuration = None;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use SessionState::*;

    #[test]
    fn test_transition_table() {
        let allowed: &[(SessionState, SessionState)] = &[
            (Idle, Ready),
            (Idle, Exiting),
            (Ready, Synchronized),
            (Synchronized, Visible),
            (Synchronized, Stopping),
            (Visible, Focused),
            (Visible, Synchronized),
            (Focused, Visible),
            (Stopping, Idle),
            (Exiting, Idle),
        ];
        let states = [
            Unknown,
            Idle,
            Ready,
            Synchronized,
            Visible,
            Focused,
            Stopping,
            LossPending,
            Exiting,
        ];
        for &from in &states {
            for &to in &states {
                let expect = to == LossPending || allowed.contains(&(from, to));
                assert_eq!(
                    from.can_transition_to(to),
                    expect,
                    "{from:?} -> {to:?}"
                );
            }
        }
    }

    #[test]
    fn test_loss_is_terminal() {
        let mut session = Session::new();
        session.create();
        assert!(session.force_state(LossPending));
        assert!(!session.transition(Idle));
        assert_eq!(session.state(), LossPending);
    }

    #[test]
    fn test_create_begin_lifecycle() {
        let mut session = Session::new();
        assert_eq!(session.create(), vec![Idle, Ready]);
        assert_eq!(
            session.begin(ViewConfigurationType::PrimaryStereo),
            vec![Synchronized, Visible, Focused]
        );
        assert!(session.is_running());
        assert_eq!(
            session.primary_view_configuration(),
            Some(ViewConfigurationType::PrimaryStereo)
        );
    }

    #[test]
    fn test_exit_and_end() {
        let mut session = Session::new();
        assert_eq!(session.end(), Err(RuntimeError::SessionNotStopping));
        assert_eq!(session.request_exit(), Err(RuntimeError::SessionNotRunning));

        session.create();
        session.begin(ViewConfigurationType::PrimaryStereo);
        assert_eq!(
            session.request_exit().unwrap(),
            vec![Visible, Synchronized, Stopping]
        );
        assert_eq!(session.end().unwrap(), vec![Idle, Exiting]);
        assert!(!session.is_running());
    }

    #[test]
    fn test_end_without_exit_request_stays_idle() {
        let mut session = Session::new();
        session.create();
        session.begin(ViewConfigurationType::PrimaryStereo);
        // Walk down manually rather than requesting an exit.
        session.transition(Visible);
        session.transition(Synchronized);
        session.transition(Stopping);
        assert_eq!(session.end().unwrap(), vec![Idle]);
    }

    #[test]
    fn test_force_state_is_noop_when_equal() {
        let mut session = Session::new();
        session.create();
        assert!(!session.force_state(Ready));
    }
}
