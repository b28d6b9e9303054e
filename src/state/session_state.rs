// ============================================================================
// SESSION STATE - Anonymous / LoggingIn / Authenticated
// ============================================================================

use std::rc::Rc;

use yew::Reducible;

/// UI-side view of the sign-in lifecycle.
///
/// `is_logging_in` and `is_authorized` are never both true once an action
/// has been applied.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionState {
    pub is_authorized: bool,
    pub is_logging_in: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    /// Authorization status read back from the OIDC client
    Authorized(bool),
    LoginStarted,
    /// Interactive sign-in failed
    LoginAborted,
    LogoutStarted,
    LoggedOut,
}

/// What the shell renders below the header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionView {
    Anonymous,
    LoggingIn,
    Authenticated,
}

impl SessionState {
    pub fn apply(self, action: SessionAction) -> Self {
        match action {
            SessionAction::Authorized(is_authorized) => Self {
                is_authorized,
                is_logging_in: self.is_logging_in && !is_authorized,
            },
            SessionAction::LoginStarted if self.is_authorized => self,
            SessionAction::LoginStarted => Self {
                is_logging_in: true,
                ..self
            },
            SessionAction::LoginAborted | SessionAction::LogoutStarted => Self {
                is_logging_in: false,
                ..self
            },
            SessionAction::LoggedOut => Self::default(),
        }
    }

    pub fn view(&self) -> SessionView {
        if self.is_logging_in {
            SessionView::LoggingIn
        } else if self.is_authorized {
            SessionView::Authenticated
        } else {
            SessionView::Anonymous
        }
    }
}

impl Reducible for SessionState {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}
