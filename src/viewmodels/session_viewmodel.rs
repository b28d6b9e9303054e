// ============================================================================
// SESSION VIEWMODEL - sign-in lifecycle
// ============================================================================
// Awaits the authorization client and returns the action to apply.
// Hooks own the state and dispatch.
// ============================================================================

use std::rc::Rc;

use crate::auth::AuthorizationClient;
use crate::state::{SessionAction, SessionState};

#[derive(Clone)]
pub struct SessionViewModel {
    client: Rc<AuthorizationClient>,
}

impl SessionViewModel {
    pub fn new(client: Rc<AuthorizationClient>) -> Self {
        Self { client }
    }

    /// State to start from before the mount flow has run
    pub fn initial_state(&self) -> SessionState {
        SessionState {
            is_authorized: self.client.is_authorized(),
            is_logging_in: false,
        }
    }

    /// Initializes the client if needed and tries to restore a session.
    ///
    /// `None` means nothing changed: either initialization failed (logged)
    /// or there was no session to restore (expected, swallowed).
    pub async fn restore_session(&self) -> Option<SessionAction> {
        if !self.client.is_initialized() {
            if let Err(e) = self.client.initialize().await {
                log::error!("❌ OIDC initialization failed: {}", e);
                return None;
            }
        }

        match self.client.sign_in_silent().await {
            Ok(()) => {
                let authorized = self.client.is_authorized();
                log::info!("✅ Session restored (authorized: {})", authorized);
                Some(SessionAction::Authorized(authorized))
            }
            Err(e) => {
                // No previous session; the user can still click Login
                log::debug!("Silent sign-in skipped: {}", e);
                None
            }
        }
    }

    /// Interactive sign-in. Dispatch `LoginStarted` before awaiting this.
    pub async fn login(&self) -> SessionAction {
        match self.client.sign_in().await {
            Ok(()) => SessionAction::Authorized(self.client.is_authorized()),
            Err(e) => {
                log::error!("❌ Sign-in failed: {}", e);
                SessionAction::LoginAborted
            }
        }
    }

    /// Sign-out. Dispatch `LogoutStarted` before awaiting this.
    pub async fn logout(&self) -> SessionAction {
        if let Err(e) = self.client.sign_out().await {
            log::error!("❌ Sign-out failed: {}", e);
        }
        SessionAction::LoggedOut
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::fake::{FakeOidcProvider, Outcome};
    use crate::config::OidcConfig;
    use crate::state::SessionView;
    use futures::executor::block_on;

    fn setup() -> (Rc<FakeOidcProvider>, Rc<AuthorizationClient>, SessionViewModel) {
        let provider = Rc::new(FakeOidcProvider::default());
        let client = Rc::new(AuthorizationClient::new(
            provider.clone(),
            OidcConfig::default(),
        ));
        let vm = SessionViewModel::new(client.clone());
        (provider, client, vm)
    }

    #[test]
    fn mount_without_session_stays_anonymous() {
        let (_provider, client, vm) = setup();
        let mut state = vm.initial_state();

        if let Some(action) = block_on(vm.restore_session()) {
            state = state.apply(action);
        }

        assert!(client.is_initialized());
        assert_eq!(state.view(), SessionView::Anonymous);
    }

    #[test]
    fn mount_with_existing_session_is_authenticated() {
        let (provider, _client, vm) = setup();
        provider.set_authorized(true);

        let action = block_on(vm.restore_session());
        assert_eq!(action, Some(SessionAction::Authorized(true)));
        assert_eq!(
            vm.initial_state().apply(action.unwrap()).view(),
            SessionView::Authenticated
        );
    }

    #[test]
    fn mount_reuses_initialized_client() {
        let (provider, client, vm) = setup();
        block_on(client.initialize()).unwrap();

        block_on(vm.restore_session());
        assert_eq!(provider.created(), 1);
        assert_eq!(provider.callbacks().len(), 1);
    }

    #[test]
    fn failed_initialization_changes_nothing() {
        let (provider, client, vm) = setup();
        provider.set_callback(Outcome::Fail("invalid_grant"));

        assert_eq!(block_on(vm.restore_session()), None);
        assert!(!client.is_initialized());
    }

    #[test]
    fn login_flow_clears_placeholder_once_authorized() {
        let (_provider, _client, vm) = setup();
        let mut state = vm.initial_state();
        if let Some(action) = block_on(vm.restore_session()) {
            state = state.apply(action);
        }

        state = state.apply(SessionAction::LoginStarted);
        assert_eq!(state.view(), SessionView::LoggingIn);

        state = state.apply(block_on(vm.login()));
        assert_eq!(state.view(), SessionView::Authenticated);
        assert!(!state.is_logging_in);
    }

    #[test]
    fn failed_login_aborts() {
        let (provider, _client, vm) = setup();
        block_on(vm.restore_session());
        provider.set_sign_in(Outcome::Fail("popup_closed"));

        assert_eq!(block_on(vm.login()), SessionAction::LoginAborted);
    }

    #[test]
    fn logout_resets_even_when_sign_out_fails() {
        let (provider, _client, vm) = setup();
        provider.set_authorized(true);
        let mut state = vm.initial_state();
        if let Some(action) = block_on(vm.restore_session()) {
            state = state.apply(action);
        }
        assert_eq!(state.view(), SessionView::Authenticated);

        provider.set_sign_out(Outcome::Fail("network"));
        state = state.apply(SessionAction::LogoutStarted);
        state = state.apply(block_on(vm.logout()));

        assert_eq!(state, SessionState::default());
    }

    #[test]
    fn logout_before_initialization_still_resets() {
        let (_provider, _client, vm) = setup();
        let state = SessionState {
            is_authorized: false,
            is_logging_in: true,
        }
        .apply(SessionAction::LogoutStarted)
        .apply(block_on(vm.logout()));

        assert_eq!(state, SessionState::default());
    }
}
