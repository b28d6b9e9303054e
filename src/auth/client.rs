use std::cell::RefCell;
use std::rc::Rc;

use super::{OidcClient, OidcProvider};
use crate::config::OidcConfig;
use crate::error::{AuthError, AuthResult};

/// Lazily constructed OIDC client shared by the whole app.
///
/// Built once in `main` and handed to components through properties. The
/// inner client is created by [`AuthorizationClient::initialize`] and never
/// replaced afterwards.
pub struct AuthorizationClient {
    provider: Rc<dyn OidcProvider>,
    config: OidcConfig,
    client: RefCell<Option<Rc<dyn OidcClient>>>,
}

impl AuthorizationClient {
    pub fn new(provider: Rc<dyn OidcProvider>, config: OidcConfig) -> Self {
        Self {
            provider,
            config,
            client: RefCell::new(None),
        }
    }

    pub fn oidc_client(&self) -> Option<Rc<dyn OidcClient>> {
        self.client.borrow().clone()
    }

    pub fn is_initialized(&self) -> bool {
        self.client.borrow().is_some()
    }

    pub fn is_authorized(&self) -> bool {
        self.client
            .borrow()
            .as_ref()
            .map(|client| client.is_authorized())
            .unwrap_or(false)
    }

    /// Completes any pending redirect sign-in, then creates the client.
    /// Does nothing when a client already exists.
    pub async fn initialize(&self) -> AuthResult<()> {
        if self.is_initialized() {
            return Ok(());
        }

        log::info!("🔐 Initializing OIDC client ({})", self.config.client_id);
        self.provider
            .handle_signin_callback(&self.config.redirect_uri)
            .await?;

        let created = self.provider.create_client(&self.config)?;

        let mut slot = self.client.borrow_mut();
        if slot.is_none() {
            *slot = Some(created);
            log::info!("✅ OIDC client ready");
        } else {
            log::debug!("OIDC client initialized concurrently, keeping the first instance");
        }
        Ok(())
    }

    pub async fn sign_in(&self) -> AuthResult<()> {
        let client = self.require_client()?;
        log::info!("🔑 Interactive sign-in");
        client.sign_in().await
    }

    pub async fn sign_in_silent(&self) -> AuthResult<()> {
        let client = self.require_client()?;
        log::debug!("Attempting silent sign-in");
        client.sign_in_silent().await
    }

    pub async fn sign_out(&self) -> AuthResult<()> {
        let client = self.require_client()?;
        log::info!("👋 Signing out");
        client.sign_out().await
    }

    // Cloned out so no RefCell borrow is held across an await
    fn require_client(&self) -> AuthResult<Rc<dyn OidcClient>> {
        self.oidc_client().ok_or(AuthError::NotInitialized)
    }
}
