// ============================================================================
// AUTH - Shared OIDC authorization client
// ============================================================================

pub mod browser;
pub mod client;

#[cfg(test)]
pub mod fake;

use std::rc::Rc;

use async_trait::async_trait;
use wasm_bindgen::JsValue;

use crate::config::OidcConfig;
use crate::error::AuthResult;

pub use browser::BrowserOidcProvider;
pub use client::AuthorizationClient;

/// One configured OIDC client
#[async_trait(?Send)]
pub trait OidcClient {
    fn is_authorized(&self) -> bool;

    async fn sign_in(&self) -> AuthResult<()>;

    /// Restores an existing session without user interaction
    async fn sign_in_silent(&self) -> AuthResult<()>;

    async fn sign_out(&self) -> AuthResult<()>;

    /// Object handed to the viewer widget for token acquisition
    fn js_handle(&self) -> JsValue;
}

/// Builds clients and finishes redirect-based sign-ins
#[async_trait(?Send)]
pub trait OidcProvider {
    async fn handle_signin_callback(&self, redirect_uri: &str) -> AuthResult<()>;

    fn create_client(&self, config: &OidcConfig) -> AuthResult<Rc<dyn OidcClient>>;
}
