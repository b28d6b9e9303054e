use std::rc::Rc;

use async_trait::async_trait;
use wasm_bindgen::JsValue;

use super::{OidcClient, OidcProvider};
use crate::config::OidcConfig;
use crate::error::{AuthError, AuthResult};
use crate::utils::oidc_ffi::{self, js_error_message, BrowserOidcClient};

/// Provider backed by the browser authorization library
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserOidcProvider;

#[async_trait(?Send)]
impl OidcProvider for BrowserOidcProvider {
    async fn handle_signin_callback(&self, redirect_uri: &str) -> AuthResult<()> {
        oidc_ffi::handle_signin_callback(redirect_uri)
            .await
            .map(|_| ())
            .map_err(|e| AuthError::Callback(js_error_message(&e)))
    }

    fn create_client(&self, config: &OidcConfig) -> AuthResult<Rc<dyn OidcClient>> {
        let js_config = serde_wasm_bindgen::to_value(config)
            .map_err(|e| AuthError::Oidc(format!("invalid configuration: {}", e)))?;
        let inner = oidc_ffi::create_oidc_client(&js_config)
            .map_err(|e| AuthError::Oidc(js_error_message(&e)))?;
        Ok(Rc::new(BrowserClient { inner }))
    }
}

struct BrowserClient {
    inner: BrowserOidcClient,
}

fn oidc_error(err: JsValue) -> AuthError {
    AuthError::Oidc(js_error_message(&err))
}

#[async_trait(?Send)]
impl OidcClient for BrowserClient {
    fn is_authorized(&self) -> bool {
        self.inner.is_authorized()
    }

    async fn sign_in(&self) -> AuthResult<()> {
        self.inner.sign_in().await.map(|_| ()).map_err(oidc_error)
    }

    async fn sign_in_silent(&self) -> AuthResult<()> {
        self.inner.sign_in_silent().await.map(|_| ()).map_err(oidc_error)
    }

    async fn sign_out(&self) -> AuthResult<()> {
        self.inner.sign_out().await.map(|_| ()).map_err(oidc_error)
    }

    fn js_handle(&self) -> JsValue {
        self.inner.clone().into()
    }
}
