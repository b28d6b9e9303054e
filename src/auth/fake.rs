// In-memory OIDC provider for tests

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use async_trait::async_trait;
use wasm_bindgen::JsValue;

use super::{OidcClient, OidcProvider};
use crate::config::OidcConfig;
use crate::error::{AuthError, AuthResult};

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub enum Outcome {
    #[default]
    Succeed,
    Fail(&'static str),
}

#[derive(Default)]
struct Script {
    callback: Cell<Outcome>,
    sign_in: Cell<Outcome>,
    silent: Cell<Outcome>,
    sign_out: Cell<Outcome>,
}

#[derive(Default)]
pub struct FakeOidcProvider {
    script: Rc<Script>,
    authorized: Rc<Cell<bool>>,
    callbacks: RefCell<Vec<String>>,
    configs: RefCell<Vec<OidcConfig>>,
}

impl FakeOidcProvider {
    pub fn set_callback(&self, outcome: Outcome) {
        self.script.callback.set(outcome);
    }

    pub fn set_sign_in(&self, outcome: Outcome) {
        self.script.sign_in.set(outcome);
    }

    pub fn set_silent(&self, outcome: Outcome) {
        self.script.silent.set(outcome);
    }

    pub fn set_sign_out(&self, outcome: Outcome) {
        self.script.sign_out.set(outcome);
    }

    /// Pretends a session already exists in the browser
    pub fn set_authorized(&self, authorized: bool) {
        self.authorized.set(authorized);
    }

    pub fn created(&self) -> usize {
        self.configs.borrow().len()
    }

    pub fn callbacks(&self) -> Vec<String> {
        self.callbacks.borrow().clone()
    }

    pub fn last_config(&self) -> Option<OidcConfig> {
        self.configs.borrow().last().cloned()
    }
}

#[async_trait(?Send)]
impl OidcProvider for FakeOidcProvider {
    async fn handle_signin_callback(&self, redirect_uri: &str) -> AuthResult<()> {
        self.callbacks.borrow_mut().push(redirect_uri.to_string());
        match self.script.callback.get() {
            Outcome::Succeed => Ok(()),
            Outcome::Fail(reason) => Err(AuthError::Callback(reason.to_string())),
        }
    }

    fn create_client(&self, config: &OidcConfig) -> AuthResult<Rc<dyn OidcClient>> {
        self.configs.borrow_mut().push(config.clone());
        Ok(Rc::new(FakeOidcClient {
            script: self.script.clone(),
            authorized: self.authorized.clone(),
        }))
    }
}

struct FakeOidcClient {
    script: Rc<Script>,
    authorized: Rc<Cell<bool>>,
}

fn run(outcome: Outcome) -> AuthResult<()> {
    match outcome {
        Outcome::Succeed => Ok(()),
        Outcome::Fail(reason) => Err(AuthError::Oidc(reason.to_string())),
    }
}

#[async_trait(?Send)]
impl OidcClient for FakeOidcClient {
    fn is_authorized(&self) -> bool {
        self.authorized.get()
    }

    async fn sign_in(&self) -> AuthResult<()> {
        run(self.script.sign_in.get())?;
        self.authorized.set(true);
        Ok(())
    }

    async fn sign_in_silent(&self) -> AuthResult<()> {
        run(self.script.silent.get())?;
        // Silent sign-in only succeeds into an existing session
        if !self.authorized.get() {
            return Err(AuthError::Oidc("login_required".to_string()));
        }
        Ok(())
    }

    async fn sign_out(&self) -> AuthResult<()> {
        run(self.script.sign_out.get())?;
        self.authorized.set(false);
        Ok(())
    }

    fn js_handle(&self) -> JsValue {
        JsValue::NULL
    }
}
