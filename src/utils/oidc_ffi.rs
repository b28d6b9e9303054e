// ============================================================================
// OIDC FFI - bindings to the browser authorization library
// ============================================================================
// Thin wrappers only. Lifecycle rules live in crate::auth.
// ============================================================================

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// Client object returned by `viewerShell.createOidcClient`
    #[derive(Debug, Clone)]
    pub type BrowserOidcClient;

    #[wasm_bindgen(js_namespace = viewerShell, js_name = createOidcClient, catch)]
    pub fn create_oidc_client(config: &JsValue) -> Result<BrowserOidcClient, JsValue>;

    /// Completes a redirect sign-in when the page was loaded on `redirect_uri`
    #[wasm_bindgen(js_namespace = viewerShell, js_name = handleSigninCallback, catch)]
    pub async fn handle_signin_callback(redirect_uri: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, getter = isAuthorized)]
    pub fn is_authorized(this: &BrowserOidcClient) -> bool;

    #[wasm_bindgen(method, catch, js_name = signIn)]
    pub async fn sign_in(this: &BrowserOidcClient) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, catch, js_name = signInSilent)]
    pub async fn sign_in_silent(this: &BrowserOidcClient) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, catch, js_name = signOut)]
    pub async fn sign_out(this: &BrowserOidcClient) -> Result<JsValue, JsValue>;
}

/// Best-effort text for a rejected promise
pub fn js_error_message(err: &JsValue) -> String {
    if let Some(text) = err.as_string() {
        return text;
    }
    js_sys::Reflect::get(err, &JsValue::from_str("message"))
        .ok()
        .and_then(|message| message.as_string())
        .unwrap_or_else(|| format!("{:?}", err))
}
