// Bindings to the JavaScript bridge (static/bridge.js)

pub mod oidc_ffi;
pub mod viewer_ffi;
