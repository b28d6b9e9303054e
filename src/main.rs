mod auth;
mod components;
mod config;
mod error;
mod hooks;
mod state;
mod utils;
mod viewmodels;

use std::rc::Rc;

use auth::{AuthorizationClient, BrowserOidcProvider};
use components::{App, AppProps};
use config::CONFIG;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("🚀 iModel viewer shell starting...");

    let config = CONFIG.clone();
    let client = Rc::new(AuthorizationClient::new(
        Rc::new(BrowserOidcProvider),
        config.oidc.clone(),
    ));

    yew::Renderer::<App>::with_props(AppProps { client, config }).render();
}
