use std::rc::Rc;

use yew::prelude::*;

use super::{DialogLayer, Header, OpenPopupButton, Viewer, ViewerOptions};
use crate::auth::AuthorizationClient;
use crate::config::AppConfig;
use crate::hooks::use_authorization;
use crate::state::SessionView;

#[derive(Properties)]
pub struct AppProps {
    pub client: Rc<AuthorizationClient>,
    pub config: AppConfig,
}

impl PartialEq for AppProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.client, &other.client) && self.config == other.config
    }
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let auth = use_authorization(props.client.clone());
    let options = ViewerOptions::from_config(&props.config);

    let body = match auth.state.view() {
        SessionView::LoggingIn => html! {
            <span class="login-status">{"Logging in...."}</span>
        },
        SessionView::Authenticated => html! {
            <>
                <OpenPopupButton />
                <Viewer client={props.client.clone()} {options} />
            </>
        },
        SessionView::Anonymous => html! {},
    };

    html! {
        <DialogLayer>
            <div class="app">
                <Header
                    logged_in={auth.state.is_authorized}
                    on_login={auth.login.clone()}
                    on_logout={auth.logout.clone()}
                />
                { body }
            </div>
        </DialogLayer>
    }
}
