use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub logged_in: bool,
    pub on_login: Callback<()>,
    pub on_logout: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let (label, onclick) = if props.logged_in {
        ("Logout", props.on_logout.reform(|_: MouseEvent| ()))
    } else {
        ("Login", props.on_login.reform(|_: MouseEvent| ()))
    };

    html! {
        <header class="app-header">
            <h1>{"iModel Viewer"}</h1>
            <button class="btn-auth" {onclick}>{label}</button>
        </header>
    }
}
