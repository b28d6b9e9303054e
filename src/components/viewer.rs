// ============================================================================
// VIEWER - embeds the external 3D viewer widget
// ============================================================================

use std::rc::Rc;

use serde::Serialize;
use wasm_bindgen::JsValue;
use yew::prelude::*;

use crate::auth::AuthorizationClient;
use crate::config::AppConfig;
use crate::utils::viewer_ffi::{mount_viewer, unmount_viewer};
use crate::utils::oidc_ffi::js_error_message;

pub const VIEWER_CONTAINER_ID: &str = "imodel-viewer";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewerOptions {
    pub context_id: String,
    #[serde(rename = "iModelId")]
    pub imodel_id: String,
    pub backend: BackendOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BackendOptions {
    pub buddi_region: i32,
}

impl ViewerOptions {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            context_id: config.viewer.context_id.clone(),
            imodel_id: config.viewer.imodel_id.clone(),
            backend: BackendOptions {
                buddi_region: config.buddi_region,
            },
        }
    }
}

#[derive(Properties)]
pub struct ViewerProps {
    pub client: Rc<AuthorizationClient>,
    pub options: ViewerOptions,
    #[prop_or(AttrValue::Static(VIEWER_CONTAINER_ID))]
    pub container_id: AttrValue,
}

impl PartialEq for ViewerProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.client, &other.client)
            && self.options == other.options
            && self.container_id == other.container_id
    }
}

#[function_component(Viewer)]
pub fn viewer(props: &ViewerProps) -> Html {
    {
        let client = props.client.clone();
        let container_id = props.container_id.clone();
        use_effect_with(props.options.clone(), move |options| {
            let oidc_client = client
                .oidc_client()
                .map(|client| client.js_handle())
                .unwrap_or(JsValue::UNDEFINED);

            match serde_wasm_bindgen::to_value(options) {
                Ok(js_options) => {
                    log::info!(
                        "🧊 Mounting viewer for iModel {} (context {})",
                        options.imodel_id,
                        options.context_id
                    );
                    if let Err(e) = mount_viewer(&container_id, &js_options, &oidc_client) {
                        log::error!("❌ Viewer failed to mount: {}", js_error_message(&e));
                    }
                }
                Err(e) => log::error!("❌ Invalid viewer options: {}", e),
            }

            move || unmount_viewer(&container_id)
        });
    }

    html! {
        <div id={props.container_id.clone()} class="viewer-container"></div>
    }
}
