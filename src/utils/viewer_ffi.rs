// ============================================================================
// VIEWER FFI - bindings to the embedded 3D viewer widget
// ============================================================================

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// Renders the viewer widget into the element with id `container_id`
    #[wasm_bindgen(js_namespace = viewerShell, js_name = mountViewer, catch)]
    pub fn mount_viewer(
        container_id: &str,
        options: &JsValue,
        oidc_client: &JsValue,
    ) -> Result<(), JsValue>;

    #[wasm_bindgen(js_namespace = viewerShell, js_name = unmountViewer)]
    pub fn unmount_viewer(container_id: &str);
}
