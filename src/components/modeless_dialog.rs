// ============================================================================
// MODELESS DIALOG - movable, non-blocking dialog chrome
// ============================================================================
// Stacking comes from the DialogManager context; the dialog only reports
// pointer-down so it can be raised.
// ============================================================================

use yew::prelude::*;

use crate::hooks::use_dialog_manager;
use crate::state::BASE_Z_INDEX;

#[derive(Clone, PartialEq)]
pub struct DialogButton {
    pub label: AttrValue,
    pub primary: bool,
    pub on_click: Callback<()>,
}

impl DialogButton {
    pub fn ok(on_click: Callback<()>) -> Self {
        Self {
            label: AttrValue::Static("OK"),
            primary: true,
            on_click,
        }
    }
}

/// Title-bar drag in progress
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DragState {
    pointer_origin: (i32, i32),
    offset_origin: (i32, i32),
}

impl DragState {
    pub fn new(pointer: (i32, i32), offset: (i32, i32)) -> Self {
        Self {
            pointer_origin: pointer,
            offset_origin: offset,
        }
    }

    pub fn offset_at(&self, pointer: (i32, i32)) -> (i32, i32) {
        (
            self.offset_origin.0 + pointer.0 - self.pointer_origin.0,
            self.offset_origin.1 + pointer.1 - self.pointer_origin.1,
        )
    }
}

#[derive(Properties, PartialEq)]
pub struct ModelessDialogProps {
    pub id: AttrValue,
    pub title: AttrValue,
    #[prop_or(450)]
    pub width: u32,
    #[prop_or(220)]
    pub height: u32,
    #[prop_or(true)]
    pub movable: bool,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub buttons: Vec<DialogButton>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ModelessDialog)]
pub fn modeless_dialog(props: &ModelessDialogProps) -> Html {
    let manager = use_dialog_manager();
    let offset = use_state(|| (0, 0));
    let drag = use_mut_ref(|| None::<DragState>);

    let z_index = manager
        .as_ref()
        .map(|manager| manager.dialog_z_index(&props.id))
        .unwrap_or(BASE_Z_INDEX);

    let on_pointer_down = {
        let manager = manager.clone();
        let id = props.id.clone();
        Callback::from(move |_: PointerEvent| {
            if let Some(manager) = &manager {
                manager.handle_pointer_down(&id);
            }
        })
    };

    let on_title_pointer_down = {
        let drag = drag.clone();
        let offset = offset.clone();
        let movable = props.movable;
        Callback::from(move |e: PointerEvent| {
            if movable && e.button() == 0 {
                *drag.borrow_mut() = Some(DragState::new((e.client_x(), e.client_y()), *offset));
            }
        })
    };

    let on_pointer_move = {
        let drag = drag.clone();
        let offset = offset.clone();
        Callback::from(move |e: PointerEvent| {
            if let Some(state) = *drag.borrow() {
                offset.set(state.offset_at((e.client_x(), e.client_y())));
            }
        })
    };

    let end_drag = {
        let drag = drag.clone();
        Callback::from(move |_: PointerEvent| {
            drag.borrow_mut().take();
        })
    };

    let on_key_down = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                e.stop_propagation();
                on_close.emit(());
            }
        })
    };

    let close_click = props.on_close.reform(|_: MouseEvent| ());

    let (x, y) = *offset;
    let style = format!(
        "z-index: {}; width: {}px; height: {}px; transform: translate({}px, {}px);",
        z_index, props.width, props.height, x, y
    );
    let title_class = if props.movable {
        "dialog-title movable"
    } else {
        "dialog-title"
    };

    html! {
        <div
            class="modeless-dialog"
            role="dialog"
            aria-modal="false"
            tabindex="-1"
            data-dialog-id={props.id.clone()}
            {style}
            onpointerdown={on_pointer_down}
            onpointermove={on_pointer_move}
            onpointerup={end_drag.clone()}
            onpointerleave={end_drag}
            onkeydown={on_key_down}
        >
            <div class={title_class} onpointerdown={on_title_pointer_down}>
                <span>{props.title.clone()}</span>
                <button class="dialog-close" aria-label="Close" onclick={close_click}>{"✕"}</button>
            </div>
            <div class="dialog-content">
                { for props.children.iter() }
            </div>
            if !props.buttons.is_empty() {
                <div class="dialog-buttons">
                    { for props.buttons.iter().map(|button| html! {
                        <button
                            class={classes!("dialog-button", button.primary.then_some("primary"))}
                            onclick={button.on_click.reform(|_: MouseEvent| ())}
                        >
                            {button.label.clone()}
                        </button>
                    }) }
                </div>
            }
        </div>
    }
}
