// ============================================================================
// DIALOG MANAGER - open / close / z-order of modeless dialogs
// ============================================================================

use yew::prelude::*;

use crate::state::{DialogAction, DialogStack};

/// Handle shared through context by `DialogLayer`
#[derive(Clone, PartialEq)]
pub struct DialogManager {
    stack: UseReducerHandle<DialogStack<Html>>,
}

impl DialogManager {
    pub fn new(stack: UseReducerHandle<DialogStack<Html>>) -> Self {
        Self { stack }
    }

    /// Opens `content` under `id`; an open `id` is raised instead
    pub fn open_dialog(&self, id: &str, content: Html) {
        self.stack.dispatch(DialogAction::Open {
            id: id.to_string(),
            content,
        });
    }

    pub fn close_dialog(&self, id: &str) {
        self.stack.dispatch(DialogAction::Close(id.to_string()));
    }

    /// Raises the dialog the pointer went down on
    pub fn handle_pointer_down(&self, id: &str) {
        self.stack.dispatch(DialogAction::BringToFront(id.to_string()));
    }

    pub fn dialog_z_index(&self, id: &str) -> i32 {
        self.stack.z_index(id)
    }
}

#[hook]
pub fn use_dialog_manager() -> Option<DialogManager> {
    let manager = use_context::<DialogManager>();
    if manager.is_none() {
        log::warn!("⚠️ use_dialog_manager called outside of a DialogLayer");
    }
    manager
}
