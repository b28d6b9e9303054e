// ============================================================================
// DIALOG STATE - Stack of open modeless dialogs
// ============================================================================

use std::rc::Rc;

use yew::{Html, Reducible};

/// z-index of the bottom-most modeless dialog
pub const BASE_Z_INDEX: i32 = 12_000;

#[derive(Debug, Clone, PartialEq)]
pub struct DialogEntry<T> {
    pub id: String,
    pub content: T,
}

/// Open dialogs, bottom first. Ids are unique.
#[derive(Debug, Clone, PartialEq)]
pub struct DialogStack<T> {
    entries: Vec<DialogEntry<T>>,
}

impl<T> Default for DialogStack<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T> DialogStack<T> {
    /// Opens `id` on top. An already open `id` keeps its content and is
    /// only raised. Returns whether a new dialog was added.
    pub fn open(&mut self, id: &str, content: T) -> bool {
        if self.is_open(id) {
            self.bring_to_front(id);
            return false;
        }
        self.entries.push(DialogEntry {
            id: id.to_string(),
            content,
        });
        true
    }

    pub fn close(&mut self, id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }

    /// Raises `id` above every other dialog. Returns whether the order changed.
    pub fn bring_to_front(&mut self, id: &str) -> bool {
        match self.position(id) {
            Some(index) if index + 1 < self.entries.len() => {
                let entry = self.entries.remove(index);
                self.entries.push(entry);
                true
            }
            _ => false,
        }
    }

    pub fn is_open(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    /// Unknown ids get the base z-index
    pub fn z_index(&self, id: &str) -> i32 {
        self.position(id)
            .map(|index| BASE_Z_INDEX + index as i32)
            .unwrap_or(BASE_Z_INDEX)
    }

    pub fn top(&self) -> Option<&str> {
        self.entries.last().map(|entry| entry.id.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &DialogEntry<T>> {
        self.entries.iter()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == id)
    }
}

pub enum DialogAction {
    Open { id: String, content: Html },
    Close(String),
    BringToFront(String),
}

impl Reducible for DialogStack<Html> {
    type Action = DialogAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        let changed = match action {
            DialogAction::Open { id, content } => {
                let added = next.open(&id, content);
                if added {
                    log::info!("🪟 Dialog '{}' opened", id);
                }
                added || next.top() != self.top()
            }
            DialogAction::Close(id) => {
                let closed = next.close(&id);
                if closed {
                    log::info!("🪟 Dialog '{}' closed", id);
                }
                closed
            }
            DialogAction::BringToFront(id) => next.bring_to_front(&id),
        };

        // Same Rc means no re-render
        if changed {
            Rc::new(next)
        } else {
            self
        }
    }
}
