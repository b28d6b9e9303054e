pub mod use_authorization;
pub mod use_dialog_manager;

pub use use_authorization::use_authorization;
pub use use_dialog_manager::{use_dialog_manager, DialogManager};
