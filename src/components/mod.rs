pub mod app;
pub mod dialog_layer;
pub mod example_popup;
pub mod header;
pub mod labeled_select;
pub mod modeless_dialog;
pub mod viewer;

pub use app::{App, AppProps};
pub use dialog_layer::DialogLayer;
pub use example_popup::OpenPopupButton;
pub use header::Header;
pub use viewer::{Viewer, ViewerOptions};
