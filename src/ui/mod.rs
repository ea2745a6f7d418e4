//! UI components for Textswap
//!
//! This module contains the editor panel and the modal dialogs.

mod dialogs;
mod panel;

pub use dialogs::{show_clear_confirm, show_error, ConfirmResult};
pub use panel::{EditorPanel, EditorPanelOutput};
