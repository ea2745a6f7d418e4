//! Main application module for Textswap
//!
//! This module implements the eframe App trait. The app owns the `Session`
//! and translates panel output, dialog results and keyboard shortcuts into
//! session operations; it also keeps the egui theme in sync, shows short
//! status messages, and saves preferences on exit.

use eframe::egui::{self, Key, Modifiers};
use log::{debug, info, warn};

use crate::clipboard;
use crate::config::{save_config_silent, Settings, WindowSize};
use crate::session::{Modal, ReplaceOutcome, Session};
use crate::theme::ThemeManager;
use crate::ui::{show_clear_confirm, show_error, ConfirmResult, EditorPanel, EditorPanelOutput};

/// How long status messages stay visible, in seconds.
const TOAST_DURATION: f64 = 2.5;

/// Keyboard shortcut actions.
///
/// Detected while reading input and executed afterwards, so the input
/// closure never borrows the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyboardAction {
    /// Replace All (Ctrl+Enter)
    ReplaceAll,
    /// Ask to clear everything (Ctrl+Shift+L)
    RequestClear,
    /// Flip light/dark (Ctrl+Shift+T)
    ToggleTheme,
}

/// Consume a global shortcut from this frame's input, if one was pressed.
///
/// Consuming keeps Ctrl+Enter from also inserting a newline in the text area.
fn detect_shortcut(input: &mut egui::InputState) -> Option<KeyboardAction> {
    let command_shift = Modifiers {
        shift: true,
        ..Modifiers::COMMAND
    };

    if input.consume_key(command_shift, Key::L) {
        debug!("Keyboard shortcut: Ctrl+Shift+L (Clear)");
        return Some(KeyboardAction::RequestClear);
    }
    if input.consume_key(command_shift, Key::T) {
        debug!("Keyboard shortcut: Ctrl+Shift+T (Toggle Theme)");
        return Some(KeyboardAction::ToggleTheme);
    }
    if input.consume_key(Modifiers::COMMAND, Key::Enter) {
        debug!("Keyboard shortcut: Ctrl+Enter (Replace All)");
        return Some(KeyboardAction::ReplaceAll);
    }
    None
}

/// Status message after a successful Replace All.
fn replace_feedback(count: usize) -> String {
    format!(
        "Replaced {} occurrence{}",
        count,
        if count == 1 { "" } else { "s" }
    )
}

/// The main application struct that holds all state and implements eframe::App.
pub struct TextswapApp {
    /// Text, query, result, theme and modal
    session: Session,
    /// Preferences loaded at startup and saved on exit
    settings: Settings,
    /// Keeps egui visuals in sync with the session theme
    theme_manager: ThemeManager,
    /// Main editor panel
    panel: EditorPanel,
    /// Temporary status bar message
    toast_message: Option<String>,
    /// App time at which the toast disappears
    toast_expires_at: Option<f64>,
    /// Last known inner window size (for detecting changes)
    last_window_size: Option<egui::Vec2>,
    /// Last known window position (for detecting changes)
    last_window_pos: Option<egui::Pos2>,
    /// Application start time for timing toast messages
    start_time: std::time::Instant,
}

impl TextswapApp {
    /// Create the app and apply the saved theme to the egui context.
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings) -> Self {
        info!("Initializing Textswap");

        let mut app = Self::with_settings(settings);
        app.theme_manager
            .apply_if_needed(&cc.egui_ctx, app.session.theme());
        info!("Applied initial theme: {:?}", app.session.theme());

        app
    }

    /// Create the app state without touching any egui context.
    fn with_settings(settings: Settings) -> Self {
        let session = Session::new(settings.theme, settings.match_mode);

        Self {
            session,
            settings,
            theme_manager: ThemeManager::new(),
            panel: EditorPanel::new(),
            toast_message: None,
            toast_expires_at: None,
            last_window_size: None,
            last_window_pos: None,
            start_time: std::time::Instant::now(),
        }
    }

    /// Get elapsed time since app start in seconds.
    fn get_app_time(&self) -> f64 {
        self.start_time.elapsed().as_secs_f64()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Toast Messages
    // ─────────────────────────────────────────────────────────────────────────

    /// Show a temporary status message.
    fn show_toast(&mut self, message: impl Into<String>, current_time: f64, duration: f64) {
        self.toast_message = Some(message.into());
        self.toast_expires_at = Some(current_time + duration);
    }

    /// Clear the toast once it has expired.
    fn update_toast(&mut self, current_time: f64) {
        if let Some(expires_at) = self.toast_expires_at {
            if current_time >= expires_at {
                self.toast_message = None;
                self.toast_expires_at = None;
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Window State
    // ─────────────────────────────────────────────────────────────────────────

    /// Update window size in settings if changed.
    ///
    /// Returns `true` if the window state was updated.
    fn update_window_state(&mut self, ctx: &egui::Context) -> bool {
        let (inner, outer) = ctx.input(|i| (i.viewport().inner_rect, i.viewport().outer_rect));
        let (Some(inner), Some(outer)) = (inner, outer) else {
            return false;
        };

        let size = inner.size();
        let pos = outer.min;

        let size_changed = self
            .last_window_size
            .map(|s| (s - size).length() > 1.0)
            .unwrap_or(true);
        let pos_changed = self
            .last_window_pos
            .map(|p| (p - pos).length() > 1.0)
            .unwrap_or(true);

        if !size_changed && !pos_changed {
            return false;
        }

        self.last_window_size = Some(size);
        self.last_window_pos = Some(pos);
        self.settings.window_size = WindowSize {
            width: size.x,
            height: size.y,
            x: Some(pos.x),
            y: Some(pos.y),
        };

        debug!(
            "Window state updated: {}x{} at ({}, {})",
            size.x, size.y, pos.x, pos.y
        );
        true
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Session Operations
    // ─────────────────────────────────────────────────────────────────────────

    fn handle_replace_all(&mut self) {
        match self.session.replace_all() {
            ReplaceOutcome::Replaced(count) => {
                let time = self.get_app_time();
                self.show_toast(replace_feedback(count), time, TOAST_DURATION);
            }
            ReplaceOutcome::Rejected(err) => {
                debug!("Showing error dialog: {}", err);
            }
            ReplaceOutcome::Blocked => {}
        }
    }

    fn handle_request_clear(&mut self) {
        if self.session.request_clear() {
            debug!("Clear confirmation requested");
        }
    }

    fn handle_toggle_theme(&mut self) {
        let theme = self.session.toggle_theme();
        self.settings.theme = theme;
    }

    /// Apply the user's answer to the Clear confirmation.
    fn handle_confirm_result(&mut self, result: ConfirmResult) {
        match result {
            ConfirmResult::Confirmed => {
                if self.session.confirm_clear() {
                    self.panel.request_focus();
                    let time = self.get_app_time();
                    self.show_toast("Cleared", time, TOAST_DURATION);
                }
            }
            ConfirmResult::Cancelled => {
                self.session.cancel_clear();
            }
            ConfirmResult::None => {}
        }
    }

    /// Copy the text shown in the "Replaced Text" view.
    fn handle_copy_result(&mut self) {
        let time = self.get_app_time();
        match clipboard::copy_text(self.session.displayed_text()) {
            Ok(()) => self.show_toast("Copied to clipboard", time, TOAST_DURATION),
            Err(e) => {
                warn!("Failed to copy to clipboard: {}", e);
                self.show_toast("Copy failed", time, TOAST_DURATION);
            }
        }
    }

    fn handle_keyboard_action(&mut self, action: KeyboardAction) {
        match action {
            KeyboardAction::ReplaceAll => self.handle_replace_all(),
            KeyboardAction::RequestClear => self.handle_request_clear(),
            KeyboardAction::ToggleTheme => self.handle_toggle_theme(),
        }
    }

    /// Map one frame of panel output to session operations.
    ///
    /// Edits are applied before actions so Replace All sees the latest text.
    fn apply_panel_output(&mut self, output: EditorPanelOutput) {
        if output.is_empty() {
            return;
        }

        if let Some(text) = output.text {
            self.session.set_text(text);
        }
        if let Some(search) = output.search {
            self.session.set_search(search);
        }
        if let Some(replace) = output.replace {
            self.session.set_replace(replace);
        }
        if let Some(mode) = output.match_mode {
            self.session.set_match_mode(mode);
            self.settings.match_mode = mode;
        }

        if output.theme_toggled {
            self.handle_toggle_theme();
        }
        if output.replace_all_requested {
            self.handle_replace_all();
        }
        if output.clear_requested {
            self.handle_request_clear();
        }
        if output.copy_requested {
            self.handle_copy_result();
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Rendering
    // ─────────────────────────────────────────────────────────────────────────

    /// Render the status bar with text statistics and the current toast.
    fn render_status_bar(&self, ctx: &egui::Context) {
        if !self.settings.show_stats && self.toast_message.is_none() {
            return;
        }

        let colors = self.theme_manager.colors();

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if self.settings.show_stats {
                    let stats = self.session.stats();
                    let has_search = !self.session.search().is_empty();
                    ui.label(
                        egui::RichText::new(stats.format_compact(has_search))
                            .color(colors.text.muted),
                    )
                    .on_hover_text(format!(
                        "{} characters without spaces",
                        stats.characters_no_spaces
                    ));
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(self.session.match_mode().label())
                            .small()
                            .color(colors.text.muted),
                    );

                    if let Some(toast) = &self.toast_message {
                        ui.separator();
                        ui.label(
                            egui::RichText::new(toast)
                                .italics()
                                .color(colors.ui.success),
                        );
                    }
                });
            });
        });
    }

    /// Render the dialog matching the session's modal state.
    fn render_dialogs(&mut self, ctx: &egui::Context) {
        let colors = self.theme_manager.colors();

        match self.session.modal().clone() {
            Modal::None => {}
            Modal::ClearConfirm => {
                let result = show_clear_confirm(ctx, &colors);
                self.handle_confirm_result(result);
            }
            Modal::Error(err) => {
                let message = err.to_string();
                if show_error(ctx, &message, &colors) {
                    self.session.dismiss_error();
                }
            }
        }
    }
}

impl eframe::App for TextswapApp {
    /// Called each time the UI needs repainting.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.theme_manager.apply_if_needed(ctx, self.session.theme());

        let current_time = self.get_app_time();
        self.update_toast(current_time);

        self.update_window_state(ctx);

        let modal_before = self.session.modal().clone();

        // Shortcuts are consumed before rendering; they are ignored while a dialog is open
        if !modal_before.is_open() {
            if let Some(action) = ctx.input_mut(detect_shortcut) {
                self.handle_keyboard_action(action);
            }
        }

        self.render_status_bar(ctx);

        let colors = self.theme_manager.colors();
        let font_size = self.settings.font_size;
        let output = egui::CentralPanel::default()
            .show(ctx, |ui| {
                self.panel.show(ui, &self.session, &colors, font_size)
            })
            .inner;

        self.render_dialogs(ctx);
        self.apply_panel_output(output);

        if *self.session.modal() != modal_before {
            ctx.request_repaint();
        } else if self.toast_message.is_some() {
            ctx.request_repaint_after(std::time::Duration::from_millis(250));
        }
    }

    /// Called when the application is about to close.
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!("Application exiting");
        self.settings.theme = self.session.theme();
        save_config_silent(&self.settings);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MatchMode, Theme};

    fn app() -> TextswapApp {
        TextswapApp::with_settings(Settings::default())
    }

    fn edit(text: &str, search: &str, replace: &str) -> EditorPanelOutput {
        EditorPanelOutput {
            text: Some(text.to_string()),
            search: Some(search.to_string()),
            replace: Some(replace.to_string()),
            ..Default::default()
        }
    }

    /// Run one frame with a single key press and return the detected shortcut.
    fn shortcut_for(key: Key, modifiers: Modifiers) -> Option<KeyboardAction> {
        let ctx = egui::Context::default();
        let input = egui::RawInput {
            events: vec![egui::Event::Key {
                key,
                physical_key: None,
                pressed: true,
                repeat: false,
                modifiers,
            }],
            ..Default::default()
        };
        let mut detected = None;
        let _ = ctx.run(input, |ctx| {
            detected = ctx.input_mut(detect_shortcut);
        });
        detected
    }

    #[test]
    fn test_detect_shortcuts() {
        let command_shift = Modifiers {
            shift: true,
            ..Modifiers::COMMAND
        };
        assert_eq!(
            shortcut_for(Key::Enter, Modifiers::COMMAND),
            Some(KeyboardAction::ReplaceAll)
        );
        assert_eq!(
            shortcut_for(Key::L, command_shift),
            Some(KeyboardAction::RequestClear)
        );
        assert_eq!(
            shortcut_for(Key::T, command_shift),
            Some(KeyboardAction::ToggleTheme)
        );
    }

    #[test]
    fn test_plain_keys_are_not_shortcuts() {
        assert_eq!(shortcut_for(Key::Enter, Modifiers::NONE), None);
        assert_eq!(shortcut_for(Key::L, Modifiers::NONE), None);
    }

    #[test]
    fn test_replace_feedback() {
        assert_eq!(replace_feedback(1), "Replaced 1 occurrence");
        assert_eq!(replace_feedback(3), "Replaced 3 occurrences");
    }

    #[test]
    fn test_with_settings_uses_saved_preferences() {
        let settings = Settings {
            theme: Theme::Dark,
            match_mode: MatchMode::Pattern,
            ..Settings::default()
        };
        let app = TextswapApp::with_settings(settings);
        assert_eq!(app.session.theme(), Theme::Dark);
        assert_eq!(app.session.match_mode(), MatchMode::Pattern);
    }

    #[test]
    fn test_panel_replace_all_updates_session() {
        let mut app = app();
        app.apply_panel_output(EditorPanelOutput {
            replace_all_requested: true,
            ..edit("The Cat sat on the cat mat", "cat", "dog")
        });

        assert_eq!(app.session.text(), "The dog sat on the dog mat");
        assert_eq!(app.toast_message.as_deref(), Some("Replaced 2 occurrences"));
        assert_eq!(*app.session.modal(), Modal::None);
    }

    #[test]
    fn test_panel_replace_all_failure_opens_error() {
        let mut app = app();
        app.apply_panel_output(EditorPanelOutput {
            replace_all_requested: true,
            ..edit("Hello world", "xyz", "abc")
        });

        assert!(matches!(app.session.modal(), Modal::Error(_)));
        assert_eq!(app.session.text(), "Hello world");
        assert!(app.toast_message.is_none());
    }

    #[test]
    fn test_clear_flow_through_dialog_results() {
        let mut app = app();
        app.apply_panel_output(edit("abc", "a", "b"));

        app.handle_keyboard_action(KeyboardAction::RequestClear);
        assert_eq!(*app.session.modal(), Modal::ClearConfirm);

        app.handle_confirm_result(ConfirmResult::None);
        assert_eq!(*app.session.modal(), Modal::ClearConfirm);

        app.handle_confirm_result(ConfirmResult::Cancelled);
        assert_eq!(*app.session.modal(), Modal::None);
        assert_eq!(app.session.text(), "abc");

        app.apply_panel_output(EditorPanelOutput {
            clear_requested: true,
            ..Default::default()
        });
        app.handle_confirm_result(ConfirmResult::Confirmed);
        assert_eq!(*app.session.modal(), Modal::None);
        assert!(app.session.text().is_empty());
        assert!(app.session.search().is_empty());
        assert!(app.session.replace().is_empty());
        assert_eq!(app.toast_message.as_deref(), Some("Cleared"));
    }

    #[test]
    fn test_theme_toggle_updates_settings() {
        let mut app = app();
        app.apply_panel_output(EditorPanelOutput {
            theme_toggled: true,
            ..Default::default()
        });
        assert_eq!(app.session.theme(), Theme::Dark);
        assert_eq!(app.settings.theme, Theme::Dark);

        app.handle_keyboard_action(KeyboardAction::ToggleTheme);
        assert_eq!(app.session.theme(), Theme::Light);
        assert_eq!(app.settings.theme, Theme::Light);
    }

    #[test]
    fn test_match_mode_change_updates_settings() {
        let mut app = app();
        app.apply_panel_output(EditorPanelOutput {
            match_mode: Some(MatchMode::Pattern),
            ..Default::default()
        });
        assert_eq!(app.session.match_mode(), MatchMode::Pattern);
        assert_eq!(app.settings.match_mode, MatchMode::Pattern);
    }

    #[test]
    fn test_toast_expires() {
        let mut app = app();
        app.show_toast("Hello", 10.0, 2.0);

        app.update_toast(11.0);
        assert_eq!(app.toast_message.as_deref(), Some("Hello"));

        app.update_toast(12.0);
        assert!(app.toast_message.is_none());
        assert!(app.toast_expires_at.is_none());
    }
}
