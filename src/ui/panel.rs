//! Main editor panel for Textswap
//!
//! Draws the theme toggle, the text area, the search/replace inputs with
//! their buttons, and the read-only "Replaced Text" view. The panel never
//! mutates the session: it works on copies of the session's strings and
//! reports edits and clicks through `EditorPanelOutput`, which the app
//! then maps to session operations.

use eframe::egui::{self, FontId, RichText, Ui, Vec2};

use crate::config::MatchMode;
use crate::session::Session;
use crate::theme::ThemeColors;

/// Id of the main text area, used to restore focus after a clear.
const TEXT_AREA_ID: &str = "textswap_text_area";

// ─────────────────────────────────────────────────────────────────────────────
// Panel Output
// ─────────────────────────────────────────────────────────────────────────────

/// Everything the user did in the panel this frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditorPanelOutput {
    /// New text area contents, if edited
    pub text: Option<String>,
    /// New search term, if edited
    pub search: Option<String>,
    /// New replacement term, if edited
    pub replace: Option<String>,
    /// New match mode, if the pattern checkbox was flipped
    pub match_mode: Option<MatchMode>,
    /// "Replace All" clicked
    pub replace_all_requested: bool,
    /// "Clear" clicked
    pub clear_requested: bool,
    /// Theme checkbox clicked
    pub theme_toggled: bool,
    /// "Copy" clicked next to the replaced text
    pub copy_requested: bool,
}

impl EditorPanelOutput {
    /// Whether nothing happened this frame.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Editor Panel
// ─────────────────────────────────────────────────────────────────────────────

/// The single-page editor UI.
pub struct EditorPanel {
    /// Whether the text area should take keyboard focus on the next frame
    focus_text: bool,
}

impl Default for EditorPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorPanel {
    /// Create a panel that focuses the text area on its first frame.
    pub fn new() -> Self {
        Self { focus_text: true }
    }

    /// Request focus on the text area.
    pub fn request_focus(&mut self) {
        self.focus_text = true;
    }

    /// Show the panel.
    ///
    /// While a modal is open every widget is disabled, so the dialog is the
    /// only interactive element in the window.
    pub fn show(
        &mut self,
        ui: &mut Ui,
        session: &Session,
        colors: &ThemeColors,
        font_size: f32,
    ) -> EditorPanelOutput {
        let mut output = EditorPanelOutput::default();
        let enabled = !session.modal().is_open();

        ui.add_enabled_ui(enabled, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    self.show_header(ui, session, colors, &mut output);
                    ui.add_space(8.0);
                    self.show_text_area(ui, session, font_size, &mut output);
                    ui.add_space(12.0);
                    self.show_replace_controls(ui, session, colors, &mut output);
                    ui.add_space(12.0);
                    self.show_result(ui, session, colors, font_size, &mut output);
                });
        });

        output
    }

    /// Title row with the theme checkbox on the right.
    fn show_header(
        &self,
        ui: &mut Ui,
        session: &Session,
        colors: &ThemeColors,
        output: &mut EditorPanelOutput,
    ) {
        ui.horizontal(|ui| {
            ui.label(
                RichText::new("Textswap")
                    .size(18.0)
                    .strong()
                    .color(colors.text.primary),
            );

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let theme = session.theme();
                let mut dark = theme.is_dark();
                let label = format!("{} {}", theme.icon(), theme.label());
                if ui
                    .checkbox(&mut dark, label)
                    .on_hover_text("Toggle theme (Ctrl+Shift+T)")
                    .changed()
                {
                    output.theme_toggled = true;
                }
            });
        });
    }

    /// The editable document text.
    fn show_text_area(
        &mut self,
        ui: &mut Ui,
        session: &Session,
        font_size: f32,
        output: &mut EditorPanelOutput,
    ) {
        let mut text = session.text().to_string();
        let response = ui.add(
            egui::TextEdit::multiline(&mut text)
                .id(egui::Id::new(TEXT_AREA_ID))
                .hint_text("Type your text here...")
                .font(FontId::proportional(font_size))
                .desired_rows(10)
                .desired_width(f32::INFINITY),
        );

        if self.focus_text {
            response.request_focus();
            self.focus_text = false;
        }

        if response.changed() {
            output.text = Some(text);
        }
    }

    /// "String Replacement" section: inputs, match mode and buttons.
    fn show_replace_controls(
        &self,
        ui: &mut Ui,
        session: &Session,
        colors: &ThemeColors,
        output: &mut EditorPanelOutput,
    ) {
        ui.label(
            RichText::new("String Replacement")
                .size(15.0)
                .strong()
                .color(colors.text.secondary),
        );
        ui.add_space(4.0);

        let input_size = Vec2::new(240.0, 24.0);

        ui.horizontal(|ui| {
            let mut search = session.search().to_string();
            if ui
                .add_sized(
                    input_size,
                    egui::TextEdit::singleline(&mut search).hint_text("Search"),
                )
                .changed()
            {
                output.search = Some(search);
            }

            ui.label(RichText::new("→").color(colors.text.muted));

            let mut replace = session.replace().to_string();
            if ui
                .add_sized(
                    input_size,
                    egui::TextEdit::singleline(&mut replace).hint_text("Replace"),
                )
                .changed()
            {
                output.replace = Some(replace);
            }
        });

        ui.add_space(6.0);

        ui.horizontal(|ui| {
            let replace_button =
                egui::Button::new(RichText::new("Replace All").color(egui::Color32::WHITE))
                    .fill(colors.ui.accent)
                    .min_size(Vec2::new(96.0, 26.0));
            if ui
                .add(replace_button)
                .on_hover_text("Replace every occurrence, ignoring case (Ctrl+Enter)")
                .clicked()
            {
                output.replace_all_requested = true;
            }

            if ui
                .add(egui::Button::new("Clear").min_size(Vec2::new(64.0, 26.0)))
                .on_hover_text("Empty the text and both inputs (Ctrl+Shift+L)")
                .clicked()
            {
                output.clear_requested = true;
            }

            ui.add_space(12.0);

            let mode = session.match_mode();
            let mut pattern = mode == MatchMode::Pattern;
            if ui
                .checkbox(&mut pattern, MatchMode::Pattern.label())
                .on_hover_text(mode.description())
                .changed()
            {
                output.match_mode = Some(if pattern {
                    MatchMode::Pattern
                } else {
                    MatchMode::Literal
                });
            }
        });
    }

    /// Read-only view of the last result (or the text when there is none).
    fn show_result(
        &self,
        ui: &mut Ui,
        session: &Session,
        colors: &ThemeColors,
        font_size: f32,
        output: &mut EditorPanelOutput,
    ) {
        ui.horizontal(|ui| {
            ui.label(
                RichText::new("Replaced Text:")
                    .size(15.0)
                    .strong()
                    .color(colors.text.secondary),
            );
            if session.result().is_none() {
                ui.label(
                    RichText::new("(no replacement yet)")
                        .small()
                        .color(colors.text.muted),
                );
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let has_text = !session.displayed_text().is_empty();
                if ui
                    .add_enabled(has_text, egui::Button::new("📋 Copy"))
                    .on_hover_text("Copy the replaced text to the clipboard")
                    .clicked()
                {
                    output.copy_requested = true;
                }
            });
        });
        ui.add_space(4.0);

        // `&str` is an immutable text buffer: selectable and copyable, never editable.
        let mut displayed = session.displayed_text();
        ui.add(
            egui::TextEdit::multiline(&mut displayed)
                .font(FontId::proportional(font_size))
                .desired_rows(6)
                .desired_width(f32::INFINITY),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Theme;

    /// Run one headless frame of the panel and return its output.
    fn run_frame(panel: &mut EditorPanel, session: &Session) -> EditorPanelOutput {
        let ctx = egui::Context::default();
        let colors = ThemeColors::from_theme(session.theme());
        let mut output = EditorPanelOutput::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                output = panel.show(ui, session, &colors, 14.0);
            });
        });
        output
    }

    #[test]
    fn test_panel_new_requests_focus() {
        let panel = EditorPanel::new();
        assert!(panel.focus_text);
    }

    #[test]
    fn test_panel_request_focus() {
        let mut panel = EditorPanel::new();
        panel.focus_text = false;
        panel.request_focus();
        assert!(panel.focus_text);
    }

    #[test]
    fn test_output_default_is_empty() {
        assert!(EditorPanelOutput::default().is_empty());

        let output = EditorPanelOutput {
            clear_requested: true,
            ..Default::default()
        };
        assert!(!output.is_empty());
    }

    #[test]
    fn test_idle_frame_reports_nothing() {
        let mut panel = EditorPanel::new();
        let mut session = Session::new(Theme::Light, MatchMode::Literal);
        session.set_text("The Cat sat");

        let output = run_frame(&mut panel, &session);
        assert!(output.is_empty());
        assert!(!panel.focus_text);
    }

    #[test]
    fn test_idle_frame_with_modal_open() {
        let mut panel = EditorPanel::new();
        let mut session = Session::new(Theme::Dark, MatchMode::Pattern);
        assert!(session.request_clear());

        let output = run_frame(&mut panel, &session);
        assert!(output.is_empty());
    }
}
