//! Modal dialogs for Textswap.
//!
//! Two dialogs exist: the Clear confirmation (Yes/No) and the error notice
//! (message + Close). Each is an egui window anchored at the centre of the
//! screen; which one is visible is decided by `session::Modal`, so the
//! functions here only draw and report what the user clicked.

use eframe::egui::{self, Key, RichText};

use crate::theme::ThemeColors;

/// What the user did with the Clear confirmation this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmResult {
    /// Dialog still open, no decision yet
    None,
    /// "Yes" clicked or Enter pressed
    Confirmed,
    /// "No" clicked or Escape pressed
    Cancelled,
}

/// Keyboard decision for the Clear confirmation.
///
/// Escape wins over Enter when both arrive in the same frame.
fn confirm_keys(enter: bool, escape: bool) -> ConfirmResult {
    if escape {
        ConfirmResult::Cancelled
    } else if enter {
        ConfirmResult::Confirmed
    } else {
        ConfirmResult::None
    }
}

/// Window frame shared by both dialogs.
fn dialog_frame(ctx: &egui::Context, colors: &ThemeColors) -> egui::Frame {
    egui::Frame::window(&ctx.style())
        .fill(colors.base.background_secondary)
        .stroke(egui::Stroke::new(1.0, colors.base.border))
        .rounding(8.0)
}

/// Show the "Confirm Clear" dialog.
pub fn show_clear_confirm(ctx: &egui::Context, colors: &ThemeColors) -> ConfirmResult {
    let mut result =
        ctx.input(|i| confirm_keys(i.key_pressed(Key::Enter), i.key_pressed(Key::Escape)));
    if result != ConfirmResult::None {
        return result;
    }

    egui::Window::new("Confirm Clear")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .frame(dialog_frame(ctx, colors))
        .show(ctx, |ui| {
            ui.set_min_width(300.0);

            ui.add_space(8.0);
            ui.label("Clear all fields?");
            ui.add_space(4.0);
            ui.label(
                RichText::new("The text, search and replace values will be emptied.")
                    .small()
                    .color(colors.text.muted),
            );
            ui.add_space(12.0);

            ui.horizontal(|ui| {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let yes_button =
                        egui::Button::new(RichText::new("Yes").color(egui::Color32::WHITE))
                            .fill(colors.ui.error);
                    if ui.add(yes_button).clicked() {
                        result = ConfirmResult::Confirmed;
                    }

                    ui.add_space(8.0);

                    if ui.button("No").clicked() {
                        result = ConfirmResult::Cancelled;
                    }
                });
            });

            ui.add_space(4.0);
        });

    result
}

/// Show the error dialog with `message`.
///
/// Returns `true` when the user closes it (Close button, Enter or Escape).
pub fn show_error(ctx: &egui::Context, message: &str, colors: &ThemeColors) -> bool {
    if ctx.input(|i| i.key_pressed(Key::Escape) || i.key_pressed(Key::Enter)) {
        return true;
    }

    let mut closed = false;

    egui::Window::new("Error")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .frame(dialog_frame(ctx, colors))
        .show(ctx, |ui| {
            ui.set_min_width(300.0);

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                ui.label(RichText::new("⚠").size(20.0).color(colors.ui.error));
                ui.label(message);
            });
            ui.add_space(12.0);

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Close").clicked() {
                    closed = true;
                }
            });

            ui.add_space(4.0);
        });

    closed
}
