//! egui Visuals for the light and dark palettes
//!
//! Both variants share one builder: egui's own light or dark defaults are
//! taken as the base and every color the app cares about is overridden from
//! the `ThemeColors` palette.

use eframe::egui::{self, Color32, Rounding, Stroke, Visuals};

use super::ThemeColors;

/// Corner radius for widgets.
const WIDGET_ROUNDING: f32 = 4.0;

/// Corner radius for windows and dialogs.
const WINDOW_ROUNDING: f32 = 8.0;

/// Build egui Visuals from a palette.
pub fn create_visuals(colors: &ThemeColors) -> Visuals {
    let dark = colors.is_dark();
    let mut visuals = if dark {
        Visuals::dark()
    } else {
        Visuals::light()
    };

    // ─────────────────────────────────────────────────────────────────────────
    // Backgrounds
    // ─────────────────────────────────────────────────────────────────────────
    visuals.panel_fill = colors.base.background;
    visuals.window_fill = colors.base.background_secondary;
    visuals.extreme_bg_color = colors.base.background_tertiary;
    visuals.faint_bg_color = colors.base.background_secondary;

    // ─────────────────────────────────────────────────────────────────────────
    // Text & Selection
    // ─────────────────────────────────────────────────────────────────────────
    visuals.override_text_color = None;
    visuals.warn_fg_color = colors.ui.warning;
    visuals.error_fg_color = colors.ui.error;
    visuals.hyperlink_color = colors.ui.accent;
    visuals.selection.bg_fill = colors.base.selected;
    visuals.selection.stroke = Stroke::new(1.0, colors.ui.accent);

    // ─────────────────────────────────────────────────────────────────────────
    // Widgets
    // ─────────────────────────────────────────────────────────────────────────
    let rounding = Rounding::same(WIDGET_ROUNDING);

    let w = &mut visuals.widgets;
    w.noninteractive.bg_fill = colors.base.background_secondary;
    w.noninteractive.weak_bg_fill = colors.base.background_tertiary;
    w.noninteractive.bg_stroke = Stroke::new(1.0, colors.base.border_subtle);
    w.noninteractive.fg_stroke = Stroke::new(1.0, colors.text.primary);
    w.noninteractive.rounding = rounding;

    w.inactive.bg_fill = colors.base.background_secondary;
    w.inactive.weak_bg_fill = colors.base.background_tertiary;
    w.inactive.bg_stroke = Stroke::new(1.0, colors.base.border);
    w.inactive.fg_stroke = Stroke::new(1.0, colors.text.secondary);
    w.inactive.rounding = rounding;

    w.hovered.bg_fill = colors.base.hover;
    w.hovered.weak_bg_fill = colors.base.hover;
    w.hovered.bg_stroke = Stroke::new(1.0, colors.ui.accent);
    w.hovered.fg_stroke = Stroke::new(1.5, colors.text.primary);
    w.hovered.rounding = rounding;

    w.active.bg_fill = colors.ui.accent;
    w.active.weak_bg_fill = colors.base.selected;
    w.active.bg_stroke = Stroke::new(1.0, colors.ui.accent_hover);
    w.active.fg_stroke = Stroke::new(2.0, Color32::WHITE);
    w.active.rounding = rounding;

    w.open.bg_fill = colors.base.selected;
    w.open.weak_bg_fill = colors.base.selected;
    w.open.bg_stroke = Stroke::new(1.0, colors.ui.accent);
    w.open.fg_stroke = Stroke::new(1.0, colors.text.primary);
    w.open.rounding = rounding;

    // ─────────────────────────────────────────────────────────────────────────
    // Windows (modal dialogs)
    // ─────────────────────────────────────────────────────────────────────────
    visuals.window_rounding = Rounding::same(WINDOW_ROUNDING);
    visuals.window_stroke = Stroke::new(1.0, colors.base.border);
    visuals.window_shadow = egui::epaint::Shadow {
        offset: egui::vec2(0.0, 2.0),
        blur: 8.0,
        spread: 0.0,
        color: Color32::from_black_alpha(if dark { 60 } else { 25 }),
    };
    visuals.interact_cursor = Some(egui::CursorIcon::PointingHand);

    visuals.dark_mode = dark;
    visuals
}
