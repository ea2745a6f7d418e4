//! Theme Manager for Textswap
//!
//! Keeps the egui context's visuals in sync with the session theme. The
//! session owns the theme flag; the manager only remembers what it last
//! applied so visuals are rebuilt when the flag actually changes.

use eframe::egui::Context;
use log::debug;

use super::ThemeColors;
use crate::config::Theme;

/// Applies the session theme to the egui context.
#[derive(Debug, Clone, Default)]
pub struct ThemeManager {
    /// Theme last pushed into the context; `None` before the first frame
    applied: Option<Theme>,
}

impl ThemeManager {
    /// Create a manager that has not applied anything yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `theme` differs from what was last applied.
    pub fn needs_apply(&self, theme: Theme) -> bool {
        self.applied != Some(theme)
    }

    /// Apply `theme` to the context if it changed since the last call.
    ///
    /// Returns `true` if the visuals were replaced.
    pub fn apply_if_needed(&mut self, ctx: &Context, theme: Theme) -> bool {
        if !self.needs_apply(theme) {
            return false;
        }
        ctx.set_visuals(ThemeColors::from_theme(theme).to_visuals());
        self.applied = Some(theme);
        debug!("Applied theme: {:?}", theme);
        true
    }

    /// Palette for the theme last applied (light before the first frame).
    pub fn colors(&self) -> ThemeColors {
        ThemeColors::from_theme(self.applied.unwrap_or_default())
    }
}
