//! Theme System for Textswap
//!
//! This module defines the light and dark color palettes and turns them into
//! egui `Visuals`. The active variant is chosen by `config::Theme`, which
//! the session flips when the user toggles the theme.
//!
//! - `visuals.rs` - palette to egui `Visuals` conversion
//! - `manager.rs` - keeps the egui context in sync with the session theme

mod manager;
mod visuals;

pub use manager::ThemeManager;

use eframe::egui::Color32;

use crate::config::Theme;

// ─────────────────────────────────────────────────────────────────────────────
// Theme Colors
// ─────────────────────────────────────────────────────────────────────────────

/// Every color the UI uses, for one theme variant.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeColors {
    /// Backgrounds and borders
    pub base: BaseColors,
    /// Text colors
    pub text: TextColors,
    /// Accent and feedback colors
    pub ui: UiColors,
}

impl ThemeColors {
    /// Palette for the given theme.
    pub fn from_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self::light(),
            Theme::Dark => Self::dark(),
        }
    }

    /// Light palette.
    pub fn light() -> Self {
        Self {
            base: BaseColors::light(),
            text: TextColors::light(),
            ui: UiColors::light(),
        }
    }

    /// Dark palette.
    pub fn dark() -> Self {
        Self {
            base: BaseColors::dark(),
            text: TextColors::dark(),
            ui: UiColors::dark(),
        }
    }

    /// Whether this palette has a dark background.
    pub fn is_dark(&self) -> bool {
        self.base.background.r() < 128
    }

    /// Convert to egui Visuals.
    pub fn to_visuals(&self) -> eframe::egui::Visuals {
        visuals::create_visuals(self)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Base Colors
// ─────────────────────────────────────────────────────────────────────────────

/// Backgrounds and borders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaseColors {
    /// Window background
    pub background: Color32,
    /// Panels and dialogs
    pub background_secondary: Color32,
    /// Text inputs
    pub background_tertiary: Color32,
    /// Primary border color
    pub border: Color32,
    /// Dividers
    pub border_subtle: Color32,
    /// Hover state background
    pub hover: Color32,
    /// Selection background
    pub selected: Color32,
}

impl BaseColors {
    pub fn light() -> Self {
        Self {
            background: Color32::from_rgb(255, 255, 255),
            background_secondary: Color32::from_rgb(248, 248, 248),
            background_tertiary: Color32::from_rgb(242, 242, 242),
            border: Color32::from_rgb(200, 200, 200),
            border_subtle: Color32::from_rgb(230, 230, 230),
            hover: Color32::from_rgb(236, 236, 236),
            selected: Color32::from_rgb(220, 235, 250),
        }
    }

    pub fn dark() -> Self {
        Self {
            background: Color32::from_rgb(30, 30, 30),
            background_secondary: Color32::from_rgb(40, 40, 45),
            background_tertiary: Color32::from_rgb(45, 45, 45),
            border: Color32::from_rgb(70, 70, 80),
            border_subtle: Color32::from_rgb(50, 50, 50),
            hover: Color32::from_rgb(55, 55, 60),
            selected: Color32::from_rgb(50, 70, 90),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Text Colors
// ─────────────────────────────────────────────────────────────────────────────

/// Text colors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextColors {
    /// Main content
    pub primary: Color32,
    /// Labels and headings of secondary rank
    pub secondary: Color32,
    /// Hints and the status bar
    pub muted: Color32,
}

impl TextColors {
    pub fn light() -> Self {
        Self {
            primary: Color32::from_rgb(30, 30, 30),
            secondary: Color32::from_rgb(80, 80, 80),
            muted: Color32::from_rgb(120, 120, 120),
        }
    }

    pub fn dark() -> Self {
        Self {
            primary: Color32::from_rgb(220, 220, 220),
            secondary: Color32::from_rgb(180, 180, 180),
            muted: Color32::from_rgb(140, 140, 140),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// UI Colors
// ─────────────────────────────────────────────────────────────────────────────

/// Accent and feedback colors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UiColors {
    /// Buttons and active elements
    pub accent: Color32,
    /// Accent on hover
    pub accent_hover: Color32,
    /// Success feedback
    pub success: Color32,
    /// Warnings
    pub warning: Color32,
    /// Errors and destructive actions
    pub error: Color32,
}

impl UiColors {
    pub fn light() -> Self {
        Self {
            accent: Color32::from_rgb(0, 120, 212),
            accent_hover: Color32::from_rgb(0, 100, 180),
            success: Color32::from_rgb(40, 167, 69),
            warning: Color32::from_rgb(255, 193, 7),
            error: Color32::from_rgb(220, 53, 69),
        }
    }

    pub fn dark() -> Self {
        Self {
            accent: Color32::from_rgb(100, 180, 255),
            accent_hover: Color32::from_rgb(130, 200, 255),
            success: Color32::from_rgb(75, 210, 100),
            warning: Color32::from_rgb(255, 210, 50),
            error: Color32::from_rgb(255, 100, 100),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
