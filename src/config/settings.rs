//! User settings and preferences for Textswap
//!
//! This module defines the `Settings` struct that holds the user-configurable
//! startup preferences, with serde support for JSON persistence.
//!
//! Settings never carry document text or search/replace terms; those live
//! only in the running session.

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Theme Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Display theme. Exactly one variant is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Flip between Light and Dark.
    pub fn toggle(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Whether this is the dark variant.
    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// Get a display label for the theme, as shown next to the toggle.
    pub fn label(&self) -> &'static str {
        match self {
            Theme::Light => "Light Mode",
            Theme::Dark => "Dark Mode",
        }
    }

    /// Get an icon for the theme.
    pub fn icon(&self) -> &'static str {
        match self {
            Theme::Light => "☀",
            Theme::Dark => "🌙",
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Match Mode Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// How the search term is interpreted by Replace All.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// The search term is matched as plain text (metacharacters escaped)
    #[default]
    Literal,
    /// The search term is compiled as a regular expression
    Pattern,
}

impl MatchMode {
    /// Get a display label for the mode.
    pub fn label(&self) -> &'static str {
        match self {
            MatchMode::Literal => "Literal",
            MatchMode::Pattern => "Pattern",
        }
    }

    /// Get a short description of the mode.
    pub fn description(&self) -> &'static str {
        match self {
            MatchMode::Literal => "Search text is matched exactly as typed",
            MatchMode::Pattern => "Search text is treated as a regular expression",
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Window Size Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Window dimensions and position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowSize {
    /// Window width in pixels
    pub width: f32,
    /// Window height in pixels
    pub height: f32,
    /// Window X position (optional, for restoring position)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f32>,
    /// Window Y position (optional, for restoring position)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f32>,
}

impl Default for WindowSize {
    fn default() -> Self {
        Self {
            width: 720.0,
            height: 640.0,
            x: None,
            y: None,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Main Settings Struct
// ─────────────────────────────────────────────────────────────────────────────

/// User preferences applied at startup.
///
/// Serialized to JSON in the user's config directory. Every field has a
/// default, so partial files load cleanly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Theme the window opens with
    pub theme: Theme,

    /// Font size for the text area (in points)
    pub font_size: f32,

    /// How Replace All interprets the search term
    pub match_mode: MatchMode,

    /// Whether to show the statistics status bar
    pub show_stats: bool,

    /// Window size and position
    pub window_size: WindowSize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            font_size: Self::DEFAULT_FONT_SIZE,
            match_mode: MatchMode::Literal,
            show_stats: true,
            window_size: WindowSize::default(),
        }
    }
}

impl Settings {
    /// Font size used when none is configured.
    pub const DEFAULT_FONT_SIZE: f32 = 14.0;
    /// Minimum allowed font size.
    pub const MIN_FONT_SIZE: f32 = 8.0;
    /// Maximum allowed font size.
    pub const MAX_FONT_SIZE: f32 = 32.0;
    /// Minimum window width.
    pub const MIN_WINDOW_WIDTH: f32 = 400.0;
    /// Minimum window height.
    pub const MIN_WINDOW_HEIGHT: f32 = 300.0;
    /// Maximum window dimension.
    pub const MAX_WINDOW_SIZE: f32 = 10000.0;

    /// Clamp values to valid ranges. Runs after every load.
    pub fn sanitize(&mut self) {
        if !self.font_size.is_finite() {
            self.font_size = Self::DEFAULT_FONT_SIZE;
        }
        self.font_size = self
            .font_size
            .clamp(Self::MIN_FONT_SIZE, Self::MAX_FONT_SIZE);

        let defaults = WindowSize::default();
        if !self.window_size.width.is_finite() {
            self.window_size.width = defaults.width;
        }
        if !self.window_size.height.is_finite() {
            self.window_size.height = defaults.height;
        }
        self.window_size.width = self
            .window_size
            .width
            .clamp(Self::MIN_WINDOW_WIDTH, Self::MAX_WINDOW_SIZE);
        self.window_size.height = self
            .window_size
            .height
            .clamp(Self::MIN_WINDOW_HEIGHT, Self::MAX_WINDOW_SIZE);

        // Non-finite positions are dropped
        if self.window_size.x.is_some_and(|x| !x.is_finite()) {
            self.window_size.x = None;
        }
        if self.window_size.y.is_some_and(|y| !y.is_finite()) {
            self.window_size.y = None;
        }
    }

    /// Deserialize settings from JSON and sanitize them.
    pub fn from_json_sanitized(json: &str) -> Result<Self, serde_json::Error> {
        let mut settings: Settings = serde_json::from_str(json)?;
        settings.sanitize();
        Ok(settings)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.theme, Theme::Light);
        assert_eq!(settings.font_size, 14.0);
        assert_eq!(settings.match_mode, MatchMode::Literal);
        assert!(settings.show_stats);
    }

    #[test]
    fn test_theme_toggle() {
        assert_eq!(Theme::Light.toggle(), Theme::Dark);
        assert_eq!(Theme::Dark.toggle(), Theme::Light);
        assert_eq!(Theme::Light.toggle().toggle(), Theme::Light);
    }

    #[test]
    fn test_theme_labels() {
        assert_eq!(Theme::Light.label(), "Light Mode");
        assert_eq!(Theme::Dark.label(), "Dark Mode");
        assert!(Theme::Dark.is_dark());
        assert!(!Theme::Light.is_dark());
    }

    #[test]
    fn test_theme_serialization() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
        let theme: Theme = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(theme, Theme::Light);
    }

    #[test]
    fn test_theme_rejects_unknown_variant() {
        let result: Result<Theme, _> = serde_json::from_str("\"system\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_match_mode_serialization() {
        assert_eq!(
            serde_json::to_string(&MatchMode::Pattern).unwrap(),
            "\"pattern\""
        );
        let mode: MatchMode = serde_json::from_str("\"literal\"").unwrap();
        assert_eq!(mode, MatchMode::Literal);
    }

    #[test]
    fn test_settings_serialization_roundtrip() {
        let settings = Settings {
            theme: Theme::Dark,
            font_size: 18.0,
            match_mode: MatchMode::Pattern,
            show_stats: false,
            window_size: WindowSize {
                width: 900.0,
                height: 700.0,
                x: Some(10.0),
                y: Some(20.0),
            },
        };
        let json = serde_json::to_string(&settings).unwrap();
        let loaded: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(settings, loaded);
    }

    #[test]
    fn test_settings_deserialize_with_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"theme": "dark"}"#).unwrap();
        assert_eq!(settings.theme, Theme::Dark);
        assert_eq!(settings.font_size, 14.0);
        assert!(settings.show_stats);
    }

    #[test]
    fn test_settings_deserialize_empty_json() {
        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_window_size_position_skipped_when_none() {
        let json = serde_json::to_string(&WindowSize::default()).unwrap();
        assert!(!json.contains("\"x\""));
        assert!(!json.contains("\"y\""));
    }

    #[test]
    fn test_sanitize_font_size() {
        let mut settings = Settings {
            font_size: 2.0,
            ..Settings::default()
        };
        settings.sanitize();
        assert_eq!(settings.font_size, Settings::MIN_FONT_SIZE);

        settings.font_size = 200.0;
        settings.sanitize();
        assert_eq!(settings.font_size, Settings::MAX_FONT_SIZE);
    }

    #[test]
    fn test_sanitize_window_size() {
        let mut settings = Settings::default();
        settings.window_size.width = 10.0;
        settings.window_size.height = 50_000.0;
        settings.window_size.x = Some(f32::NAN);
        settings.sanitize();
        assert_eq!(settings.window_size.width, Settings::MIN_WINDOW_WIDTH);
        assert_eq!(settings.window_size.height, Settings::MAX_WINDOW_SIZE);
        assert!(settings.window_size.x.is_none());
    }

    #[test]
    fn test_from_json_sanitized() {
        let settings = Settings::from_json_sanitized(r#"{"font_size": 4.0}"#).unwrap();
        assert_eq!(settings.font_size, Settings::MIN_FONT_SIZE);
    }

    #[test]
    fn test_from_json_sanitized_invalid() {
        assert!(Settings::from_json_sanitized("{ not json").is_err());
    }
}
