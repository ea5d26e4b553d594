//! Theme system for consistent UI colors across dark and light modes.
//!
//! Provides a centralized theme that detects the OS appearance and maps
//! record statuses to semantic colors.

use ratatui::style::Color;

use crate::config::ThemeMode;
use crate::models::Status;

/// Semantic color theme for the TUI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Primary color for borders, titles, and emphasis
    pub primary: Color,
    /// Accent color for highlights, selections, and focus states
    pub accent: Color,
    /// Success state color
    pub success: Color,
    /// Error state color
    pub error: Color,
    /// Warning state color
    pub warning: Color,

    /// Primary text content color
    pub text: Color,
    /// Secondary text color for labels
    pub text_secondary: Color,
    /// Muted text color for help text and dim content
    pub text_muted: Color,

    /// Main background color
    pub background: Color,
    /// Highlight/selection background color
    pub highlight_bg: Color,
    /// Surface color for panels and cards
    pub surface: Color,
}

impl Theme {
    /// Detects the OS theme and returns the appropriate theme.
    #[must_use]
    pub fn detect() -> Self {
        match dark_light::detect() {
            Ok(dark_light::Mode::Light) => Self::light(),
            // Fall back to dark theme for dark mode, unspecified, or errors
            Ok(dark_light::Mode::Dark | dark_light::Mode::Unspecified) | Err(_) => Self::dark(),
        }
    }

    /// Resolves the configured theme mode to a theme.
    #[must_use]
    pub fn from_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Auto => Self::detect(),
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    /// Dark theme for dark terminal backgrounds.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::Cyan,
            accent: Color::Yellow,
            success: Color::Green,
            error: Color::Red,
            warning: Color::Yellow,

            text: Color::White,
            text_secondary: Color::Gray,
            text_muted: Color::DarkGray,

            background: Color::Black,
            highlight_bg: Color::DarkGray,
            surface: Color::Rgb(30, 30, 30),
        }
    }

    /// Light theme for light terminal backgrounds.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::Blue,
            accent: Color::Rgb(180, 95, 6),
            success: Color::Rgb(0, 128, 0),
            error: Color::Rgb(192, 0, 0),
            warning: Color::Rgb(180, 95, 6),

            text: Color::Black,
            text_secondary: Color::Rgb(64, 64, 64),
            text_muted: Color::Rgb(128, 128, 128),

            background: Color::White,
            highlight_bg: Color::Rgb(220, 220, 220),
            surface: Color::Rgb(245, 245, 245),
        }
    }

    /// The semantic color for a record status.
    #[must_use]
    pub const fn status_color(&self, status: Status) -> Color {
        match status {
            Status::Draft => self.text_muted,
            Status::Review => self.warning,
            Status::Ready => self.success,
            Status::Exported => self.primary,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
