//! Terminal styling and capability detection.
//!
//! This module provides ANSI escape code definitions and color detection
//! for terminal output formatting.

/// ANSI escape codes for text styling and colors.
pub mod colors {
    /// Reset all styling.
    pub const RESET: &str = "\x1b[0m";
    /// Bright bold white for emphasis (energy magnitudes).
    pub const WHITE_BOLD: &str = "\x1b[1;97m";
    /// Gray for labels and secondary text.
    pub const GRAY: &str = "\x1b[90m";
    /// Cyan for units.
    pub const CYAN: &str = "\x1b[36m";
    /// Orange (256-color) for the logo.
    pub const ORANGE: &str = "\x1b[38;5;208m";
    /// Red for errors.
    pub const RED: &str = "\x1b[31m";
}

/// A collection of resolved color codes, either actual ANSI sequences
/// or empty strings when color is disabled.
#[derive(Debug, Clone, Copy)]
pub struct ColorPalette {
    pub reset: &'static str,
    pub label: &'static str,
    pub value: &'static str,
    pub unit: &'static str,
    pub error: &'static str,
}

impl ColorPalette {
    /// Create a palette with actual ANSI color codes.
    #[must_use]
    pub const fn colored() -> Self {
        Self {
            reset: colors::RESET,
            label: colors::GRAY,
            value: colors::WHITE_BOLD,
            unit: colors::CYAN,
            error: colors::RED,
        }
    }

    /// Create a palette with no colors (empty strings).
    #[must_use]
    pub const fn plain() -> Self {
        Self {
            reset: "",
            label: "",
            value: "",
            unit: "",
            error: "",
        }
    }

    /// `colored()` when the terminal supports ANSI colors, otherwise `plain()`.
    #[must_use]
    pub fn detect() -> Self {
        if supports_color() {
            Self::colored()
        } else {
            Self::plain()
        }
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::detect()
    }
}

/// Check if the terminal supports ANSI color codes.
///
/// Respects the `NO_COLOR` environment variable (https://no-color.org/) and
/// the `TERM=dumb` convention.
#[must_use]
pub fn supports_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if let Ok(term) = std::env::var("TERM") {
        if term.eq_ignore_ascii_case("dumb") {
            return false;
        }
    }
    true
}

/// Check if the terminal supports Unicode characters.
///
/// Looks for a UTF hint in `LANG` or `LC_ALL`.
#[must_use]
pub fn supports_unicode() -> bool {
    for var in ["LANG", "LC_ALL"] {
        if let Ok(value) = std::env::var(var) {
            if value.to_uppercase().contains("UTF") {
                return true;
            }
        }
    }
    // On Windows, assume Unicode support unless TERM suggests otherwise
    #[cfg(windows)]
    {
        if let Ok(term) = std::env::var("TERM") {
            return !term.eq_ignore_ascii_case("dumb");
        }
        return true;
    }
    #[cfg(not(windows))]
    {
        false
    }
}
