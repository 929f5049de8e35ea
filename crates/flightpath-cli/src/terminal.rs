//! Terminal styling and color utilities.
//!
//! This module provides ANSI escape code definitions and color detection
//! for terminal output formatting.

/// ANSI escape codes for text styling and colors.
pub mod colors {
    /// Reset all styling.
    pub const RESET: &str = "\x1b[0m";

    /// Bold reverse green for ORIG tags.
    pub const TAG_ORIGIN: &str = "\x1b[1;7;32m";
    /// Bold reverse yellow for STOP tags.
    pub const TAG_STOP: &str = "\x1b[1;7;33m";
    /// Bold reverse magenta for DEST tags.
    pub const TAG_DEST: &str = "\x1b[1;7;35m";

    /// Bright bold white for emphasis (airport codes).
    pub const WHITE_BOLD: &str = "\x1b[1;97m";
    /// Gray for secondary elements.
    pub const GRAY: &str = "\x1b[90m";
    /// Cyan for distances.
    pub const CYAN: &str = "\x1b[36m";
    /// Green for prices.
    pub const GREEN: &str = "\x1b[32m";
}

/// A collection of resolved color codes, either actual ANSI sequences
/// or empty strings when color is disabled.
#[derive(Debug, Clone, Copy)]
pub struct ColorPalette {
    pub reset: &'static str,
    pub tag_origin: &'static str,
    pub tag_stop: &'static str,
    pub tag_dest: &'static str,
    pub white_bold: &'static str,
    pub gray: &'static str,
    pub cyan: &'static str,
    pub green: &'static str,
}

impl ColorPalette {
    /// Create a palette with actual ANSI color codes.
    #[must_use]
    pub const fn colored() -> Self {
        Self {
            reset: colors::RESET,
            tag_origin: colors::TAG_ORIGIN,
            tag_stop: colors::TAG_STOP,
            tag_dest: colors::TAG_DEST,
            white_bold: colors::WHITE_BOLD,
            gray: colors::GRAY,
            cyan: colors::CYAN,
            green: colors::GREEN,
        }
    }

    /// Create a palette with no colors (empty strings).
    #[must_use]
    pub const fn plain() -> Self {
        Self {
            reset: "",
            tag_origin: "",
            tag_stop: "",
            tag_dest: "",
            white_bold: "",
            gray: "",
            cyan: "",
            green: "",
        }
    }

    /// Create a palette based on terminal capabilities.
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
/// This function respects:
/// - The `NO_COLOR` environment variable (https://no-color.org/)
/// - The `TERM=dumb` convention for non-capable terminals
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

/// Format a number with thousand separators (commas).
///
/// # Examples
///
/// ```
/// # use flightpath_cli::terminal::format_with_separators;
/// assert_eq!(format_with_separators(999), "999");
/// assert_eq!(format_with_separators(1000), "1,000");
/// assert_eq!(format_with_separators(1234567), "1,234,567");
/// ```
#[must_use]
pub fn format_with_separators(n: u64) -> String {
    if n < 1000 {
        return n.to_string();
    }
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}
