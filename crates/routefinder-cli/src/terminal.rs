//! Terminal styling and color utilities.
//!
//! This module provides ANSI escape code definitions and color detection
//! for the enhanced route output.

use std::ffi::OsStr;

/// ANSI escape codes for text styling and colors.
pub mod colors {
    /// Reset all styling.
    pub const RESET: &str = "\x1b[0m";
    /// Bold reverse green for the start tag.
    pub const TAG_START: &str = "\x1b[1;7;32m";
    /// Bold reverse yellow for intermediate hop tags.
    pub const TAG_HOP: &str = "\x1b[1;7;33m";
    /// Bold reverse magenta for the goal tag.
    pub const TAG_GOAL: &str = "\x1b[1;7;35m";
    /// Bright bold white for location names.
    pub const WHITE_BOLD: &str = "\x1b[1;97m";
    /// Gray for secondary elements (tree lines, totals).
    pub const GRAY: &str = "\x1b[90m";
    /// Green for hop distances.
    pub const GREEN: &str = "\x1b[32m";
}

/// A collection of resolved color codes, either actual ANSI sequences
/// or empty strings when color is disabled.
#[derive(Debug, Clone, Copy)]
pub struct ColorPalette {
    pub reset: &'static str,
    pub tag_start: &'static str,
    pub tag_hop: &'static str,
    pub tag_goal: &'static str,
    pub white_bold: &'static str,
    pub gray: &'static str,
    pub green: &'static str,
}

impl ColorPalette {
    /// Create a palette with actual ANSI color codes.
    #[must_use]
    pub const fn colored() -> Self {
        Self {
            reset: colors::RESET,
            tag_start: colors::TAG_START,
            tag_hop: colors::TAG_HOP,
            tag_goal: colors::TAG_GOAL,
            white_bold: colors::WHITE_BOLD,
            gray: colors::GRAY,
            green: colors::GREEN,
        }
    }

    /// Create a palette with no colors (empty strings).
    #[must_use]
    pub const fn plain() -> Self {
        Self {
            reset: "",
            tag_start: "",
            tag_hop: "",
            tag_goal: "",
            white_bold: "",
            gray: "",
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

/// Whether ANSI colors should be emitted on this terminal.
///
/// Honors `NO_COLOR` (any value) and `TERM=dumb`.
#[must_use]
pub fn supports_color() -> bool {
    let no_color = std::env::var_os("NO_COLOR");
    let term = std::env::var("TERM").ok();
    color_allowed(no_color.as_deref(), term.as_deref())
}

fn color_allowed(no_color: Option<&OsStr>, term: Option<&str>) -> bool {
    no_color.is_none() && !term.is_some_and(|term| term.eq_ignore_ascii_case("dumb"))
}

/// Render a distance with `,` between groups of three digits.
///
/// ```
/// # use routefinder_cli::terminal::format_with_separators;
/// assert_eq!(format_with_separators(945), "945");
/// assert_eq!(format_with_separators(1560), "1,560");
/// ```
#[must_use]
pub fn format_with_separators(distance: u64) -> String {
    let digits = distance.to_string();
    let head = digits.len() % 3;
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (position, digit) in digits.chars().enumerate() {
        if position > 0 && (position + 3 - head) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}
