//! Theme management and ANSI escape sequence generation.
//!
//! Themes are TOML documents with a `name` and a `[colors]` table of hex
//! strings. Four Catppuccin variants are bundled; a custom file can be
//! supplied with the `theme_file` option.
//!
//! # Built-in Themes
//!
//! - `catppuccin-mocha` (default)
//! - `catppuccin-latte`
//! - `catppuccin-frappe`
//! - `catppuccin-macchiato`
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cdd6f4"
//! selection_fg = "#1e1e2e"
//! selection_bg = "#f5c2e7"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! search_bar_border = "#f5c2e7"
//! match_highlight_fg = "#1e1e2e"
//! match_highlight_bg = "#f9e2af"
//! empty_state_fg = "#89b4fa"
//! dialog_border = "#fab387"
//! ```

use crate::domain::{BasketError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Names accepted by [`Theme::from_name`].
pub const BUILTIN_THEMES: [&str; 4] = [
    "catppuccin-mocha",
    "catppuccin-latte",
    "catppuccin-frappe",
    "catppuccin-macchiato",
];

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

/// Hex colors for every UI element.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    pub header_fg: String,
    #[serde(default)]
    pub header_bg: Option<String>,

    pub selection_fg: String,
    pub selection_bg: String,

    pub text_normal: String,
    /// Footer, id column, placeholder text.
    pub text_dim: String,

    pub border: String,

    pub search_bar_border: String,
    pub match_highlight_fg: String,
    pub match_highlight_bg: String,

    pub empty_state_fg: String,

    /// Frame of the add dialog.
    pub dialog_border: String,
}

impl Theme {
    /// Loads a bundled theme by name.
    ///
    /// # Errors
    ///
    /// Returns [`BasketError::Theme`] for an unknown name.
    ///
    /// # Example
    ///
    /// ```rust
    /// use basket::ui::theme::Theme;
    ///
    /// let theme = Theme::from_name("catppuccin-latte").unwrap();
    /// assert_eq!(theme.name, "catppuccin-latte");
    /// assert!(Theme::from_name("solarized").is_err());
    /// ```
    pub fn from_name(name: &str) -> Result<Self> {
        let toml_str = match name {
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            "catppuccin-frappe" => include_str!("../../themes/catppuccin-frappe.toml"),
            "catppuccin-macchiato" => include_str!("../../themes/catppuccin-macchiato.toml"),
            _ => {
                return Err(BasketError::Theme(format!(
                    "unknown theme {name:?}, expected one of {BUILTIN_THEMES:?}"
                )))
            }
        };

        Self::from_toml(toml_str)
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`BasketError::Io`] if the file cannot be read and
    /// [`BasketError::Theme`] if it does not parse.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Parses a theme from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`BasketError::Theme`] on invalid syntax or missing colors.
    pub fn from_toml(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| BasketError::Theme(format!("invalid theme TOML: {e}")))
    }

    /// Parses `#rrggbb`, falling back to white on malformed input.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim().trim_start_matches('#');

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).unwrap_or(255);
        (channel(0..2), channel(2..4), channel(4..6))
    }

    /// 24-bit foreground escape for a hex color.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// 24-bit background escape for a hex color.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Catppuccin Mocha.
    ///
    /// # Panics
    ///
    /// Panics if the bundled theme fails to parse, which the tests rule out.
    fn default() -> Self {
        Self::from_name("catppuccin-mocha").expect("bundled catppuccin-mocha theme should parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn every_builtin_theme_parses() {
        for name in BUILTIN_THEMES {
            let theme = Theme::from_name(name).unwrap();
            assert_eq!(theme.name, name);
        }
    }

    #[test]
    fn unknown_name_is_a_theme_error() {
        assert!(matches!(Theme::from_name("nope"), Err(BasketError::Theme(_))));
    }

    #[test]
    fn escapes_encode_rgb() {
        assert_eq!(Theme::fg("#ff8000"), "\u{1b}[38;2;255;128;0m");
        assert_eq!(Theme::bg("000000"), "\u{1b}[48;2;0;0;0m");
    }

    #[test]
    fn malformed_hex_falls_back_to_white() {
        assert_eq!(Theme::fg("#abc"), "\u{1b}[38;2;255;255;255m");
        assert_eq!(Theme::fg("#zz0000"), "\u{1b}[38;2;255;0;0m");
    }

    #[test]
    fn from_file_reads_custom_theme() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let custom = include_str!("../../themes/catppuccin-frappe.toml").replace("catppuccin-frappe", "custom");
        file.write_all(custom.as_bytes()).unwrap();

        let theme = Theme::from_file(file.path()).unwrap();
        assert_eq!(theme.name, "custom");
        assert_eq!(theme.colors.header_bg, None);
    }

    #[test]
    fn from_file_missing_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Theme::from_file(dir.path().join("missing.toml"));
        assert!(matches!(result, Err(BasketError::Io(_))));
    }

    #[test]
    fn missing_color_is_theme_error() {
        let result = Theme::from_toml("name = \"broken\"\n[colors]\nheader_fg = \"#ffffff\"\n");
        assert!(matches!(result, Err(BasketError::Theme(_))));
    }
}
