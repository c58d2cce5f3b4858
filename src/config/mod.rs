//! Tab strip configuration.
//!
//! The recognized style options of a tab strip, resolved once at
//! construction time. Options can come from a theme or from a TOML file:
//!
//! ```toml
//! preset = "dark"
//!
//! [active]
//! fg = "red"
//! bg = "#1e1e1e"
//! modifiers = ["bold"]
//!
//! [inactive]
//! fg = "white"
//! ```

use std::fs;
use std::io;
use std::path::Path;

use ratatui::style::Style;
use serde::Deserialize;
use thiserror::Error;

use crate::theme::{Theme, ThemePreset, parse_color, parse_modifier};

/// Maximum size of a configuration file (64KB).
const MAX_FILE_SIZE: u64 = 64 * 1024;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File I/O error.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// TOML parsing error.
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// File too large.
    #[error("File too large (max {MAX_FILE_SIZE} bytes)")]
    FileTooLarge,

    /// Unrecognized color value.
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// Unrecognized text modifier.
    #[error("Invalid modifier: {0}")]
    InvalidModifier(String),

    /// Unknown base preset.
    #[error("Unknown preset: {0}")]
    UnknownPreset(String),
}

/// Style options recognized by a tab strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabStripConfig {
    /// Style of the active tab label.
    pub active_style: Style,
    /// Style of the inactive tab labels.
    pub inactive_style: Style,
}

impl Default for TabStripConfig {
    fn default() -> Self {
        Self::from_theme(&Theme::default())
    }
}

impl From<&Theme> for TabStripConfig {
    fn from(theme: &Theme) -> Self {
        Self::from_theme(theme)
    }
}

impl TabStripConfig {
    /// Creates a configuration with explicit styles.
    #[must_use]
    pub fn new(active_style: Style, inactive_style: Style) -> Self {
        Self {
            active_style,
            inactive_style,
        }
    }

    /// Takes the tab styles of a theme.
    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            active_style: theme.tabs.active,
            inactive_style: theme.tabs.inactive,
        }
    }

    /// Parses a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(content)?;
        file.resolve()
    }

    /// Loads a configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let metadata = fs::metadata(path)?;
        if metadata.len() > MAX_FILE_SIZE {
            return Err(ConfigError::FileTooLarge);
        }

        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!("Loaded tab strip config from {}", path.display());
        Ok(config)
    }
}

/// On-disk configuration layout.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    /// Base preset to start from.
    #[serde(default)]
    preset: Option<String>,
    #[serde(default)]
    active: StyleSpec,
    #[serde(default)]
    inactive: StyleSpec,
}

/// Overrides applied on top of a base style.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct StyleSpec {
    #[serde(default)]
    fg: Option<String>,
    #[serde(default)]
    bg: Option<String>,
    #[serde(default)]
    modifiers: Vec<String>,
}

impl ConfigFile {
    fn resolve(&self) -> Result<TabStripConfig, ConfigError> {
        let theme = match &self.preset {
            Some(name) => ThemePreset::from_name(name)
                .map(|p| p.to_theme())
                .ok_or_else(|| ConfigError::UnknownPreset(name.clone()))?,
            None => Theme::default(),
        };

        Ok(TabStripConfig {
            active_style: self.active.apply(theme.tabs.active)?,
            inactive_style: self.inactive.apply(theme.tabs.inactive)?,
        })
    }
}

impl StyleSpec {
    fn apply(&self, mut style: Style) -> Result<Style, ConfigError> {
        if let Some(fg) = &self.fg {
            style = style.fg(parse_color(fg).ok_or_else(|| ConfigError::InvalidColor(fg.clone()))?);
        }
        if let Some(bg) = &self.bg {
            style = style.bg(parse_color(bg).ok_or_else(|| ConfigError::InvalidColor(bg.clone()))?);
        }
        for name in &self.modifiers {
            let modifier =
                parse_modifier(name).ok_or_else(|| ConfigError::InvalidModifier(name.clone()))?;
            style = style.add_modifier(modifier);
        }
        Ok(style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::{Color, Modifier};

    #[test]
    fn test_default_uses_default_theme() {
        let config = TabStripConfig::default();
        assert_eq!(config.active_style, Style::default().fg(Color::Red));
        assert_eq!(config.inactive_style, Style::default().fg(Color::White));
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = TabStripConfig::from_toml_str("").unwrap();
        assert_eq!(config, TabStripConfig::default());
    }

    #[test]
    fn test_overrides_apply_on_preset() {
        let config = TabStripConfig::from_toml_str(
            r##"
            preset = "dracula"

            [active]
            fg = "#ff0000"
            modifiers = ["italic"]
            "##,
        )
        .unwrap();

        let base = ThemePreset::Dracula.to_theme().tabs;
        assert_eq!(config.active_style.fg, Some(Color::Rgb(255, 0, 0)));
        assert_eq!(config.active_style.bg, base.active.bg);
        assert!(config.active_style.add_modifier.contains(Modifier::ITALIC));
        assert!(config.active_style.add_modifier.contains(Modifier::BOLD));
        assert_eq!(config.inactive_style, base.inactive);
    }

    #[test]
    fn test_invalid_color() {
        let err = TabStripConfig::from_toml_str("[inactive]\nbg = \"mauve\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidColor(ref c) if c == "mauve"));
    }

    #[test]
    fn test_invalid_modifier() {
        let err = TabStripConfig::from_toml_str("[active]\nmodifiers = [\"wavy\"]\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidModifier(ref m) if m == "wavy"));
    }

    #[test]
    fn test_unknown_preset() {
        let err = TabStripConfig::from_toml_str("preset = \"solarized\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::UnknownPreset(_)));
    }

    #[test]
    fn test_unknown_field_is_parse_error() {
        let err = TabStripConfig::from_toml_str("[active]\ncolour = \"red\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
