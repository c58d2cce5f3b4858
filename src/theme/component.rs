//! Component-specific theme settings.

use ratatui::style::{Color, Style};

/// Tab strip theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabTheme {
    /// Style of the active tab label.
    pub active: Style,
    /// Style of every other tab label.
    pub inactive: Style,
}

impl Default for TabTheme {
    fn default() -> Self {
        Self {
            active: Style::default().fg(Color::Red),
            inactive: Style::default().fg(Color::White),
        }
    }
}

/// Complete theme configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Theme name.
    pub name: String,
    /// Tab strip theme.
    pub tabs: TabTheme,
    /// Border style of the surrounding block.
    pub border: Style,
    /// Title style of the surrounding block.
    pub title: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            tabs: TabTheme::default(),
            border: Style::default(),
            title: Style::default(),
        }
    }
}

impl Theme {
    /// Creates a new theme with the given name.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    /// Returns the theme name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}
