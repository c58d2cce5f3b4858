//! Built-in theme presets.

use ratatui::style::{Color, Modifier, Style};

use super::component::{TabTheme, Theme};

/// Available built-in theme presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemePreset {
    /// Red active tab on white inactive tabs.
    #[default]
    Default,
    /// Dark theme.
    Dark,
    /// Light theme.
    Light,
    /// Dracula theme.
    Dracula,
    /// Nord theme.
    Nord,
}

impl ThemePreset {
    /// Returns all available presets.
    #[must_use]
    pub fn all() -> &'static [ThemePreset] {
        &[
            ThemePreset::Default,
            ThemePreset::Dark,
            ThemePreset::Light,
            ThemePreset::Dracula,
            ThemePreset::Nord,
        ]
    }

    /// Returns the preset name as a string.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            ThemePreset::Default => "default",
            ThemePreset::Dark => "dark",
            ThemePreset::Light => "light",
            ThemePreset::Dracula => "dracula",
            ThemePreset::Nord => "nord",
        }
    }

    /// Creates a Theme from this preset.
    #[must_use]
    pub fn to_theme(&self) -> Theme {
        match self {
            ThemePreset::Default => Theme::default(),
            ThemePreset::Dark => create_dark_theme(),
            ThemePreset::Light => create_light_theme(),
            ThemePreset::Dracula => create_dracula_theme(),
            ThemePreset::Nord => create_nord_theme(),
        }
    }

    /// Try to parse a preset from a string.
    #[must_use]
    pub fn from_name(name: &str) -> Option<ThemePreset> {
        match name.trim().to_lowercase().as_str() {
            "default" => Some(ThemePreset::Default),
            "dark" => Some(ThemePreset::Dark),
            "light" => Some(ThemePreset::Light),
            "dracula" => Some(ThemePreset::Dracula),
            "nord" => Some(ThemePreset::Nord),
            _ => None,
        }
    }
}

fn create_dark_theme() -> Theme {
    Theme {
        name: "dark".to_string(),
        tabs: TabTheme {
            active: Style::default()
                .fg(Color::White)
                .bg(Color::Rgb(30, 30, 30))
                .add_modifier(Modifier::BOLD),
            inactive: Style::default()
                .fg(Color::Rgb(128, 128, 128))
                .bg(Color::Rgb(45, 45, 45)),
        },
        border: Style::default().fg(Color::DarkGray),
        title: Style::default().fg(Color::Cyan),
    }
}

fn create_light_theme() -> Theme {
    Theme {
        name: "light".to_string(),
        tabs: TabTheme {
            active: Style::default()
                .fg(Color::Rgb(30, 30, 30))
                .bg(Color::Rgb(255, 255, 255))
                .add_modifier(Modifier::BOLD),
            inactive: Style::default()
                .fg(Color::Rgb(100, 100, 100))
                .bg(Color::Rgb(236, 236, 236)),
        },
        border: Style::default().fg(Color::Rgb(200, 200, 200)),
        title: Style::default().fg(Color::Rgb(0, 122, 204)),
    }
}

fn create_dracula_theme() -> Theme {
    let bg = Color::Rgb(40, 42, 54);
    let fg = Color::Rgb(248, 248, 242);
    let comment = Color::Rgb(98, 114, 164);
    let purple = Color::Rgb(189, 147, 249);

    Theme {
        name: "dracula".to_string(),
        tabs: TabTheme {
            active: Style::default().fg(fg).bg(bg).add_modifier(Modifier::BOLD),
            inactive: Style::default().fg(comment).bg(Color::Rgb(50, 52, 64)),
        },
        border: Style::default().fg(comment),
        title: Style::default().fg(purple),
    }
}

fn create_nord_theme() -> Theme {
    let polar_night = Color::Rgb(46, 52, 64);
    let snow_storm = Color::Rgb(236, 239, 244);
    let frost = Color::Rgb(136, 192, 208);
    let comment = Color::Rgb(76, 86, 106);

    Theme {
        name: "nord".to_string(),
        tabs: TabTheme {
            active: Style::default()
                .fg(snow_storm)
                .bg(polar_night)
                .add_modifier(Modifier::BOLD),
            inactive: Style::default().fg(comment).bg(Color::Rgb(59, 66, 82)),
        },
        border: Style::default().fg(comment),
        title: Style::default().fg(frost),
    }
}
