//! Theme system for tab strips.
//!
//! Provides the default active/inactive tab styles, built-in presets,
//! and the color parsing used by configuration files.

pub mod colors;
pub mod component;
pub mod preset;

pub use colors::{parse_color, parse_modifier};
pub use component::{TabTheme, Theme};
pub use preset::ThemePreset;
