//! Tabstrip
//!
//! A horizontal tab strip widget for ratatui that keeps the active tab
//! visible by scrolling its window of labels.
//!
//! # Architecture
//!
//! - **UI Module**: the `TabStrip` widget and its focus navigation
//! - **Theme Module**: default tab styles, presets and color parsing
//! - **Config Module**: style options, optionally loaded from TOML
//! - **Text Module**: label measurement and trimming
//! - **Logging Module**: subscriber setup for host applications
//!
//! # Usage
//!
//! ```
//! use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};
//! use tabstrip::TabStrip;
//!
//! let mut tabs = TabStrip::new(["Home", "Profile", "Settings"]);
//! tabs.focus_right();
//!
//! let area = Rect::new(0, 0, 30, 3);
//! let mut buf = Buffer::empty(area);
//! (&tabs).render(area, &mut buf);
//! assert_eq!(tabs.active_label(), Some("Profile"));
//! ```

#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_possible_truncation)]

pub mod config;
pub mod logging;
pub mod text;
pub mod theme;
pub mod ui;

// Re-export main types
pub use config::{ConfigError, TabStripConfig};
pub use theme::{TabTheme, Theme, ThemePreset};
pub use ui::{TabStrip, TabStripError};
