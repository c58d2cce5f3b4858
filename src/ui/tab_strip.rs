//! Scrolling tab strip widget.
//!
//! Draws a single row of tab labels inside a bordered block. When the
//! labels do not all fit, the visible window is scrolled so the active
//! tab and as many of its left neighbours as possible stay on screen.
//!
//! Layout of a drawn row, with `┊` as separator:
//!
//! ```text
//! Home ┊ Profile ┊ Se…
//! ```
//!
//! Every label reserves its own length plus three columns for the gaps
//! around the separator that follows it.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Widget},
};
use thiserror::Error;

use crate::config::TabStripConfig;
use crate::text::{label_len, trim};
use crate::theme::Theme;

/// Glyph drawn between two adjacent labels.
pub const SEPARATOR: char = '┊';

/// Columns a label reserves beyond its own length.
const LABEL_PADDING: usize = 3;

/// Tab strip errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TabStripError {
    /// Requested tab does not exist.
    #[error("tab index {index} out of range ({len} tabs)")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of tabs.
        len: usize,
    },
}

/// Horizontal tab strip with an active tab.
///
/// Navigation clamps at both ends instead of wrapping. An empty strip
/// accepts every navigation call as a no-op and renders only its block.
#[derive(Debug, Clone, PartialEq)]
pub struct TabStrip {
    /// Tab labels in display order.
    labels: Vec<String>,
    /// Index of the active tab.
    active: usize,
    /// Style of the active label.
    active_style: Style,
    /// Style of the other labels.
    inactive_style: Style,
    /// Surrounding block.
    block: Block<'static>,
}

impl TabStrip {
    /// Creates a tab strip using the default theme.
    #[must_use]
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_config(labels, TabStripConfig::default())
    }

    /// Creates a tab strip with explicit style options.
    #[must_use]
    pub fn with_config<I, S>(labels: I, config: TabStripConfig) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
            active: 0,
            active_style: config.active_style,
            inactive_style: config.inactive_style,
            block: Block::bordered(),
        }
    }

    /// Creates a tab strip styled by a theme, block included.
    #[must_use]
    pub fn with_theme<I, S>(labels: I, theme: &Theme) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut strip = Self::with_config(labels, TabStripConfig::from_theme(theme));
        strip.block = Block::bordered()
            .border_style(theme.border)
            .title_style(theme.title);
        strip
    }

    /// Replaces the surrounding block.
    #[must_use]
    pub fn block(mut self, block: Block<'static>) -> Self {
        self.block = block;
        self
    }

    /// Sets the title of the surrounding block.
    #[must_use]
    pub fn title<T: Into<Line<'static>>>(mut self, title: T) -> Self {
        self.block = self.block.title(title);
        self
    }

    /// Sets the active tab style.
    #[must_use]
    pub fn active_style<S: Into<Style>>(mut self, style: S) -> Self {
        self.active_style = style.into();
        self
    }

    /// Sets the inactive tab style.
    #[must_use]
    pub fn inactive_style<S: Into<Style>>(mut self, style: S) -> Self {
        self.inactive_style = style.into();
        self
    }

    /// Returns the tab labels.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Returns the number of tabs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns true if there are no tabs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Returns the active tab index.
    #[must_use]
    pub fn active_index(&self) -> usize {
        self.active
    }

    /// Returns the active tab label.
    #[must_use]
    pub fn active_label(&self) -> Option<&str> {
        self.labels.get(self.active).map(String::as_str)
    }

    /// Returns the current style options.
    #[must_use]
    pub fn config(&self) -> TabStripConfig {
        TabStripConfig::new(self.active_style, self.inactive_style)
    }

    /// Returns the surrounding block.
    #[must_use]
    pub fn block_ref(&self) -> &Block<'static> {
        &self.block
    }

    /// Moves focus one tab to the left, holding at the first tab.
    pub fn focus_left(&mut self) {
        if self.active > 0 {
            self.active -= 1;
            tracing::trace!("Tab focus moved left to {}", self.active);
        }
    }

    /// Moves focus one tab to the right, holding at the last tab.
    pub fn focus_right(&mut self) {
        let Some(last) = self.labels.len().checked_sub(1) else {
            return;
        };

        if self.active < last {
            self.active += 1;
            tracing::trace!("Tab focus moved right to {}", self.active);
        } else {
            self.active = last;
        }
    }

    /// Makes `index` the active tab.
    ///
    /// # Errors
    /// Returns [`TabStripError::IndexOutOfRange`] if no such tab exists.
    pub fn select(&mut self, index: usize) -> Result<(), TabStripError> {
        if index >= self.labels.len() {
            tracing::warn!(
                "Rejected tab selection {} ({} tabs)",
                index,
                self.labels.len()
            );
            return Err(TabStripError::IndexOutOfRange {
                index,
                len: self.labels.len(),
            });
        }

        self.active = index;
        Ok(())
    }

    /// Returns the first tab drawn when `inner_width` columns are available.
    ///
    /// Walks left from the active tab, reserving each label's length plus
    /// padding, and stops at the first label that no longer fits. The
    /// active tab itself is always part of the window; if it alone does
    /// not fit it is truncated when drawn.
    #[must_use]
    pub fn window_start(&self, inner_width: usize) -> usize {
        if self.labels.is_empty() {
            return 0;
        }

        let mut total = 0;
        for i in (0..=self.active).rev() {
            total += label_len(&self.labels[i]) + LABEL_PADDING;
            if total > inner_width {
                return (i + 1).min(self.active);
            }
        }
        0
    }

    fn style_for(&self, index: usize) -> Style {
        if index == self.active {
            self.active_style
        } else {
            self.inactive_style
        }
    }
}

impl Widget for &TabStrip {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = area.intersection(buf.area);
        Widget::render(&self.block, area, buf);

        let inner = self.block.inner(area);
        if inner.is_empty() || self.labels.is_empty() {
            return;
        }

        let y = inner.y;
        let x_max = usize::from(inner.right());
        let start = self.window_start(usize::from(inner.width));
        let last = self.labels.len() - 1;
        let separator_style = Style::default().fg(Color::White);

        tracing::debug!(
            "Tab window starts at {} (active {}, width {})",
            start,
            self.active,
            inner.width
        );

        let mut x = usize::from(inner.x);
        for (i, label) in self.labels.iter().enumerate().skip(start) {
            if x < x_max {
                let remaining = x_max - x;
                buf.set_stringn(x as u16, y, trim(label, remaining), remaining, self.style_for(i));
            }

            x += 1 + label_len(label);

            if i < last && x < x_max {
                if let Some(cell) = buf.cell_mut((x as u16, y)) {
                    cell.set_char(SEPARATOR).set_style(separator_style);
                }
            }

            x += 2;

            if x > x_max {
                break;
            }
        }
    }
}

impl Widget for TabStrip {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Widget::render(&self, area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip(labels: &[&str]) -> TabStrip {
        TabStrip::new(labels.iter().copied())
    }

    #[test]
    fn test_new_defaults() {
        let tabs = strip(&["Home", "Profile"]);
        assert_eq!(tabs.active_index(), 0);
        assert_eq!(tabs.len(), 2);
        assert_eq!(tabs.active_label(), Some("Home"));
        assert_eq!(tabs.config(), TabStripConfig::default());
        assert_eq!(tabs.block_ref(), &Block::bordered());
    }

    #[test]
    fn test_empty_strip() {
        let mut tabs = TabStrip::new(Vec::<String>::new());
        assert!(tabs.is_empty());
        assert_eq!(tabs.active_label(), None);

        tabs.focus_left();
        tabs.focus_right();
        assert_eq!(tabs.active_index(), 0);
        assert_eq!(tabs.window_start(10), 0);
        assert_eq!(
            tabs.select(0),
            Err(TabStripError::IndexOutOfRange { index: 0, len: 0 })
        );
    }

    #[test]
    fn test_focus_left_holds_at_zero() {
        let mut tabs = strip(&["a", "b", "c"]);
        tabs.focus_left();
        assert_eq!(tabs.active_index(), 0);

        tabs.select(2).unwrap();
        tabs.focus_left();
        assert_eq!(tabs.active_index(), 1);
    }

    #[test]
    fn test_focus_right_holds_at_last() {
        let mut tabs = strip(&["a", "b", "c"]);
        tabs.focus_right();
        assert_eq!(tabs.active_index(), 1);
        tabs.focus_right();
        tabs.focus_right();
        assert_eq!(tabs.active_index(), 2);
    }

    #[test]
    fn test_single_tab_navigation() {
        let mut tabs = strip(&["only"]);
        tabs.focus_right();
        assert_eq!(tabs.active_index(), 0);
        tabs.focus_left();
        assert_eq!(tabs.active_index(), 0);
    }

    #[test]
    fn test_select_out_of_range_keeps_active() {
        let mut tabs = strip(&["a", "b"]);
        tabs.select(1).unwrap();
        let err = tabs.select(5).unwrap_err();
        assert_eq!(err.to_string(), "tab index 5 out of range (2 tabs)");
        assert_eq!(tabs.active_index(), 1);
    }

    #[test]
    fn test_window_start_all_fit() {
        let mut tabs = strip(&["Home", "Profile", "Settings"]);
        assert_eq!(tabs.window_start(20), 0);
        tabs.select(1).unwrap();
        // 10 + 7 = 17 fits in 20
        assert_eq!(tabs.window_start(20), 0);
    }

    #[test]
    fn test_window_start_scrolls() {
        let mut tabs = strip(&["AAAAAAAAAA", "BBBBBBBBBB", "CCCCCCCCCC"]);
        tabs.select(2).unwrap();
        assert_eq!(tabs.window_start(15), 2);
        assert_eq!(tabs.window_start(26), 1);
        assert_eq!(tabs.window_start(39), 0);
    }

    #[test]
    fn test_window_start_keeps_oversized_active() {
        let mut tabs = strip(&["a", "a-very-long-label"]);
        tabs.select(1).unwrap();
        assert_eq!(tabs.window_start(5), 1);
    }

    #[test]
    fn test_builders() {
        let tabs = strip(&["a"])
            .active_style(Style::default().fg(Color::Green))
            .inactive_style(Color::Blue)
            .block(Block::new());
        assert_eq!(tabs.config().active_style, Style::default().fg(Color::Green));
        assert_eq!(tabs.config().inactive_style, Style::default().fg(Color::Blue));
        assert_eq!(tabs.block_ref(), &Block::new());
    }

    #[test]
    fn test_with_theme_styles_block() {
        let theme = crate::theme::ThemePreset::Nord.to_theme();
        let tabs = TabStrip::with_theme(["x", "y"], &theme);
        assert_eq!(tabs.config(), TabStripConfig::from_theme(&theme));
        assert_eq!(
            tabs.block_ref(),
            &Block::bordered()
                .border_style(theme.border)
                .title_style(theme.title)
        );
    }
}
