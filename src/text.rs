//! Text measurement and trimming helpers.
//!
//! Window accounting counts characters, while trimming respects the
//! display width of each character.

use std::borrow::Cow;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Ellipsis appended to labels cut at the right edge.
pub const ELLIPSIS: char = '…';

/// Returns the length of a label as used by the window accounting.
///
/// Wide glyphs count as a single column here.
#[must_use]
pub fn label_len(label: &str) -> usize {
    label.chars().count()
}

/// Trims `text` so it fits within `max_width` display columns.
///
/// Text that already fits is returned unchanged. Otherwise the longest
/// prefix that leaves room for [`ELLIPSIS`] is kept and the ellipsis is
/// appended.
///
/// # Examples
/// ```
/// use tabstrip::text::trim;
///
/// assert_eq!(trim("Settings", 8), "Settings");
/// assert_eq!(trim("Settings", 3), "Se…");
/// assert_eq!(trim("Settings", 0), "");
/// ```
#[must_use]
pub fn trim(text: &str, max_width: usize) -> Cow<'_, str> {
    if max_width == 0 {
        return Cow::Borrowed("");
    }
    if text.width() <= max_width {
        return Cow::Borrowed(text);
    }

    let budget = max_width - 1;
    let mut used = 0;
    let mut out = String::with_capacity(max_width + ELLIPSIS.len_utf8());
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push(ELLIPSIS);
    Cow::Owned(out)
}
