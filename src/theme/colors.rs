//! Color and modifier parsing.
//!
//! Turns the strings found in configuration files into ratatui values.

use ratatui::style::{Color, Modifier};

/// Parse a color string into a ratatui Color.
///
/// Supports:
/// - Hex colors: `#RRGGBB` or `#RGB`
/// - Named colors: `black`, `red`, `green`, `yellow`, `blue`, `magenta`, `cyan`, `white`
/// - Bright variants: `bright_red`, `light_red`, etc.
/// - ANSI index: `color0` through `color255`
///
/// # Examples
/// ```
/// use ratatui::style::Color;
/// use tabstrip::theme::colors::parse_color;
///
/// assert_eq!(parse_color("#ff0000"), Some(Color::Rgb(255, 0, 0)));
/// assert_eq!(parse_color("red"), Some(Color::Red));
/// assert_eq!(parse_color(""), None);
/// ```
#[must_use]
pub fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim().to_lowercase();
    if s.is_empty() {
        return None;
    }

    if s.starts_with('#') {
        return parse_hex_color(&s);
    }

    match s.as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "white" => Some(Color::White),
        "gray" | "grey" => Some(Color::Gray),
        "darkgray" | "darkgrey" | "dark_gray" | "dark_grey" => Some(Color::DarkGray),
        "lightred" | "light_red" | "bright_red" => Some(Color::LightRed),
        "lightgreen" | "light_green" | "bright_green" => Some(Color::LightGreen),
        "lightyellow" | "light_yellow" | "bright_yellow" => Some(Color::LightYellow),
        "lightblue" | "light_blue" | "bright_blue" => Some(Color::LightBlue),
        "lightmagenta" | "light_magenta" | "bright_magenta" => Some(Color::LightMagenta),
        "lightcyan" | "light_cyan" | "bright_cyan" => Some(Color::LightCyan),
        "reset" | "default" => Some(Color::Reset),
        _ => s
            .strip_prefix("color")
            .and_then(|idx| idx.parse::<u8>().ok())
            .map(Color::Indexed),
    }
}

/// Parse a hex color string (#RRGGBB or #RGB).
fn parse_hex_color(s: &str) -> Option<Color> {
    let hex = s.strip_prefix('#')?;
    if !hex.is_ascii() {
        return None;
    }

    match hex.len() {
        3 => {
            // #RGB expands to #RRGGBB
            let r = u8::from_str_radix(&hex[0..1], 16).ok()? * 17;
            let g = u8::from_str_radix(&hex[1..2], 16).ok()? * 17;
            let b = u8::from_str_radix(&hex[2..3], 16).ok()? * 17;
            Some(Color::Rgb(r, g, b))
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        }
        _ => None,
    }
}

/// Parse a text attribute name into a ratatui Modifier.
///
/// Accepts `bold`, `dim`, `italic`, `underlined` (or `underline`),
/// `slow_blink` (or `blink`), `rapid_blink`, `reversed` (or `reverse`),
/// `hidden` and `crossed_out` (or `strikethrough`).
#[must_use]
pub fn parse_modifier(s: &str) -> Option<Modifier> {
    match s.trim().to_lowercase().as_str() {
        "bold" => Some(Modifier::BOLD),
        "dim" => Some(Modifier::DIM),
        "italic" => Some(Modifier::ITALIC),
        "underlined" | "underline" => Some(Modifier::UNDERLINED),
        "slow_blink" | "blink" => Some(Modifier::SLOW_BLINK),
        "rapid_blink" => Some(Modifier::RAPID_BLINK),
        "reversed" | "reverse" => Some(Modifier::REVERSED),
        "hidden" => Some(Modifier::HIDDEN),
        "crossed_out" | "strikethrough" => Some(Modifier::CROSSED_OUT),
        _ => None,
    }
}
