//! Color conversion helpers.

use console::Color;
use glint_text::{NamedColor, TextColor};

/// Converts an RGB triplet to the nearest ANSI 256-color palette index.
///
/// # Example
///
/// ```rust
/// use glint_render::rgb_to_ansi256;
///
/// // Pure red maps to ANSI 196
/// assert_eq!(rgb_to_ansi256((255, 0, 0)), 196);
///
/// // Pure green maps to ANSI 46
/// assert_eq!(rgb_to_ansi256((0, 255, 0)), 46);
/// ```
pub fn rgb_to_ansi256((r, g, b): (u8, u8, u8)) -> u8 {
    if r == g && g == b {
        if r < 8 {
            16
        } else if r > 248 {
            231
        } else {
            232 + ((r as u16 - 8) * 24 / 247) as u8
        }
    } else {
        let red = (r as u16 * 5 / 255) as u8;
        let green = (g as u16 * 5 / 255) as u8;
        let blue = (b as u16 * 5 / 255) as u8;
        16 + 36 * red + 6 * green + blue
    }
}

/// Maps a named color onto the eight base ANSI colors and a brightness bit.
pub(crate) fn ansi_base(color: NamedColor) -> (Color, bool) {
    match color {
        NamedColor::Black => (Color::Black, false),
        NamedColor::DarkBlue => (Color::Blue, false),
        NamedColor::DarkGreen => (Color::Green, false),
        NamedColor::DarkAqua => (Color::Cyan, false),
        NamedColor::DarkRed => (Color::Red, false),
        NamedColor::DarkPurple => (Color::Magenta, false),
        NamedColor::Gold => (Color::Yellow, false),
        NamedColor::Gray => (Color::White, false),
        NamedColor::DarkGray => (Color::Black, true),
        NamedColor::Blue => (Color::Blue, true),
        NamedColor::Green => (Color::Green, true),
        NamedColor::Aqua => (Color::Cyan, true),
        NamedColor::Red => (Color::Red, true),
        NamedColor::Purple => (Color::Magenta, true),
        NamedColor::Yellow => (Color::Yellow, true),
        NamedColor::White => (Color::White, true),
    }
}

/// Applies `color` as the foreground of `style`.
///
/// True colors are downsampled to the 256-color palette.
pub(crate) fn apply_color(style: console::Style, color: &TextColor) -> console::Style {
    match color {
        TextColor::Named(named) => {
            let (base, bright) = ansi_base(*named);
            let style = style.fg(base);
            if bright {
                style.bright()
            } else {
                style
            }
        }
        TextColor::True(true_color) => {
            let index = rgb_to_ansi256(true_color.rgb());
            log::debug!("downsampled {} to ansi256 {}", true_color.hex(), index);
            style.fg(Color::Color256(index))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_to_ansi256_grayscale() {
        assert_eq!(rgb_to_ansi256((0, 0, 0)), 16);
        assert_eq!(rgb_to_ansi256((255, 255, 255)), 231);
        let mid = rgb_to_ansi256((128, 128, 128));
        assert!((232..=255).contains(&mid));
    }

    #[test]
    fn test_rgb_to_ansi256_color_cube() {
        assert_eq!(rgb_to_ansi256((255, 0, 0)), 196);
        assert_eq!(rgb_to_ansi256((0, 255, 0)), 46);
        assert_eq!(rgb_to_ansi256((0, 0, 255)), 21);
    }

    #[test]
    fn test_dark_and_bright_share_base() {
        assert_eq!(ansi_base(NamedColor::DarkRed), (Color::Red, false));
        assert_eq!(ansi_base(NamedColor::Red), (Color::Red, true));
        assert_eq!(ansi_base(NamedColor::DarkGray), (Color::Black, true));
    }
}
