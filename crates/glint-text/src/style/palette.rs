//! Mapping between legacy hex color codes and named colors.

use serde::{Deserialize, Serialize};

use super::color::NamedColor;

/// Assigns a [`NamedColor`] to each of the sixteen hex digits `0`-`f`.
///
/// A palette is plain configuration: the markup parser uses it to decode
/// `&<digit>` codes and the legacy serializer uses it to encode colors back
/// into codes. There is no process-wide palette; whoever needs one is handed
/// one.
///
/// # Example
///
/// ```rust
/// use glint_text::{NamedColor, Palette};
///
/// let palette = Palette::legacy();
/// assert_eq!(palette.color_for('c'), Some(NamedColor::Red));
/// assert_eq!(palette.code_for(NamedColor::Red), Some('c'));
/// assert_eq!(palette.color_for('C'), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    colors: [NamedColor; 16],
}

impl Palette {
    /// The standard legacy assignment (`0` black … `c` red … `f` white).
    pub fn legacy() -> Self {
        Self {
            colors: NamedColor::ALL,
        }
    }

    /// Returns a palette with `digit` reassigned to `color`.
    ///
    /// Digits outside `0`-`f` leave the palette unchanged.
    pub fn with(mut self, digit: char, color: NamedColor) -> Self {
        if let Some(index) = digit_index(digit) {
            self.colors[index] = color;
        }
        self
    }

    /// Decodes a single lowercase hex digit into its color.
    pub fn color_for(&self, digit: char) -> Option<NamedColor> {
        digit_index(digit).map(|index| self.colors[index])
    }

    /// Encodes a color as the first hex digit assigned to it.
    pub fn code_for(&self, color: NamedColor) -> Option<char> {
        self.colors
            .iter()
            .position(|candidate| *candidate == color)
            .and_then(|index| std::char::from_digit(index as u32, 16))
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::legacy()
    }
}

fn digit_index(digit: char) -> Option<usize> {
    match digit {
        '0'..='9' | 'a'..='f' => digit.to_digit(16).map(|d| d as usize),
        _ => None,
    }
}
