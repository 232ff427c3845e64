//! Text colors: the sixteen named colors and true (RGB) colors.

use serde::{Deserialize, Serialize};

/// One of the sixteen named text colors.
///
/// The declaration order follows the legacy hex codes `0`-`f`, so
/// `NamedColor::ALL[n]` is the color the default [`Palette`](super::Palette)
/// assigns to hex digit `n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NamedColor {
    Black,
    DarkBlue,
    DarkGreen,
    DarkAqua,
    DarkRed,
    DarkPurple,
    Gold,
    Gray,
    DarkGray,
    Blue,
    Green,
    Aqua,
    Red,
    #[serde(rename = "light_purple", alias = "purple")]
    Purple,
    Yellow,
    White,
}

impl NamedColor {
    /// All named colors in legacy code order.
    pub const ALL: [NamedColor; 16] = [
        NamedColor::Black,
        NamedColor::DarkBlue,
        NamedColor::DarkGreen,
        NamedColor::DarkAqua,
        NamedColor::DarkRed,
        NamedColor::DarkPurple,
        NamedColor::Gold,
        NamedColor::Gray,
        NamedColor::DarkGray,
        NamedColor::Blue,
        NamedColor::Green,
        NamedColor::Aqua,
        NamedColor::Red,
        NamedColor::Purple,
        NamedColor::Yellow,
        NamedColor::White,
    ];

    /// Returns the display name of this color, e.g. `"dark_blue"`.
    pub fn name(self) -> &'static str {
        match self {
            NamedColor::Black => "black",
            NamedColor::DarkBlue => "dark_blue",
            NamedColor::DarkGreen => "dark_green",
            NamedColor::DarkAqua => "dark_aqua",
            NamedColor::DarkRed => "dark_red",
            NamedColor::DarkPurple => "dark_purple",
            NamedColor::Gold => "gold",
            NamedColor::Gray => "gray",
            NamedColor::DarkGray => "dark_gray",
            NamedColor::Blue => "blue",
            NamedColor::Green => "green",
            NamedColor::Aqua => "aqua",
            NamedColor::Red => "red",
            NamedColor::Purple => "purple",
            NamedColor::Yellow => "yellow",
            NamedColor::White => "white",
        }
    }

    /// Returns the name chat clients use for this color.
    ///
    /// Identical to [`name`](Self::name) except for [`NamedColor::Purple`],
    /// which chat clients call `light_purple`.
    pub fn chat_name(self) -> &'static str {
        match self {
            NamedColor::Purple => "light_purple",
            other => other.name(),
        }
    }

    /// Returns the canonical RGB value rendered for this color.
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            NamedColor::Black => (0x00, 0x00, 0x00),
            NamedColor::DarkBlue => (0x00, 0x00, 0xAA),
            NamedColor::DarkGreen => (0x00, 0xAA, 0x00),
            NamedColor::DarkAqua => (0x00, 0xAA, 0xAA),
            NamedColor::DarkRed => (0xAA, 0x00, 0x00),
            NamedColor::DarkPurple => (0xAA, 0x00, 0xAA),
            NamedColor::Gold => (0xFF, 0xAA, 0x00),
            NamedColor::Gray => (0xAA, 0xAA, 0xAA),
            NamedColor::DarkGray => (0x55, 0x55, 0x55),
            NamedColor::Blue => (0x55, 0x55, 0xFF),
            NamedColor::Green => (0x55, 0xFF, 0x55),
            NamedColor::Aqua => (0x55, 0xFF, 0xFF),
            NamedColor::Red => (0xFF, 0x55, 0x55),
            NamedColor::Purple => (0xFF, 0x55, 0xFF),
            NamedColor::Yellow => (0xFF, 0xFF, 0x55),
            NamedColor::White => (0xFF, 0xFF, 0xFF),
        }
    }

    /// Finds the named color closest to the given RGB value.
    ///
    /// Distance is plain squared euclidean distance in RGB space; ties go to
    /// the color with the lower legacy code.
    pub fn nearest((r, g, b): (u8, u8, u8)) -> NamedColor {
        let distance = |color: NamedColor| {
            let (cr, cg, cb) = color.rgb();
            let dr = r as i32 - cr as i32;
            let dg = g as i32 - cg as i32;
            let db = b as i32 - cb as i32;
            dr * dr + dg * dg + db * db
        };

        let mut best = NamedColor::Black;
        for color in NamedColor::ALL {
            if distance(color) < distance(best) {
                best = color;
            }
        }
        best
    }
}

impl std::fmt::Display for NamedColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A true (24-bit RGB) color with a display name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TrueColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    name: String,
}

impl TrueColor {
    /// Creates a true color whose display name is its `#rrggbb` hex form.
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self {
            r,
            g,
            b,
            name: format!("#{:02x}{:02x}{:02x}", r, g, b),
        }
    }

    /// Creates a true color with an explicit display name.
    pub fn named(r: u8, g: u8, b: u8, name: impl Into<String>) -> Self {
        Self {
            r,
            g,
            b,
            name: name.into(),
        }
    }

    /// Parses exactly six hex digits (no leading `#`) into a color.
    ///
    /// # Example
    ///
    /// ```rust
    /// use glint_text::TrueColor;
    ///
    /// let teal = TrueColor::from_hex("00a0a0").unwrap();
    /// assert_eq!(teal.rgb(), (0x00, 0xa0, 0xa0));
    /// assert!(TrueColor::from_hex("00a0a").is_none());
    /// ```
    pub fn from_hex(digits: &str) -> Option<Self> {
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        Some(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Returns the RGB triplet.
    pub fn rgb(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Returns the lowercase `#rrggbb` form of this color.
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Returns the display name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// The color of a piece of text: either named or true RGB.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TextColor {
    Named(NamedColor),
    True(TrueColor),
}

impl TextColor {
    /// Returns `true` for RGB colors.
    pub fn is_true(&self) -> bool {
        matches!(self, TextColor::True(_))
    }

    /// Returns the display name of the color.
    pub fn name(&self) -> &str {
        match self {
            TextColor::Named(named) => named.name(),
            TextColor::True(color) => color.name(),
        }
    }

    /// Returns the RGB value the color renders as.
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            TextColor::Named(named) => named.rgb(),
            TextColor::True(color) => color.rgb(),
        }
    }

    /// Returns this color as a named color, approximating RGB colors.
    pub fn to_named(&self) -> NamedColor {
        match self {
            TextColor::Named(named) => *named,
            TextColor::True(color) => NamedColor::nearest(color.rgb()),
        }
    }
}

impl From<NamedColor> for TextColor {
    fn from(color: NamedColor) -> Self {
        TextColor::Named(color)
    }
}

impl From<TrueColor> for TextColor {
    fn from(color: TrueColor) -> Self {
        TextColor::True(color)
    }
}

impl std::fmt::Display for TextColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
