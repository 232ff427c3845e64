//! Parser configuration.

use glint_text::Palette;
use serde::Deserialize;

/// Characters and palette used by [`MarkupParser`](crate::MarkupParser).
///
/// Every field has a default, so a partial configuration deserializes:
///
/// ```rust
/// use glint_markup::MarkupConfig;
///
/// let config: MarkupConfig = serde_json::from_str(r#"{ "control": "§" }"#).unwrap();
/// assert_eq!(config.control, '§');
/// assert_eq!(config.escape, '\\');
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MarkupConfig {
    /// Introduces a format code. Defaults to `&`.
    pub control: char,
    /// Makes the next character literal. Defaults to `\`.
    pub escape: char,
    /// Decodes `<control><hex digit>` color codes.
    pub palette: Palette,
}

impl MarkupConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn control(mut self, control: char) -> Self {
        self.control = control;
        self
    }

    pub fn escape(mut self, escape: char) -> Self {
        self.escape = escape;
        self
    }

    pub fn palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }
}

impl Default for MarkupConfig {
    fn default() -> Self {
        Self {
            control: '&',
            escape: '\\',
            palette: Palette::legacy(),
        }
    }
}
