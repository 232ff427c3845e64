//! The legacy markup parser.
//!
//! # Grammar
//!
//! With the default configuration (`&` control, `\` escape):
//!
//! | Input | Effect |
//! |-------|--------|
//! | any other character | appended to the current segment |
//! | `\x` | appends `x` literally; a trailing `\` is kept as is |
//! | `&r` | closes the current segment, then resets the running style |
//! | `&0`..`&f` | closes the current segment, then sets a palette color |
//! | `&#rrggbb` | closes the current segment, then sets a true color |
//! | `&l` `&o` `&n` `&m` `&k` | turns on bold, italic, underline, strikethrough or obfuscated |
//!
//! A segment is closed only when it has text. Closing a segment snapshots
//! the running style onto it; a color code that closes a segment also
//! starts the next one from an empty style, so `&lA&cB` gives a bold `A`
//! and a red, not bold, `B`. Format codes never close a segment and apply
//! to the whole segment they appear in.

use std::iter::Enumerate;
use std::str::Chars;

use glint_text::{Component, Compound, Flag, Style, TextColor, TrueColor};

use crate::config::MarkupConfig;
use crate::error::MarkupError;

type Cursor<'s> = Enumerate<Chars<'s>>;

/// Parses markup into a [`Compound`] of styled literal segments.
///
/// # Example
///
/// ```rust
/// use glint_markup::{MarkupConfig, MarkupParser};
/// use glint_text::{NamedColor, TextColor};
///
/// let parser = MarkupParser::new(MarkupConfig::default());
/// let compound = parser.parse("&c&lHi &rBye").unwrap();
///
/// let hi = &compound.children()[0];
/// assert_eq!(hi.style().color(), Some(&TextColor::Named(NamedColor::Red)));
/// assert_eq!(hi.style().bold(), Some(true));
/// assert!(compound.children()[1].style().is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MarkupParser {
    config: MarkupConfig,
}

impl MarkupParser {
    pub fn new(config: MarkupConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MarkupConfig {
        &self.config
    }

    /// Parses `input`.
    ///
    /// On error nothing is returned but the error; there is no partial tree.
    pub fn parse(&self, input: &str) -> Result<Compound, MarkupError> {
        let mut cursor: Cursor<'_> = input.chars().enumerate();
        let mut segments = Segments::default();

        while let Some((position, c)) = cursor.next() {
            if c == self.config.escape {
                match cursor.next() {
                    Some((_, escaped)) => segments.buffer.push(escaped),
                    None => segments.buffer.push(c),
                }
                continue;
            }

            if c != self.config.control {
                segments.buffer.push(c);
                continue;
            }

            let Some((code_position, code)) = cursor.next() else {
                return Err(MarkupError::DanglingControl {
                    position,
                    control: c,
                });
            };

            match code {
                'r' => {
                    segments.flush();
                    segments.style = Style::new();
                }
                '#' => {
                    let color = read_true_color(&mut cursor, code_position)?;
                    segments.change_color(color.into());
                }
                _ => {
                    if let Some(color) = self.config.palette.color_for(code) {
                        segments.change_color(color.into());
                    } else if let Some(flag) = Flag::from_code(code) {
                        segments.style.set_flag(flag, Some(true));
                    } else {
                        return Err(MarkupError::UnknownFormatCode {
                            position: code_position,
                            character: code,
                        });
                    }
                }
            }
        }

        segments.flush();
        log::debug!(
            "parsed {} chars of markup into {} segments",
            input.chars().count(),
            segments.root.children().len()
        );
        Ok(segments.root)
    }
}

/// Reads the six hex digits following `#`.
fn read_true_color(cursor: &mut Cursor<'_>, hash_position: usize) -> Result<TrueColor, MarkupError> {
    let mut digits = String::with_capacity(6);
    while digits.len() < 6 {
        match cursor.next() {
            Some((_, c)) if c.is_ascii_hexdigit() => digits.push(c),
            Some((position, c)) => {
                return Err(MarkupError::InvalidTrueColor { position, found: c });
            }
            None => {
                return Err(MarkupError::IncompleteTrueColor {
                    position: hash_position,
                    found: digits,
                });
            }
        }
    }
    TrueColor::from_hex(&digits).ok_or(MarkupError::IncompleteTrueColor {
        position: hash_position,
        found: digits,
    })
}

/// Parse state: finished segments, the open buffer and the running style.
#[derive(Default)]
struct Segments {
    root: Compound,
    buffer: String,
    style: Style,
}

impl Segments {
    /// Closes the open segment if it has text. Returns whether it did.
    fn flush(&mut self) -> bool {
        if self.buffer.is_empty() {
            return false;
        }
        let text = std::mem::take(&mut self.buffer);
        self.root
            .append(Component::literal(text).with_style(self.style.clone()));
        true
    }

    fn change_color(&mut self, color: TextColor) {
        if self.flush() {
            self.style = Style::new();
        }
        self.style.set_color(Some(color));
    }
}
