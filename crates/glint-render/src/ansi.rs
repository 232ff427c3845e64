//! Flat string adapter for terminals.

use glint_text::{Flag, SerializationContext, Style, TextSerializer};

use crate::output::OutputMode;
use crate::util::apply_color;

/// Resets all terminal attributes.
pub const ANSI_RESET: &str = "\x1b[0m";

/// Serializes component trees into ANSI-styled terminal text.
///
/// Mirrors [`LegacySerializer`](crate::LegacySerializer): a reset opens each
/// node and closes each subtree, and every node's own text is styled with
/// its combined style. In [`OutputMode::Text`] (or `Auto` without color
/// support) only the text is written.
///
/// # Example
///
/// ```rust
/// use glint_render::{AnsiSerializer, OutputMode};
/// use glint_text::{Component, NamedColor, TextSerializer};
///
/// let line = Component::literal("ok").color(NamedColor::Green);
///
/// let plain = AnsiSerializer::new(OutputMode::Text).serialize(&line);
/// assert_eq!(plain, "ok");
///
/// let styled = AnsiSerializer::new(OutputMode::Term).serialize(&line);
/// assert!(styled.starts_with("\x1b[0m"));
/// assert_ne!(styled, plain);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiSerializer {
    mode: OutputMode,
}

impl AnsiSerializer {
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    fn console_style(style: &Style) -> console::Style {
        let mut out = console::Style::new().force_styling(true);
        if let Some(color) = style.color() {
            out = apply_color(out, color);
        }
        for flag in style.enabled_flags() {
            out = match flag {
                Flag::Bold => out.bold(),
                Flag::Italic => out.italic(),
                Flag::Underline => out.underlined(),
                Flag::Strikethrough => out.strikethrough(),
                Flag::Obfuscated => out.blink(),
            };
        }
        out
    }
}

/// Per-node buffer, remembering whether escapes are written for this walk.
#[derive(Debug, Default)]
pub struct AnsiBuffer {
    text: String,
    styled: bool,
}

impl TextSerializer for AnsiSerializer {
    type Accumulator = AnsiBuffer;
    type Output = String;

    fn new_accumulator(&self) -> AnsiBuffer {
        AnsiBuffer {
            text: String::new(),
            styled: self.mode.should_use_color(),
        }
    }

    fn next(&self, ctx: &mut SerializationContext<'_, AnsiBuffer>) -> AnsiBuffer {
        AnsiBuffer {
            text: String::new(),
            styled: ctx.accumulator().map(|parent| parent.styled).unwrap_or(false),
        }
    }

    fn write(&self, ctx: &mut SerializationContext<'_, AnsiBuffer>) {
        let style = ctx.push_style();
        let text = ctx.text();
        if let Some(buffer) = ctx.accumulator_mut() {
            if !buffer.styled {
                if let Some(text) = text {
                    buffer.text.push_str(&text);
                }
                return;
            }
            buffer.text.push_str(ANSI_RESET);
            if let Some(text) = text {
                let styled = Self::console_style(&style).apply_to(text);
                buffer.text.push_str(&styled.to_string());
            }
        }
    }

    fn end(&self, ctx: &mut SerializationContext<'_, AnsiBuffer>) {
        ctx.pop_style();
        if let Some((parent, buffer)) = ctx.split_accumulators() {
            if buffer.styled {
                buffer.text.push_str(ANSI_RESET);
            }
            parent.text.push_str(&buffer.text);
        }
    }

    fn finalize(&self, ctx: SerializationContext<'_, AnsiBuffer>) -> String {
        ctx.into_root().map(|root| root.text).unwrap_or_default()
    }
}
