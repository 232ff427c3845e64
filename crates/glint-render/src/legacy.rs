//! Flat string adapter emitting legacy `§` format codes.
//!
//! Every node writes a reset, its combined color, one code per enabled flag
//! and then its own text. When the node's subtree is complete it writes a
//! second reset and splices its buffer into the parent's. Output therefore
//! never relies on the receiver remembering formatting across nodes.

use glint_text::{
    NamedColor, Palette, SerializationContext, Style, TextColor, TextSerializer, TrueColor,
};

/// Serializes component trees into `§`-coded strings.
///
/// # Example
///
/// ```rust
/// use glint_render::LegacySerializer;
/// use glint_text::{Component, NamedColor, TextSerializer};
///
/// let line = Component::literal("Hi").color(NamedColor::Red).bold(true);
/// assert_eq!(LegacySerializer::new().serialize(&line), "§r§c§lHi§r");
/// ```
#[derive(Debug, Clone)]
pub struct LegacySerializer {
    marker: char,
    palette: Palette,
    true_color: bool,
}

impl LegacySerializer {
    /// Creates a serializer using `§`, the legacy palette and `§x` true colors.
    pub fn new() -> Self {
        Self {
            marker: '§',
            palette: Palette::legacy(),
            true_color: true,
        }
    }

    /// Uses `marker` instead of `§` to introduce codes.
    pub fn with_marker(mut self, marker: char) -> Self {
        self.marker = marker;
        self
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Whether true colors are written as `§x` sequences.
    ///
    /// When disabled they are replaced by the nearest named color.
    pub fn true_color(mut self, enabled: bool) -> Self {
        self.true_color = enabled;
        self
    }

    pub fn marker(&self) -> char {
        self.marker
    }

    fn push_code(&self, buffer: &mut String, code: char) {
        buffer.push(self.marker);
        buffer.push(code);
    }

    fn push_style(&self, buffer: &mut String, style: &Style) {
        if let Some(color) = style.color() {
            self.push_color(buffer, color);
        }
        for flag in style.enabled_flags() {
            self.push_code(buffer, flag.code());
        }
    }

    fn push_color(&self, buffer: &mut String, color: &TextColor) {
        match color {
            TextColor::Named(named) => self.push_named(buffer, *named),
            TextColor::True(true_color) if self.true_color => self.push_true(buffer, true_color),
            TextColor::True(true_color) => {
                let nearest = NamedColor::nearest(true_color.rgb());
                log::debug!("downsampled {} to {}", true_color.hex(), nearest);
                self.push_named(buffer, nearest);
            }
        }
    }

    fn push_named(&self, buffer: &mut String, color: NamedColor) {
        match self.palette.code_for(color) {
            Some(code) => self.push_code(buffer, code),
            None => log::debug!("palette has no code for {}, color dropped", color),
        }
    }

    /// `§x` followed by each of the six hex digits as its own code.
    fn push_true(&self, buffer: &mut String, color: &TrueColor) {
        self.push_code(buffer, 'x');
        for digit in color.hex().chars().skip(1) {
            self.push_code(buffer, digit);
        }
    }
}

impl Default for LegacySerializer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextSerializer for LegacySerializer {
    type Accumulator = String;
    type Output = String;

    fn new_accumulator(&self) -> String {
        String::new()
    }

    fn next(&self, _ctx: &mut SerializationContext<'_, String>) -> String {
        String::new()
    }

    fn write(&self, ctx: &mut SerializationContext<'_, String>) {
        let style = ctx.push_style();
        let text = ctx.text();
        if let Some(buffer) = ctx.accumulator_mut() {
            self.push_code(buffer, 'r');
            self.push_style(buffer, &style);
            if let Some(text) = text {
                buffer.push_str(&text);
            }
        }
    }

    fn end(&self, ctx: &mut SerializationContext<'_, String>) {
        ctx.pop_style();
        if let Some((parent, buffer)) = ctx.split_accumulators() {
            self.push_code(buffer, 'r');
            parent.push_str(buffer);
        }
    }

    /// Returns the root buffer; empty when no node was walked.
    fn finalize(&self, ctx: SerializationContext<'_, String>) -> String {
        ctx.into_root().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_text::{Component, Context, Translations};

    #[test]
    fn test_plain_literal() {
        assert_eq!(
            LegacySerializer::new().serialize(&Component::literal("x")),
            "§rx§r"
        );
    }

    #[test]
    fn test_children_inherit_combined_style() {
        let tree = Component::literal("A")
            .color(NamedColor::Red)
            .with_child(Component::literal("B").bold(true))
            .with_child("C");
        assert_eq!(
            LegacySerializer::new().serialize(&tree),
            "§r§cA§r§c§lB§r§r§cC§r§r"
        );
    }

    #[test]
    fn test_explicit_false_flag_suppresses_code() {
        let tree = Component::literal("A")
            .bold(true)
            .with_child(Component::literal("B").bold(false));
        assert_eq!(LegacySerializer::new().serialize(&tree), "§r§lA§r§rB§r§r");
    }

    #[test]
    fn test_flags_in_canonical_order() {
        let node = Component::literal("x")
            .obfuscated(true)
            .underline(true)
            .bold(true)
            .strikethrough(true)
            .italic(true);
        assert_eq!(
            LegacySerializer::new().serialize(&node),
            "§r§l§o§n§m§kx§r"
        );
    }

    #[test]
    fn test_true_color_sequence() {
        let node = Component::literal("x").color(TrueColor::new(0x12, 0xab, 0xef));
        assert_eq!(
            LegacySerializer::new().serialize(&node),
            "§r§x§1§2§a§b§e§fx§r"
        );
    }

    #[test]
    fn test_true_color_downsampled_when_disabled() {
        let node = Component::literal("x").color(TrueColor::new(0xfe, 0x50, 0x50));
        assert_eq!(
            LegacySerializer::new().true_color(false).serialize(&node),
            "§r§cx§r"
        );
    }

    #[test]
    fn test_custom_marker() {
        let node = Component::literal("x").color(NamedColor::Gold);
        assert_eq!(
            LegacySerializer::new().with_marker('&').serialize(&node),
            "&r&6x&r"
        );
    }

    #[test]
    fn test_translatable_resolved_with_services() {
        let services = Context::new().with_service(Translations::new().with("k", "Hello"));
        assert_eq!(
            LegacySerializer::new().serialize_with(&Component::translatable("k"), &services),
            "§rHello§r"
        );
        assert_eq!(
            LegacySerializer::new().serialize(&Component::translatable("k")),
            "§rk§r"
        );
    }

    #[test]
    fn test_empty_compound_emits_only_resets() {
        assert_eq!(LegacySerializer::new().serialize(&Component::empty()), "§r§r");
    }
}
