//! Structured adapter producing chat JSON nodes.
//!
//! Each component becomes a builder of [`ChatNode`] parts. A node's own text
//! is written as a part carrying its combined style; finished children are
//! appended to the parent's builder as whole nodes. Because every part
//! carries its full combined style, the resulting tree renders the same no
//! matter how a client propagates formatting through `extra`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use glint_text::{
    Annotation, ClickEvent, Component, Context, NamedColor, SerializationContext, Style,
    TextColor, TextSerializer,
};

/// One node of the chat JSON format.
///
/// Unknown fields survive a round trip through [`custom`](Self::custom).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatNode {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub underlined: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strikethrough: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub obfuscated: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub click_event: Option<ChatClick>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover_event: Option<ChatHover>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra: Vec<ChatNode>,
    #[serde(flatten)]
    pub custom: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatClick {
    pub action: String,
    pub value: String,
}

impl From<&ClickEvent> for ChatClick {
    fn from(event: &ClickEvent) -> Self {
        Self {
            action: event.action.as_str().to_string(),
            value: event.value.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatHover {
    pub action: String,
    pub value: Box<ChatNode>,
}

impl ChatNode {
    /// Keys written from the typed fields; custom fields may not use them.
    pub const FIELDS: [&'static str; 11] = [
        "text",
        "translate",
        "color",
        "bold",
        "italic",
        "underlined",
        "strikethrough",
        "obfuscated",
        "clickEvent",
        "hoverEvent",
        "extra",
    ];

    /// A node holding only `text`.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    /// A node the client translates from `key`.
    pub fn translate(key: impl Into<String>) -> Self {
        Self {
            translate: Some(key.into()),
            ..Self::default()
        }
    }

    /// Copies color, flags, events and custom fields from `other`.
    pub fn copy_formatting(&mut self, other: &ChatNode) {
        self.color = other.color.clone();
        self.bold = other.bold;
        self.italic = other.italic;
        self.underlined = other.underlined;
        self.strikethrough = other.strikethrough;
        self.obfuscated = other.obfuscated;
        self.click_event = other.click_event.clone();
        self.hover_event = other.hover_event.clone();
        self.custom = other.custom.clone();
    }

    /// Concatenated `text` of this node and its `extra` nodes.
    pub fn plain_text(&self) -> String {
        let mut out = self.text.clone().unwrap_or_default();
        for child in &self.extra {
            out.push_str(&child.plain_text());
        }
        out
    }
}

/// Which formatting a new builder part takes over from the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Retention {
    /// Copy color, flags, events and custom fields.
    #[default]
    All,
    /// Start unformatted.
    None,
}

/// Collects a sequence of [`ChatNode`] parts.
///
/// # Example
///
/// ```rust
/// use glint_render::{ChatBuilder, Retention};
///
/// let mut builder = ChatBuilder::new();
/// builder.append("Hello, ").bold = Some(true);
/// builder.append("world");
///
/// let node = builder.build();
/// assert_eq!(node.extra.len(), 2);
/// assert_eq!(node.extra[1].bold, Some(true));
///
/// let mut fresh = ChatBuilder::new().retain(Retention::None);
/// fresh.append("a").bold = Some(true);
/// fresh.append("b");
/// assert_eq!(fresh.build().extra[1].bold, None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ChatBuilder {
    parts: Vec<ChatNode>,
    retention: Retention,
}

impl ChatBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn retain(mut self, retention: Retention) -> Self {
        self.retention = retention;
        self
    }

    /// Starts a new text part and returns it for styling.
    pub fn append(&mut self, text: impl Into<String>) -> &mut ChatNode {
        let mut part = ChatNode::text(text);
        if self.retention == Retention::All {
            if let Some(previous) = self.parts.last() {
                part.copy_formatting(previous);
            }
        }
        self.push(part)
    }

    /// Appends a finished node as is.
    pub fn append_node(&mut self, node: ChatNode) -> &mut Self {
        self.parts.push(node);
        self
    }

    fn push(&mut self, part: ChatNode) -> &mut ChatNode {
        let index = self.parts.len();
        self.parts.push(part);
        &mut self.parts[index]
    }

    pub fn current_mut(&mut self) -> Option<&mut ChatNode> {
        self.parts.last_mut()
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Finishes the builder.
    ///
    /// A single part is returned as is; several parts become the `extra` of
    /// an empty text node; no parts give an empty text node.
    pub fn build(mut self) -> ChatNode {
        match self.parts.len() {
            0 => ChatNode::text(""),
            1 => self.parts.pop().unwrap_or_default(),
            _ => ChatNode {
                text: Some(String::new()),
                extra: self.parts,
                ..ChatNode::default()
            },
        }
    }
}

/// Serializes component trees into [`ChatNode`]s.
///
/// # Example
///
/// ```rust
/// use glint_render::ChatSerializer;
/// use glint_text::{ClickEvent, Component, NamedColor};
///
/// let link = Component::literal("docs")
///     .color(NamedColor::Aqua)
///     .property("click", ClickEvent::open_url("https://example.org"));
///
/// let json = ChatSerializer::new().to_json(&link).unwrap();
/// assert_eq!(
///     json,
///     r#"{"text":"docs","color":"aqua","clickEvent":{"action":"open_url","value":"https://example.org"}}"#
/// );
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ChatSerializer {
    native_translations: bool,
    true_color: bool,
}

impl ChatSerializer {
    /// Creates a serializer emitting `translate` nodes and `#rrggbb` colors.
    pub fn new() -> Self {
        Self {
            native_translations: true,
            true_color: true,
        }
    }

    /// Whether translatable components become client-side `translate` nodes.
    ///
    /// When disabled they are resolved through the context like any other text.
    pub fn native_translations(mut self, enabled: bool) -> Self {
        self.native_translations = enabled;
        self
    }

    /// Whether true colors are written as `#rrggbb`.
    ///
    /// When disabled they are replaced by the nearest named color.
    pub fn true_color(mut self, enabled: bool) -> Self {
        self.true_color = enabled;
        self
    }

    /// Serializes `node` straight to a JSON string.
    pub fn to_json(&self, node: &Component) -> serde_json::Result<String> {
        serde_json::to_string(&self.serialize(node))
    }

    /// Serializes `node` to a JSON string, resolving text through `services`.
    pub fn to_json_with(&self, node: &Component, services: &Context) -> serde_json::Result<String> {
        serde_json::to_string(&self.serialize_with(node, services))
    }

    fn color_name(&self, color: &TextColor) -> String {
        match color {
            TextColor::Named(named) => named.chat_name().to_string(),
            TextColor::True(true_color) if self.true_color => true_color.hex(),
            TextColor::True(true_color) => {
                let nearest = NamedColor::nearest(true_color.rgb());
                log::debug!("downsampled {} to {}", true_color.hex(), nearest);
                nearest.chat_name().to_string()
            }
        }
    }

    fn apply_style(&self, part: &mut ChatNode, style: &Style, services: &Context) {
        if let Some(color) = style.color() {
            part.color = Some(self.color_name(color));
        }
        part.bold = style.bold();
        part.italic = style.italic();
        part.underlined = style.underline();
        part.strikethrough = style.strikethrough();
        part.obfuscated = style.obfuscated();

        for annotation in style.all_annotations() {
            match annotation {
                Annotation::Click(event) => part.click_event = Some(event.into()),
                Annotation::Hover(event) => {
                    let value = self.serialize_with(event.value.as_ref(), services);
                    part.hover_event = Some(ChatHover {
                        action: event.action.as_str().to_string(),
                        value: Box::new(value),
                    });
                }
                Annotation::Custom { key, .. } if ChatNode::FIELDS.contains(&key.as_str()) => {
                    log::debug!("skipped custom annotation shadowing chat field {:?}", key);
                }
                Annotation::Custom { key, value } => {
                    part.custom.insert(key.clone(), value.clone());
                }
            }
        }
    }
}

impl Default for ChatSerializer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextSerializer for ChatSerializer {
    type Accumulator = ChatBuilder;
    type Output = ChatNode;

    fn new_accumulator(&self) -> ChatBuilder {
        ChatBuilder::new()
    }

    /// Parts are appended whole with their combined style, so retention
    /// plays no part here.
    fn next(&self, _ctx: &mut SerializationContext<'_, ChatBuilder>) -> ChatBuilder {
        ChatBuilder::new()
    }

    fn write(&self, ctx: &mut SerializationContext<'_, ChatBuilder>) {
        let style = ctx.push_style();
        let services = ctx.services();
        let Some(component) = ctx.component() else {
            return;
        };

        // compounds have no part of their own; children carry the combined style
        let mut part = match component.translation_key() {
            Some(key) if self.native_translations => ChatNode::translate(key),
            _ => match component.text(services) {
                Some(text) => ChatNode::text(text),
                None => return,
            },
        };
        self.apply_style(&mut part, &style, services);

        if let Some(builder) = ctx.accumulator_mut() {
            builder.append_node(part);
        }
    }

    fn end(&self, ctx: &mut SerializationContext<'_, ChatBuilder>) {
        ctx.pop_style();
        if let Some((parent, builder)) = ctx.split_accumulators() {
            let finished = std::mem::take(builder).build();
            parent.append_node(finished);
        }
    }

    /// Returns the built root; an empty text node when no node was walked.
    fn finalize(&self, ctx: SerializationContext<'_, ChatBuilder>) -> ChatNode {
        ctx.into_root().unwrap_or_default().build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_text::{HoverEvent, Translations, TrueColor};
    use serde_json::json;

    fn to_value(node: &Component) -> Value {
        serde_json::to_value(ChatSerializer::new().serialize(node)).unwrap()
    }

    // =========================================================================
    // Builder
    // =========================================================================

    #[test]
    fn test_empty_builder_builds_empty_text() {
        assert_eq!(ChatBuilder::new().build(), ChatNode::text(""));
    }

    #[test]
    fn test_retention_all_copies_formatting() {
        let mut builder = ChatBuilder::new();
        builder.append("a").color = Some("red".to_string());
        let second = builder.append("b");
        assert_eq!(second.color.as_deref(), Some("red"));
        assert_eq!(second.text.as_deref(), Some("b"));
    }

    #[test]
    fn test_append_node_is_not_restyled() {
        let mut builder = ChatBuilder::new();
        builder.append("a").bold = Some(true);
        builder.append_node(ChatNode::text("b"));
        assert_eq!(builder.current_mut().and_then(|n| n.bold), None);
    }

    // =========================================================================
    // Serializer
    // =========================================================================

    #[test]
    fn test_single_literal() {
        assert_eq!(to_value(&Component::literal("hi")), json!({ "text": "hi" }));
    }

    #[test]
    fn test_children_carry_combined_style() {
        let tree = Component::literal("a")
            .color(NamedColor::Purple)
            .with_child(Component::literal("b").italic(true));
        assert_eq!(
            to_value(&tree),
            json!({
                "text": "",
                "extra": [
                    { "text": "a", "color": "light_purple" },
                    { "text": "b", "color": "light_purple", "italic": true }
                ]
            })
        );
    }

    #[test]
    fn test_explicit_false_flag_serialized() {
        let node = Component::literal("x").bold(false);
        assert_eq!(to_value(&node), json!({ "text": "x", "bold": false }));
    }

    #[test]
    fn test_native_translation() {
        let services = Context::new().with_service(Translations::new().with("k", "Key"));
        let node = Component::translatable("k");

        let native = ChatSerializer::new().serialize_with(&node, &services);
        assert_eq!(native, ChatNode::translate("k"));

        let resolved = ChatSerializer::new()
            .native_translations(false)
            .serialize_with(&node, &services);
        assert_eq!(resolved, ChatNode::text("Key"));
    }

    #[test]
    fn test_true_color_hex_and_fallback() {
        let node = Component::literal("x").color(TrueColor::new(0x55, 0xff, 0x56));
        assert_eq!(to_value(&node)["color"], json!("#55ff56"));

        let fallback = ChatSerializer::new().true_color(false).serialize(&node);
        assert_eq!(fallback.color.as_deref(), Some("green"));
    }

    #[test]
    fn test_hover_value_serialized_recursively() {
        let node = Component::literal("?").property(
            "hover",
            HoverEvent::show_text(Component::literal("tip").color(NamedColor::Yellow)),
        );
        assert_eq!(
            to_value(&node),
            json!({
                "text": "?",
                "hoverEvent": {
                    "action": "show_text",
                    "value": { "text": "tip", "color": "yellow" }
                }
            })
        );
    }

    #[test]
    fn test_custom_annotation_flattened() {
        let node = Component::literal("x").annotate(Annotation::custom("insertion", "/help"));
        assert_eq!(
            to_value(&node),
            json!({ "text": "x", "insertion": "/help" })
        );
    }

    #[test]
    fn test_custom_annotation_cannot_shadow_fields() {
        let node = Component::literal("x")
            .color(NamedColor::Aqua)
            .annotate(Annotation::custom("color", "red"))
            .annotate(Annotation::custom("text", "y"))
            .annotate(Annotation::custom("extra", "z"));
        let json = ChatSerializer::new().to_json(&node).unwrap();
        assert_eq!(json, r#"{"text":"x","color":"aqua"}"#);
    }

    #[test]
    fn test_parts_keep_own_formatting_after_styled_sibling() {
        let tree = Component::empty()
            .with_child(Component::literal("a").bold(true))
            .with_child("b");
        let node = ChatSerializer::new().serialize(&tree);
        assert_eq!(node.extra.len(), 2);
        assert_eq!(node.extra[0].bold, Some(true));
        assert_eq!(node.extra[1].bold, None);
    }

    #[test]
    fn test_round_trip_keeps_unknown_fields() {
        let raw = json!({ "text": "x", "font": "minecraft:uniform" });
        let node: ChatNode = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(node.custom.get("font"), Some(&json!("minecraft:uniform")));
        assert_eq!(serde_json::to_value(&node).unwrap(), raw);
    }
}
