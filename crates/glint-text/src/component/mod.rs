//! The styled text component tree.
//!
//! A [`Component`] is one node of the tree. Every node owns its [`Style`] and
//! its children; there is no sharing between trees, so cloning a component
//! clones its whole subtree.
//!
//! The four variants differ only in where their own text comes from:
//!
//! | Variant | Text |
//! |---------|------|
//! | [`Literal`] | fixed string |
//! | [`Translatable`] | key resolved through the [`Translator`](crate::Translator) capability |
//! | [`Compound`] | none; groups children and supports tagged lookup |
//! | [`Supplied`] | computed by a function of the [`Context`] |
//!
//! # Example
//!
//! ```rust
//! use glint_text::{Component, Context, NamedColor};
//!
//! let message = Component::compound([
//!     Component::literal("Welcome, ").color(NamedColor::Gray),
//!     Component::literal("Steve").color(NamedColor::Gold).bold(true),
//! ]);
//!
//! assert_eq!(message.children().len(), 2);
//! assert_eq!(message.plain_text(&Context::new()), "Welcome, Steve");
//! ```

mod compound;
mod leaf;

pub use compound::Compound;
pub use leaf::{Literal, Supplied, Supplier, Translatable};

use crate::context::Context;
use crate::style::{Annotation, Flag, Style, TextColor};

/// State shared by every variant: the owned style and the owned children.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Node {
    pub(crate) style: Style,
    pub(crate) children: Vec<Component>,
}

/// Drops descendants from a local work list, so dropping a deep tree does
/// not recurse.
impl Drop for Node {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut child) = pending.pop() {
            pending.append(&mut child.node_mut().children);
        }
    }
}

/// One node of a styled text tree.
///
/// Dropping and [serializing iteratively](crate::TextSerializer::serialize_iterative)
/// work on trees of any depth. `clone`, `==`, [`node_count`](Self::node_count),
/// [`depth`](Self::depth) and [`plain_text`](Self::plain_text) recurse.
#[derive(Debug, Clone, PartialEq)]
pub enum Component {
    Literal(Literal),
    Translatable(Translatable),
    Compound(Compound),
    Supplied(Supplied),
}

impl Component {
    // =========================================================================
    // Constructors
    // =========================================================================

    pub fn literal(text: impl Into<String>) -> Self {
        Component::Literal(Literal::new(text))
    }

    pub fn translatable(key: impl Into<String>) -> Self {
        Component::Translatable(Translatable::new(key))
    }

    /// Creates a compound holding `children` in order.
    pub fn compound<I, C>(children: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Component>,
    {
        Component::Compound(Compound::of(children))
    }

    /// Creates an empty compound.
    pub fn empty() -> Self {
        Component::Compound(Compound::new())
    }

    /// Creates a component whose text is computed from the context.
    ///
    /// ```rust
    /// use glint_text::{Component, Context};
    ///
    /// let online = Component::supplied(|_ctx| Some("3 online".to_string()));
    /// assert_eq!(online.text(&Context::new()).as_deref(), Some("3 online"));
    /// ```
    pub fn supplied(f: impl Fn(&Context) -> Option<String> + 'static) -> Self {
        Component::Supplied(Supplied::new(f))
    }

    fn node(&self) -> &Node {
        match self {
            Component::Literal(c) => &c.node,
            Component::Translatable(c) => &c.node,
            Component::Compound(c) => &c.node,
            Component::Supplied(c) => &c.node,
        }
    }

    fn node_mut(&mut self) -> &mut Node {
        match self {
            Component::Literal(c) => &mut c.node,
            Component::Translatable(c) => &mut c.node,
            Component::Compound(c) => &mut c.node,
            Component::Supplied(c) => &mut c.node,
        }
    }

    // =========================================================================
    // Text
    // =========================================================================

    /// This node's own text, without its children's.
    ///
    /// Compounds have no text of their own and return `None`.
    pub fn text(&self, context: &Context) -> Option<String> {
        match self {
            Component::Literal(c) => Some(c.content().to_string()),
            Component::Translatable(c) => Some(c.resolve(context)),
            Component::Compound(_) => None,
            Component::Supplied(c) => c.supply(context),
        }
    }

    /// The translation key, for variants that have one.
    ///
    /// Adapters that can hand translation to the receiving client use this
    /// instead of [`text`](Self::text).
    pub fn translation_key(&self) -> Option<&str> {
        match self {
            Component::Translatable(c) => Some(c.key()),
            _ => None,
        }
    }

    /// Concatenated text of this node and all of its descendants, unstyled.
    pub fn plain_text(&self, context: &Context) -> String {
        let mut out = String::new();
        self.collect_text(context, &mut out);
        out
    }

    fn collect_text(&self, context: &Context, out: &mut String) {
        if let Some(text) = self.text(context) {
            out.push_str(&text);
        }
        for child in self.children() {
            child.collect_text(context, out);
        }
    }

    /// A short name of the variant, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Component::Literal(_) => "literal",
            Component::Translatable(_) => "translatable",
            Component::Compound(_) => "compound",
            Component::Supplied(_) => "supplied",
        }
    }

    pub fn as_compound(&self) -> Option<&Compound> {
        match self {
            Component::Compound(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_compound_mut(&mut self) -> Option<&mut Compound> {
        match self {
            Component::Compound(c) => Some(c),
            _ => None,
        }
    }

    // =========================================================================
    // Children
    // =========================================================================

    pub fn children(&self) -> &[Component] {
        &self.node().children
    }

    /// Children in order, for editing in place.
    ///
    /// Children cannot be removed or reordered, so compound tags stay valid.
    pub fn children_mut(&mut self) -> impl Iterator<Item = &mut Component> {
        self.node_mut().children.iter_mut()
    }

    pub fn child(&self, index: usize) -> Option<&Component> {
        self.node().children.get(index)
    }

    pub fn child_mut(&mut self, index: usize) -> Option<&mut Component> {
        self.node_mut().children.get_mut(index)
    }

    /// Calls `f` once with the child at `index`, if it exists.
    pub fn edit_child<F>(&mut self, index: usize, f: F) -> &mut Self
    where
        F: FnOnce(&mut Component),
    {
        if let Some(child) = self.child_mut(index) {
            f(child);
        }
        self
    }

    /// Appends a child, returning `self` for chaining.
    pub fn append(&mut self, child: impl Into<Component>) -> &mut Self {
        self.node_mut().children.push(child.into());
        self
    }

    /// Builder form of [`append`](Self::append).
    pub fn with_child(mut self, child: impl Into<Component>) -> Self {
        self.append(child);
        self
    }

    /// Number of nodes in this subtree, including this one.
    pub fn node_count(&self) -> usize {
        1 + self.children().iter().map(Component::node_count).sum::<usize>()
    }

    /// Depth of this subtree; a node without children has depth 1.
    pub fn depth(&self) -> usize {
        1 + self
            .children()
            .iter()
            .map(Component::depth)
            .max()
            .unwrap_or(0)
    }

    // =========================================================================
    // Style
    // =========================================================================

    pub fn style(&self) -> &Style {
        &self.node().style
    }

    pub fn style_mut(&mut self) -> &mut Style {
        &mut self.node_mut().style
    }

    pub fn set_style(&mut self, style: Style) -> &mut Self {
        self.node_mut().style = style;
        self
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.set_style(style);
        self
    }

    pub fn color(mut self, color: impl Into<TextColor>) -> Self {
        self.style_mut().set_color(Some(color.into()));
        self
    }

    pub fn flag(mut self, flag: Flag, value: bool) -> Self {
        self.style_mut().set_flag(flag, Some(value));
        self
    }

    pub fn bold(self, value: bool) -> Self {
        self.flag(Flag::Bold, value)
    }

    pub fn italic(self, value: bool) -> Self {
        self.flag(Flag::Italic, value)
    }

    pub fn underline(self, value: bool) -> Self {
        self.flag(Flag::Underline, value)
    }

    pub fn strikethrough(self, value: bool) -> Self {
        self.flag(Flag::Strikethrough, value)
    }

    pub fn obfuscated(self, value: bool) -> Self {
        self.flag(Flag::Obfuscated, value)
    }

    /// Sets a keyed property on this component's style.
    pub fn property(mut self, name: impl Into<String>, value: impl Into<Annotation>) -> Self {
        self.style_mut().set_property(name, value.into());
        self
    }

    /// Adds an anonymous annotation to this component's style.
    pub fn annotate(mut self, value: impl Into<Annotation>) -> Self {
        self.style_mut().add_annotation(value.into());
        self
    }
}

impl From<&str> for Component {
    fn from(text: &str) -> Self {
        Component::literal(text)
    }
}

impl From<String> for Component {
    fn from(text: String) -> Self {
        Component::literal(text)
    }
}

impl From<Literal> for Component {
    fn from(c: Literal) -> Self {
        Component::Literal(c)
    }
}

impl From<Translatable> for Component {
    fn from(c: Translatable) -> Self {
        Component::Translatable(c)
    }
}

impl From<Compound> for Component {
    fn from(c: Compound) -> Self {
        Component::Compound(c)
    }
}

impl From<Supplied> for Component {
    fn from(c: Supplied) -> Self {
        Component::Supplied(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Translations;
    use crate::style::{ClickEvent, NamedColor};

    #[test]
    fn test_dropping_deep_tree_does_not_overflow() {
        let mut tree = Component::literal("leaf");
        for _ in 0..200_000 {
            tree = Component::literal("-").with_child(tree);
        }
        drop(tree);

        let mut wide = Component::empty();
        for i in 0..1_000 {
            wide.append(Component::literal(i.to_string()).with_child("x"));
        }
        drop(wide);
    }

    #[test]
    fn test_default_style_is_empty() {
        for component in [
            Component::literal("a"),
            Component::translatable("k"),
            Component::empty(),
            Component::supplied(|_| None),
        ] {
            assert!(component.style().is_empty(), "{}", component.kind());
            assert!(component.children().is_empty());
        }
    }

    #[test]
    fn test_text_per_variant() {
        let context = Context::new().with_service(Translations::new().with("k", "K!"));
        assert_eq!(Component::literal("a").text(&context).as_deref(), Some("a"));
        assert_eq!(Component::translatable("k").text(&context).as_deref(), Some("K!"));
        assert_eq!(Component::empty().text(&context), None);
        assert_eq!(Component::supplied(|_| None).text(&context), None);
    }

    #[test]
    fn test_translation_key_only_for_translatable() {
        assert_eq!(Component::translatable("k").translation_key(), Some("k"));
        assert_eq!(Component::literal("k").translation_key(), None);
    }

    #[test]
    fn test_append_chains_and_keeps_order() {
        let mut root = Component::literal("root");
        root.append("a").append("b").append(Component::translatable("c"));
        let kinds: Vec<&str> = root.children().iter().map(Component::kind).collect();
        assert_eq!(kinds, vec!["literal", "literal", "translatable"]);
        assert_eq!(root.child(1), Some(&Component::literal("b")));
        assert_eq!(root.child(3), None);
    }

    #[test]
    fn test_edit_child_by_index() {
        let mut root = Component::compound(["a", "b"]);
        root.edit_child(1, |child| {
            child.style_mut().set_color(Some(NamedColor::Red.into()));
        });
        assert!(root.child(0).map(|c| c.style().is_empty()).unwrap_or(false));
        assert_eq!(
            root.child(1).and_then(|c| c.style().color().cloned()),
            Some(TextColor::Named(NamedColor::Red))
        );
        // out of range is a no-op
        root.edit_child(9, |_| panic!("must not be called"));
    }

    #[test]
    fn test_style_builders() {
        let component = Component::literal("x")
            .color(NamedColor::Aqua)
            .bold(true)
            .italic(false)
            .property("click", ClickEvent::run_command("/spawn"))
            .annotate(Annotation::custom("font", "uniform"));
        let style = component.style();
        assert_eq!(style.bold(), Some(true));
        assert_eq!(style.italic(), Some(false));
        assert_eq!(style.underline(), None);
        assert!(style.property("click").is_some());
        assert_eq!(style.annotations().len(), 1);
    }

    #[test]
    fn test_clone_deep_copies_style() {
        let original = Component::literal("x").property("click", ClickEvent::open_url("a"));
        let mut copy = original.clone();
        copy.style_mut().clear();
        assert!(original.style().property("click").is_some());
        assert!(copy.style().is_empty());
    }

    #[test]
    fn test_plain_text_and_shape() {
        let tree = Component::compound([
            Component::literal("a").with_child("b").with_child(Component::literal("c").with_child("d")),
            Component::literal("e"),
        ]);
        assert_eq!(tree.plain_text(&Context::new()), "abcde");
        assert_eq!(tree.node_count(), 6);
        assert_eq!(tree.depth(), 4);
    }

    #[test]
    fn test_as_compound() {
        let mut compound = Component::empty();
        if let Some(inner) = compound.as_compound_mut() {
            inner.append_tagged("hi", "greeting");
        }
        assert!(compound.as_compound().map(|c| c.has_tag("greeting")).unwrap_or(false));
        assert!(Component::literal("x").as_compound().is_none());
    }
}
