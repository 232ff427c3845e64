//! Container components with tag addressing.

use std::collections::HashMap;

use super::{Component, Node};
use crate::style::Style;

/// A component with no text of its own that groups its children.
///
/// Children appended with [`append_tagged`](Self::append_tagged) can later be
/// found and edited by tag without walking the tree. Tags are scoped to this
/// compound's direct children; tagging a second child with the same tag
/// points the tag at the newer child.
///
/// # Example
///
/// ```rust
/// use glint_text::{Component, Compound};
///
/// let mut status = Compound::new();
/// status
///     .append(Component::literal("Players: "))
///     .append_tagged(Component::literal("0"), "count");
///
/// status.edit("count", |count| *count = Component::literal("12"));
/// assert_eq!(status.get("count"), Some(&Component::literal("12")));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Compound {
    pub(crate) node: Node,
    tags: HashMap<String, usize>,
}

impl Compound {
    /// Creates an empty compound.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a compound holding the given children in order.
    pub fn of<I, C>(children: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Component>,
    {
        Self {
            node: Node {
                style: Style::default(),
                children: children.into_iter().map(Into::into).collect(),
            },
            tags: HashMap::new(),
        }
    }

    /// Appends a child, returning `self` for chaining.
    pub fn append(&mut self, child: impl Into<Component>) -> &mut Self {
        self.node.children.push(child.into());
        self
    }

    /// Appends a child and records it under `tag`.
    pub fn append_tagged(&mut self, child: impl Into<Component>, tag: impl Into<String>) -> &mut Self {
        let index = self.node.children.len();
        self.node.children.push(child.into());
        self.tags.insert(tag.into(), index);
        self
    }

    /// Builder form of [`append_tagged`](Self::append_tagged).
    pub fn with_tagged(mut self, child: impl Into<Component>, tag: impl Into<String>) -> Self {
        self.append_tagged(child, tag);
        self
    }

    /// Returns the child recorded under `tag`.
    pub fn get(&self, tag: &str) -> Option<&Component> {
        self.tags
            .get(tag)
            .and_then(|&index| self.node.children.get(index))
    }

    /// Returns the child recorded under `tag` mutably.
    pub fn get_mut(&mut self, tag: &str) -> Option<&mut Component> {
        let index = *self.tags.get(tag)?;
        self.node.children.get_mut(index)
    }

    /// Calls `f` once with the child recorded under `tag`.
    ///
    /// Does nothing when the tag is unknown.
    pub fn edit<F>(&mut self, tag: &str, f: F) -> &mut Self
    where
        F: FnOnce(&mut Component),
    {
        if let Some(child) = self.get_mut(tag) {
            f(child);
        }
        self
    }

    /// Returns `true` if a child is recorded under `tag`.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains_key(tag)
    }

    /// All tags known to this compound, in no particular order.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.tags.keys().map(String::as_str)
    }

    pub fn children(&self) -> &[Component] {
        &self.node.children
    }

    /// Children in order, for editing in place.
    ///
    /// Tags record positions, so children cannot be removed or reordered.
    pub fn children_mut(&mut self) -> impl Iterator<Item = &mut Component> {
        self.node.children.iter_mut()
    }

    pub fn style(&self) -> &Style {
        &self.node.style
    }

    pub fn style_mut(&mut self) -> &mut Style {
        &mut self.node.style
    }
}

impl<C: Into<Component>> FromIterator<C> for Compound {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        Compound::of(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_tagged_children() {
        let child_a = Component::literal("a");
        let child_b = Component::literal("b");
        let mut compound = Compound::new();
        compound
            .append_tagged(child_a.clone(), "x")
            .append_tagged(child_b.clone(), "y");

        assert_eq!(compound.get("x"), Some(&child_a));
        assert_eq!(compound.get("y"), Some(&child_b));
        assert_eq!(compound.get("z"), None);
        assert_eq!(compound.children().len(), 2);
    }

    #[test]
    fn test_edit_invokes_once_on_tagged_child_only() {
        let mut compound = Compound::new();
        compound
            .append_tagged(Component::literal("a"), "x")
            .append_tagged(Component::literal("b"), "y");

        let mut calls = 0;
        let mut seen = None;
        compound.edit("x", |child| {
            calls += 1;
            seen = Some(child.clone());
            child.style_mut().set_flag(crate::Flag::Bold, Some(true));
        });

        assert_eq!(calls, 1);
        assert_eq!(seen, Some(Component::literal("a")));
        assert_eq!(compound.get("x").map(|c| c.style().bold()), Some(Some(true)));
        assert_eq!(compound.get("y"), Some(&Component::literal("b")));
    }

    #[test]
    fn test_edit_unknown_tag_is_noop() {
        let mut compound = Compound::of([Component::literal("a")]);
        let before = compound.clone();
        let mut called = false;
        compound.edit("missing", |_| called = true);
        assert!(!called);
        assert_eq!(compound, before);
    }

    #[test]
    fn test_retagging_points_at_newest_child() {
        let mut compound = Compound::new();
        compound
            .append_tagged(Component::literal("old"), "t")
            .append_tagged(Component::literal("new"), "t");
        assert_eq!(compound.get("t"), Some(&Component::literal("new")));
        assert_eq!(compound.children().len(), 2);
        assert_eq!(compound.tags().count(), 1);
    }

    #[test]
    fn test_editing_children_in_place_keeps_tags() {
        let mut compound = Compound::new();
        compound
            .append_tagged(Component::literal("a"), "x")
            .append_tagged(Component::literal("b"), "y");

        for child in compound.children_mut() {
            child.style_mut().set_flag(crate::Flag::Italic, Some(true));
        }

        assert_eq!(compound.get("x").map(|c| c.plain_text(&crate::Context::new())), Some("a".to_string()));
        assert_eq!(compound.get("y").map(|c| c.style().italic()), Some(Some(true)));
    }

    #[test]
    fn test_untagged_append_is_not_addressable() {
        let mut compound = Compound::new();
        compound.append("plain");
        assert!(!compound.has_tag("plain"));
        assert_eq!(compound.children(), &[Component::literal("plain")]);
    }

    #[test]
    fn test_collect_into_compound() {
        let compound: Compound = ["a", "b", "c"].into_iter().collect();
        assert_eq!(compound.children().len(), 3);
    }
}
