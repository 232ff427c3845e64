//! Walk state shared between the engine and an adapter.

use crate::component::Component;
use crate::context::Context;
use crate::style::{Style, StyleStack};

/// The three synchronized stacks of one serialization, plus its services.
///
/// The engine keeps the component and accumulator stacks in step: while an
/// adapter callback runs, the top of the component stack is the node being
/// visited and the top of the accumulator stack is the accumulator created
/// for it by [`TextSerializer::next`](super::TextSerializer::next). The style
/// stack is owned by the adapter, which pushes in `write` and pops in `end`.
///
/// Everything is borrowed from the tree for `'a`, so the tree cannot be
/// mutated while it is being walked.
pub struct SerializationContext<'a, A> {
    services: &'a Context,
    components: Vec<&'a Component>,
    accumulators: Vec<A>,
    styles: StyleStack<'a>,
}

impl<'a, A> SerializationContext<'a, A> {
    pub fn new(services: &'a Context) -> Self {
        Self {
            services,
            components: Vec::new(),
            accumulators: Vec::new(),
            styles: StyleStack::new(),
        }
    }

    /// Services available to components while they produce text.
    pub fn services(&self) -> &'a Context {
        self.services
    }

    // =========================================================================
    // Component stack
    // =========================================================================

    pub fn push_component(&mut self, component: &'a Component) {
        self.components.push(component);
    }

    pub fn pop_component(&mut self) -> Option<&'a Component> {
        self.components.pop()
    }

    /// The node currently being visited.
    pub fn component(&self) -> Option<&'a Component> {
        self.components.last().copied()
    }

    /// The parent of the node currently being visited.
    pub fn parent_component(&self) -> Option<&'a Component> {
        let len = self.components.len();
        if len < 2 {
            return None;
        }
        self.components.get(len - 2).copied()
    }

    /// Number of nodes on the current root-to-node path.
    pub fn depth(&self) -> usize {
        self.components.len()
    }

    /// Own text of the node currently being visited.
    pub fn text(&self) -> Option<String> {
        self.component()
            .and_then(|component| component.text(self.services))
    }

    // =========================================================================
    // Accumulator stack
    // =========================================================================

    pub fn push_accumulator(&mut self, accumulator: A) {
        self.accumulators.push(accumulator);
    }

    pub fn pop_accumulator(&mut self) -> Option<A> {
        self.accumulators.pop()
    }

    pub fn accumulator(&self) -> Option<&A> {
        self.accumulators.last()
    }

    /// The accumulator of the node currently being visited.
    pub fn accumulator_mut(&mut self) -> Option<&mut A> {
        self.accumulators.last_mut()
    }

    /// The parent's accumulator and the current one, borrowed together.
    ///
    /// Returns `None` when fewer than two accumulators are on the stack.
    pub fn split_accumulators(&mut self) -> Option<(&mut A, &mut A)> {
        match self.accumulators.as_mut_slice() {
            [.., parent, current] => Some((parent, current)),
            _ => None,
        }
    }

    /// Consumes the context, returning the bottom (root) accumulator.
    pub fn into_root(self) -> Option<A> {
        self.accumulators.into_iter().next()
    }

    // =========================================================================
    // Style stack
    // =========================================================================

    /// Pushes the current node's style and returns the combined style.
    pub fn push_style(&mut self) -> Style {
        if let Some(component) = self.component() {
            self.styles.push(component.style());
        }
        self.styles.build_style()
    }

    pub fn pop_style(&mut self) -> Option<&'a Style> {
        self.styles.pop()
    }

    /// The combined style of every frame currently pushed.
    pub fn combined_style(&self) -> Style {
        self.styles.build_style()
    }

    pub fn styles(&self) -> &StyleStack<'a> {
        &self.styles
    }
}

impl<A> std::fmt::Debug for SerializationContext<'_, A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SerializationContext")
            .field("components", &self.components.len())
            .field("accumulators", &self.accumulators.len())
            .field("styles", &self.styles.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{NamedColor, TextColor};

    #[test]
    fn test_parent_component() {
        let context = Context::new();
        let root = Component::literal("root");
        let child = Component::literal("child");
        let mut ctx: SerializationContext<'_, ()> = SerializationContext::new(&context);

        assert!(ctx.component().is_none());
        ctx.push_component(&root);
        assert_eq!(ctx.component(), Some(&root));
        assert!(ctx.parent_component().is_none());
        ctx.push_component(&child);
        assert_eq!(ctx.parent_component(), Some(&root));
        assert_eq!(ctx.depth(), 2);
    }

    #[test]
    fn test_split_accumulators() {
        let context = Context::new();
        let mut ctx: SerializationContext<'_, String> = SerializationContext::new(&context);
        ctx.push_accumulator("parent".to_string());
        assert!(ctx.split_accumulators().is_none());

        ctx.push_accumulator("child".to_string());
        if let Some((parent, current)) = ctx.split_accumulators() {
            parent.push_str(current);
        }
        ctx.pop_accumulator();
        assert_eq!(ctx.into_root().as_deref(), Some("parentchild"));
    }

    #[test]
    fn test_push_style_combines_path() {
        let context = Context::new();
        let outer = Component::literal("a").color(NamedColor::Red);
        let inner = Component::literal("b").bold(true);
        let mut ctx: SerializationContext<'_, ()> = SerializationContext::new(&context);

        ctx.push_component(&outer);
        ctx.push_style();
        ctx.push_component(&inner);
        let combined = ctx.push_style();
        assert_eq!(combined.color(), Some(&TextColor::Named(NamedColor::Red)));
        assert_eq!(combined.bold(), Some(true));

        assert_eq!(ctx.pop_style(), Some(inner.style()));
        assert_eq!(ctx.combined_style().bold(), None);
    }
}
