//! The running style stack used during serialization.

use super::style::Style;

/// Styles of the components on the current root-to-node path.
///
/// Frames are borrowed from the tree being serialized, so pushing a frame
/// never copies or aliases a component's style mutably.
#[derive(Debug, Default, Clone)]
pub struct StyleStack<'a> {
    frames: Vec<&'a Style>,
}

impl<'a> StyleStack<'a> {
    pub fn new() -> Self {
        Self { frames: Vec::new() }
    }

    pub fn push(&mut self, style: &'a Style) {
        self.frames.push(style);
    }

    pub fn pop(&mut self) -> Option<&'a Style> {
        self.frames.pop()
    }

    pub fn peek(&self) -> Option<&'a Style> {
        self.frames.last().copied()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Combines every frame on the stack into one style.
    ///
    /// See [`Style::cascade`] for the combination rules.
    pub fn build_style(&self) -> Style {
        Style::cascade(self.frames.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{NamedColor, TextColor};

    #[test]
    fn test_empty_stack_builds_empty_style() {
        assert!(StyleStack::new().build_style().is_empty());
    }

    #[test]
    fn test_push_pop_changes_combined_style() {
        let outer = Style::new().with_color(NamedColor::Red).with_italic(true);
        let inner = Style::new().with_color(NamedColor::Blue);

        let mut stack = StyleStack::new();
        stack.push(&outer);
        stack.push(&inner);
        let combined = stack.build_style();
        assert_eq!(combined.color(), Some(&TextColor::Named(NamedColor::Blue)));
        assert_eq!(combined.italic(), Some(true));

        assert_eq!(stack.pop(), Some(&inner));
        assert_eq!(
            stack.build_style().color(),
            Some(&TextColor::Named(NamedColor::Red))
        );
        assert_eq!(stack.len(), 1);
        assert_eq!(stack.peek(), Some(&outer));
    }
}
