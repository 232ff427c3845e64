//! The sparse, cascading [`Style`] attached to every component.

use std::collections::BTreeMap;

use super::annotation::Annotation;
use super::color::TextColor;

/// One of the five boolean formatting flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flag {
    Bold,
    Italic,
    Underline,
    Strikethrough,
    Obfuscated,
}

impl Flag {
    /// All flags in canonical output order.
    pub const ALL: [Flag; 5] = [
        Flag::Bold,
        Flag::Italic,
        Flag::Underline,
        Flag::Strikethrough,
        Flag::Obfuscated,
    ];

    /// The legacy format code for this flag (`l`, `o`, `n`, `m`, `k`).
    pub fn code(self) -> char {
        match self {
            Flag::Bold => 'l',
            Flag::Italic => 'o',
            Flag::Underline => 'n',
            Flag::Strikethrough => 'm',
            Flag::Obfuscated => 'k',
        }
    }

    /// The flag for a legacy format code.
    pub fn from_code(code: char) -> Option<Flag> {
        Flag::ALL.into_iter().find(|flag| flag.code() == code)
    }

    pub fn name(self) -> &'static str {
        match self {
            Flag::Bold => "bold",
            Flag::Italic => "italic",
            Flag::Underline => "underline",
            Flag::Strikethrough => "strikethrough",
            Flag::Obfuscated => "obfuscated",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Formatting attributes for one component.
///
/// Every attribute is optional: `None` means "inherit from the enclosing
/// component", `Some(false)` explicitly switches a flag off. Combining the
/// styles of a root-to-leaf path is done by [`Style::cascade`].
///
/// Besides formatting a style carries annotations, either keyed
/// ([`properties`](Self::properties), a later write to the same key wins) or
/// anonymous ([`annotations`](Self::annotations), kept in order).
///
/// # Example
///
/// ```rust
/// use glint_text::{Flag, NamedColor, Style};
///
/// let style = Style::new().with_color(NamedColor::Red).with_bold(true);
/// assert_eq!(style.flag(Flag::Bold), Some(true));
/// assert_eq!(style.italic(), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    flags: [Option<bool>; 5],
    color: Option<TextColor>,
    properties: BTreeMap<String, Annotation>,
    annotations: Vec<Annotation>,
}

impl Style {
    /// Creates a style with every attribute absent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` when no attribute, property or annotation is set.
    pub fn is_empty(&self) -> bool {
        self.flags.iter().all(Option::is_none)
            && self.color.is_none()
            && self.properties.is_empty()
            && self.annotations.is_empty()
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn flag(&self, flag: Flag) -> Option<bool> {
        self.flags[flag.index()]
    }

    pub fn bold(&self) -> Option<bool> {
        self.flag(Flag::Bold)
    }

    pub fn italic(&self) -> Option<bool> {
        self.flag(Flag::Italic)
    }

    pub fn underline(&self) -> Option<bool> {
        self.flag(Flag::Underline)
    }

    pub fn strikethrough(&self) -> Option<bool> {
        self.flag(Flag::Strikethrough)
    }

    pub fn obfuscated(&self) -> Option<bool> {
        self.flag(Flag::Obfuscated)
    }

    /// Flags explicitly set to `true`, in canonical order.
    pub fn enabled_flags(&self) -> impl Iterator<Item = Flag> + '_ {
        Flag::ALL
            .into_iter()
            .filter(move |flag| self.flag(*flag) == Some(true))
    }

    pub fn color(&self) -> Option<&TextColor> {
        self.color.as_ref()
    }

    /// Looks up a keyed property.
    pub fn property(&self, name: &str) -> Option<&Annotation> {
        self.properties.get(name)
    }

    pub fn properties(&self) -> &BTreeMap<String, Annotation> {
        &self.properties
    }

    /// Anonymous annotations in the order they were added.
    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    /// Every annotation: keyed properties first (by key), then anonymous ones.
    pub fn all_annotations(&self) -> impl Iterator<Item = &Annotation> {
        self.properties.values().chain(self.annotations.iter())
    }

    // =========================================================================
    // In-place setters
    // =========================================================================

    pub fn set_flag(&mut self, flag: Flag, value: Option<bool>) -> &mut Self {
        self.flags[flag.index()] = value;
        self
    }

    pub fn set_color(&mut self, color: Option<TextColor>) -> &mut Self {
        self.color = color;
        self
    }

    pub fn set_property(&mut self, name: impl Into<String>, value: Annotation) -> &mut Self {
        self.properties.insert(name.into(), value);
        self
    }

    pub fn remove_property(&mut self, name: &str) -> Option<Annotation> {
        self.properties.remove(name)
    }

    pub fn add_annotation(&mut self, value: Annotation) -> &mut Self {
        self.annotations.push(value);
        self
    }

    /// Resets every attribute to absent.
    pub fn clear(&mut self) {
        *self = Style::default();
    }

    // =========================================================================
    // Builder
    // =========================================================================

    pub fn with_flag(mut self, flag: Flag, value: bool) -> Self {
        self.set_flag(flag, Some(value));
        self
    }

    pub fn with_bold(self, value: bool) -> Self {
        self.with_flag(Flag::Bold, value)
    }

    pub fn with_italic(self, value: bool) -> Self {
        self.with_flag(Flag::Italic, value)
    }

    pub fn with_underline(self, value: bool) -> Self {
        self.with_flag(Flag::Underline, value)
    }

    pub fn with_strikethrough(self, value: bool) -> Self {
        self.with_flag(Flag::Strikethrough, value)
    }

    pub fn with_obfuscated(self, value: bool) -> Self {
        self.with_flag(Flag::Obfuscated, value)
    }

    pub fn with_color(mut self, color: impl Into<TextColor>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<Annotation>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    pub fn with_annotation(mut self, value: impl Into<Annotation>) -> Self {
        self.annotations.push(value.into());
        self
    }

    // =========================================================================
    // Cascade
    // =========================================================================

    /// Folds a root-to-leaf sequence of styles into one combined style.
    ///
    /// For every flag and for the color the deepest frame that sets the
    /// attribute wins; attributes no frame sets stay absent. Keyed properties
    /// merge root to leaf with deeper frames overwriting, anonymous
    /// annotations accumulate in order. The inputs are only read.
    ///
    /// # Example
    ///
    /// ```rust
    /// use glint_text::{NamedColor, Style, TextColor};
    ///
    /// let root = Style::new().with_color(NamedColor::Red);
    /// let leaf = Style::new().with_bold(true);
    /// let combined = Style::cascade([&root, &leaf]);
    ///
    /// assert_eq!(combined.color(), Some(&TextColor::Named(NamedColor::Red)));
    /// assert_eq!(combined.bold(), Some(true));
    /// assert!(Style::cascade([]).is_empty());
    /// ```
    pub fn cascade<'s>(frames: impl IntoIterator<Item = &'s Style>) -> Style {
        let mut combined = Style::new();
        for frame in frames {
            combined.overlay(frame);
        }
        combined
    }

    fn overlay(&mut self, frame: &Style) {
        for flag in Flag::ALL {
            if let Some(value) = frame.flag(flag) {
                self.set_flag(flag, Some(value));
            }
        }
        if let Some(color) = &frame.color {
            self.color = Some(color.clone());
        }
        for (name, value) in &frame.properties {
            self.properties.insert(name.clone(), value.clone());
        }
        self.annotations.extend(frame.annotations.iter().cloned());
    }
}
