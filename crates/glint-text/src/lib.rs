//! Styled text component trees and a stack-based serialization engine.
//!
//! `glint-text` models rich chat-style text as a tree of [`Component`]s, each
//! owning a sparse [`Style`]. Output formats are produced by adapters
//! implementing [`TextSerializer`]; the engine walks the tree and keeps the
//! component, accumulator and style stacks in step for them.
//!
//! # Modules
//!
//! - [`style`]: [`Style`], [`Flag`], colors, [`Palette`], annotations and the cascade
//! - [`component`]: the [`Component`] tree and its variants
//! - [`context`]: the [`Context`] service registry and the [`Translator`] capability
//! - [`serializer`]: the [`TextSerializer`] trait and [`SerializationContext`]
//!
//! # Example
//!
//! ```rust
//! use glint_text::{Component, Context, NamedColor, Translations};
//!
//! let mut title = Component::translatable("menu.title").color(NamedColor::Gold);
//! title.append(Component::literal("!").bold(true));
//!
//! let services = Context::new().with_service(Translations::new().with("menu.title", "Menu"));
//! assert_eq!(title.plain_text(&services), "Menu!");
//! ```

pub mod component;
pub mod context;
pub mod serializer;
pub mod style;

pub use component::{Component, Compound, Literal, Node, Supplied, Supplier, Translatable};
pub use context::{Context, Provider, Service, Translations, Translator};
pub use serializer::{SerializationContext, TextSerializer};
pub use style::{
    Annotation, ClickAction, ClickEvent, Flag, HoverAction, HoverEvent, NamedColor, Palette, Style,
    StyleStack, TextColor, TrueColor,
};
