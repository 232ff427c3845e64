//! Style system for component formatting.
//!
//! This module provides the styling primitives:
//!
//! - [`Style`]: Sparse, cascading formatting attributes owned by one component
//! - [`Flag`]: The five boolean formatting flags
//! - [`TextColor`]: Named or true (RGB) text colors
//! - [`Palette`]: Hex digit to named color assignment for legacy codes
//! - [`Annotation`]: Click, hover and adapter-specific values carried by a style
//! - [`StyleStack`]: The running root-to-node stack folded by the cascade

mod annotation;
mod color;
mod palette;
mod stack;
#[allow(clippy::module_inception)]
mod style;

pub use annotation::{Annotation, ClickAction, ClickEvent, HoverAction, HoverEvent};
pub use color::{NamedColor, TextColor, TrueColor};
pub use palette::Palette;
pub use stack::StyleStack;
pub use style::{Flag, Style};
