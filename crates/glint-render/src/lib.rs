//! Output adapters for glint component trees.
//!
//! Every adapter implements [`glint_text::TextSerializer`], so any of them
//! can be driven by the recursive or the work-list walk:
//!
//! - [`LegacySerializer`]: flat string with `§` format codes
//! - [`AnsiSerializer`]: flat string with ANSI escapes, honoring [`OutputMode`]
//! - [`ChatSerializer`]: structured [`ChatNode`] tree, serializable to chat JSON
//!
//! # Example
//!
//! ```rust
//! use glint_render::{AnsiSerializer, ChatSerializer, LegacySerializer, OutputMode};
//! use glint_text::{Component, NamedColor, TextSerializer};
//!
//! let greeting = Component::literal("Hello").color(NamedColor::Gold);
//!
//! assert_eq!(LegacySerializer::new().serialize(&greeting), "§r§6Hello§r");
//! assert_eq!(AnsiSerializer::new(OutputMode::Text).serialize(&greeting), "Hello");
//! assert_eq!(
//!     ChatSerializer::new().to_json(&greeting).unwrap(),
//!     r#"{"text":"Hello","color":"gold"}"#
//! );
//! ```

mod ansi;
mod chat;
mod legacy;
mod output;
mod util;

pub use ansi::{AnsiBuffer, AnsiSerializer, ANSI_RESET};
pub use chat::{ChatBuilder, ChatClick, ChatHover, ChatNode, ChatSerializer, Retention};
pub use legacy::LegacySerializer;
pub use output::OutputMode;
pub use util::rgb_to_ansi256;
