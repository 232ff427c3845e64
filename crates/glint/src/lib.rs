//! # Glint - styled chat text
//!
//! Glint models chat-style rich text as a tree of styled components, parses
//! legacy `&`-code markup into such trees, and serializes them through
//! pluggable adapters.
//!
//! This crate re-exports the workspace crates and adds one-call helpers for
//! the common "markup in, formatted string out" case:
//!
//! - [`glint_text`]: components, styles, the [`Context`] and the engine
//! - [`glint_markup`]: the markup parser
//! - [`glint_render`]: legacy, ANSI and chat JSON adapters
//!
//! ## Quick Start
//!
//! ```rust
//! use glint::{render_legacy, render_plain};
//!
//! assert_eq!(render_plain("&c&lHi &rthere").unwrap(), "Hi there");
//! assert_eq!(render_legacy("&aok").unwrap(), "§r§r§aok§r§r");
//! ```
//!
//! ## Building trees by hand
//!
//! ```rust
//! use glint::{ClickEvent, Component, LegacySerializer, NamedColor, TextSerializer};
//!
//! let mut line = Component::empty();
//! line.append(Component::literal("[Shop] ").color(NamedColor::Gold))
//!     .append(
//!         Component::literal("open")
//!             .underline(true)
//!             .property("click", ClickEvent::run_command("/shop")),
//!     );
//!
//! let legacy = LegacySerializer::new().serialize(&line);
//! assert!(legacy.contains("§6[Shop] "));
//! ```

use thiserror::Error;

pub use glint_markup::{self, parse, parse_with, MarkupConfig, MarkupError, MarkupParser};
pub use glint_render::{
    self, AnsiSerializer, ChatBuilder, ChatNode, ChatSerializer, LegacySerializer, OutputMode,
    Retention,
};
pub use glint_text::{
    self, Annotation, ClickAction, ClickEvent, Component, Compound, Context, Flag, HoverAction,
    HoverEvent, NamedColor, Palette, Provider, SerializationContext, Service, Style, TextColor,
    TextSerializer, Translations, Translator, TrueColor,
};

/// Error from the one-call helpers.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Markup(#[from] MarkupError),
    #[error("failed to encode chat JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parses markup into a single component.
pub fn component(markup: &str) -> Result<Component, MarkupError> {
    parse(markup).map(Component::from)
}

/// Converts markup to a `§`-coded string.
pub fn render_legacy(markup: &str) -> Result<String, MarkupError> {
    Ok(LegacySerializer::new().serialize(&component(markup)?))
}

/// Converts markup to terminal text, styled according to `mode`.
pub fn render_ansi(markup: &str, mode: OutputMode) -> Result<String, MarkupError> {
    Ok(AnsiSerializer::new(mode).serialize(&component(markup)?))
}

/// Strips markup down to its text.
pub fn render_plain(markup: &str) -> Result<String, MarkupError> {
    render_ansi(markup, OutputMode::Text)
}

/// Converts markup to a chat JSON string.
pub fn render_json(markup: &str) -> Result<String, Error> {
    Ok(ChatSerializer::new().to_json(&component(markup)?)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_plain_strips_codes() {
        assert_eq!(render_plain("&l&6Gold &r&obar").unwrap(), "Gold bar");
    }

    #[test]
    fn test_render_json_errors_on_bad_markup() {
        let err = render_json("&q").unwrap_err();
        assert!(matches!(
            err,
            Error::Markup(MarkupError::UnknownFormatCode { character: 'q', .. })
        ));
        assert!(err.to_string().contains("'q'"));
    }

    #[test]
    fn test_render_json() {
        assert_eq!(
            render_json("&bhi").unwrap(),
            r#"{"text":"hi","color":"aqua"}"#
        );
    }

    #[test]
    fn test_service_implementable_through_facade() {
        use std::rc::Rc;

        struct Shouting;

        impl Translator for Shouting {
            fn translate(&self, key: &str) -> Option<String> {
                Some(key.to_uppercase())
            }
        }

        impl Service for Shouting {
            fn provide(self: Rc<Self>, provider: &mut Provider<'_>) {
                provider.provide::<dyn Translator>(self);
            }
        }

        let services = Context::new().with_service(Shouting);
        let text = Component::translatable("hey").text(&services);
        assert_eq!(text.as_deref(), Some("HEY"));
    }

    #[test]
    fn test_render_ansi_term() {
        let output = render_ansi("&4x", OutputMode::Term).unwrap();
        assert!(output.contains("\x1b[31m"));
    }
}
