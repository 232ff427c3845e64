//! Legacy ampersand-code markup for glint component trees.
//!
//! Turns strings such as `"&c&lWarning: &rdisk almost full"` into a
//! [`Compound`] whose children are styled literal segments. See [`parser`]
//! for the full grammar.
//!
//! - [`parse`]: parse with the default configuration
//! - [`MarkupParser`]: parse with a custom [`MarkupConfig`]
//! - [`MarkupError`]: positioned syntax errors
//!
//! # Example
//!
//! ```rust
//! use glint_markup::parse;
//!
//! let compound = parse("&cHello").unwrap();
//! assert_eq!(compound.children().len(), 1);
//!
//! let err = parse("&#12345").unwrap_err();
//! assert_eq!(err.position(), 1);
//! ```

mod config;
mod error;
pub mod parser;

pub use config::MarkupConfig;
pub use error::MarkupError;
pub use parser::MarkupParser;

use glint_text::Compound;

/// Parses `input` with the default `&` control and `\` escape characters.
pub fn parse(input: &str) -> Result<Compound, MarkupError> {
    MarkupParser::default().parse(input)
}

/// Parses `input` with `config`.
pub fn parse_with(input: &str, config: &MarkupConfig) -> Result<Compound, MarkupError> {
    MarkupParser::new(config.clone()).parse(input)
}
