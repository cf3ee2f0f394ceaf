//! JSON parsing with precise, cheap source locations.
//!
//! `jsonpin` is a front-end component for tools that read JSON-encoded
//! configuration or intermediate data and need parse errors to name exact
//! `file:line:column` positions, including under tab expansion. A [`Source`]
//! owns (or shares) the raw input bytes and indexes line starts once; the
//! parser scans it under a set of [`ParseOptions`] and either produces an
//! immutable [`Value`] tree or fails with a single located [`ParseError`].
//!
//! Line and column resolution is lazy: the index is only consulted when an
//! error is reported, so successful parses never pay for position lookups.
//!
//! # Examples
//!
//! ```rust
//! use jsonpin::{ParseOptions, Source, parse};
//!
//! let source = Source::new("config.json", r#"{"workers": 4}"#);
//! let value = parse(&source, ParseOptions::default()).unwrap();
//! assert!(value.is_object());
//!
//! let bad = Source::new("config.json", r#"{"workers": }"#);
//! let error = parse(&bad, ParseOptions::default()).unwrap_err();
//! assert_eq!(error.to_string(), "config.json:1:13: unexpected character");
//! ```
//!
//! The strict grammar is RFC 8259 JSON. Four opt-in relaxations
//! (`Infinity`/`NaN` literals, explicit `+` signs, single-quoted strings,
//! dot-leading numbers) are available through [`ParseOptions::relaxed`] or by
//! setting individual flags.

mod error;
mod location;
mod options;
mod parser;
mod source;
mod value;

#[cfg(test)]
mod tests;

pub use error::{LoadError, ParseError};
pub use location::{LineAndColumn, LineAndIndex, Location};
pub use options::ParseOptions;
pub use parser::parse;
pub use source::{DEFAULT_TAB_SIZE, Source};
pub use value::{Array, Map, Value};
