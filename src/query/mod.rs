//! Query string configuration.
//!
//! Parses strings like `?w=600&h=400&top=one+does+not&bottom=simply&fit=contain`
//! into a [`MemeRequest`] for building a [`CanvasConfig`](crate::CanvasConfig)
//! and [`Captions`](crate::Captions).
//!
//! # Example
//!
//! ```
//! use memelayout::query;
//!
//! let result = query::parse("w=600&h=400&top=Hello&bottom=World&volume=40");
//! assert!(result.warnings.is_empty());
//!
//! let config = result.request.to_config();
//! assert_eq!((config.width, config.height), (600, 400));
//! assert_eq!(result.request.captions().top, "Hello");
//! ```
//!
//! Parsing never fails: problems are reported as [`ParseWarning`]s and the
//! offending key is ignored.

mod parse;
pub mod request;

pub use request::MemeRequest;

use alloc::string::String;
use alloc::vec::Vec;

/// Result of parsing a query string.
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Parsed request.
    pub request: MemeRequest,
    /// Non-fatal parse warnings.
    pub warnings: Vec<ParseWarning>,
}

/// Non-fatal warning from query string parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseWarning {
    /// A key appeared more than once (last value wins).
    DuplicateKey { key: String, value: String },
    /// A key was not recognized.
    KeyNotRecognized { key: String, value: String },
    /// A key was recognized but its value could not be parsed.
    ValueInvalid {
        key: &'static str,
        value: String,
        reason: &'static str,
    },
}

/// Parse a query string (with or without leading `?`).
pub fn parse(query: &str) -> ParseResult {
    let (request, warnings) = parse::parse_query(query);
    ParseResult { request, warnings }
}
