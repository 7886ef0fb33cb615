//! A permissive JSON codec: a tokenizer, a recursive-descent parser producing
//! an ordered [Value] tree, and a serializer turning such trees back into text.
//!
//! The accepted language is broader than JSON. Commas are not validated, tokens
//! between object members are skipped, and number literals without a `.` are
//! integers made of their leading digits (`1e2` is `1`).
mod cursor;
mod data;
mod decode;
mod errors;
mod limits;
mod parser;
mod scanner;
mod serializer;

pub use cursor::TokenCursor;
pub use data::{Map, Number, Token, TokenKind, Value};
pub use decode::{decode_number, decode_string};
pub use errors::{Error, LexError, ParseError, SerializeError};
pub use limits::{Limits, DEFAULT_PARSE_DEPTH, DEFAULT_SERIALIZE_DEPTH};
pub use serializer::is_list;

use tracing::debug;

/// Scans a JSON text into its token sequence, or returns a [LexError].
pub fn tokenize(text: &str) -> Result<Vec<Token<'_>>, LexError> {
    scanner::tokenize(text)
}

/// Parses a JSON text into a [Value], or returns an [Error].
pub fn parse(text: impl AsRef<str>) -> Result<Value, Error> {
    parse_with_limits(text, Limits::default())
}

/// Same as [parse], with explicit nesting limits.
pub fn parse_with_limits(text: impl AsRef<str>, limits: Limits) -> Result<Value, Error> {
    let tokens = tokenize(text.as_ref()).inspect_err(|err| debug!(%err, "tokenizing failed"))?;
    debug!(tokens = tokens.len(), "tokenized input");

    let value = parser::JsonParser::new(tokens, limits)
        .parse()
        .inspect_err(|err| debug!(%err, "parsing failed"))?;
    Ok(value)
}

/// Serializes a [Value] into compact JSON text.
pub fn serialize(value: &Value) -> Result<String, SerializeError> {
    serialize_with_limits(value, Limits::default())
}

/// Same as [serialize], with an explicit depth guard.
pub fn serialize_with_limits(value: &Value, limits: Limits) -> Result<String, SerializeError> {
    serializer::Serializer::new(limits)
        .serialize(value)
        .inspect_err(|err| debug!(%err, "serialization failed"))
}
