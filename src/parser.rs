use crate::cursor::{TokenCursor, CONTEXT_WIDTH};
use crate::data::{Map, Token, TokenKind, Value};
use crate::decode::{decode_number, decode_string};
use crate::errors::ParseError;
use crate::limits::Limits;
use tracing::trace;

/// Recursive-descent parser over a scanned token sequence.
///
/// The grammar is looser than JSON: commas are never checked, and inside
/// objects anything that is not a key or the closing brace is skipped.
pub struct JsonParser<'a> {
    cursor: TokenCursor<'a>,
    limits: Limits,
    depth: usize,
}

impl<'a> JsonParser<'a> {
    pub fn new(tokens: Vec<Token<'a>>, limits: Limits) -> Self {
        Self {
            cursor: TokenCursor::new(tokens),
            limits,
            depth: 0,
        }
    }

    pub fn parse(mut self) -> Result<Value, ParseError> {
        let Some(token) = self.cursor.next_token() else {
            return self.make_error("Unexpected end of input");
        };
        let value = self.parse_value(token)?;

        if self.cursor.remaining() > 0 {
            trace!(
                remaining = self.cursor.remaining(),
                "ignoring tokens after top-level value"
            );
        }
        Ok(value)
    }

    ///////////////////////////////////////////////////////////////////////////////////////////////////////////
    // Grammar

    fn parse_value(&mut self, token: Token<'a>) -> Result<Value, ParseError> {
        match token.kind {
            TokenKind::BraceOpen => self.nested(Self::parse_object),
            TokenKind::BracketOpen => self.nested(Self::parse_array),
            TokenKind::String => Ok(Value::String(decode_string(token.text))),
            TokenKind::Number => match decode_number(token.text) {
                Some(n) => Ok(Value::Number(n)),
                None => self.make_error(format!("Invalid number literal '{}'", token.text)),
            },
            TokenKind::Bool => Ok(Value::Bool(token.text == "true")),
            TokenKind::Null => Ok(Value::Null),
            TokenKind::BraceClose
            | TokenKind::BracketClose
            | TokenKind::Colon
            | TokenKind::Comma
            | TokenKind::Invalid => self.make_error(format!("Invalid token type (token {token})")),
        }
    }

    fn parse_object(&mut self) -> Result<Value, ParseError> {
        let mut map = Map::new();

        loop {
            let Some(token) = self.cursor.next_token() else {
                return self.make_error("Expected '}' before end of input");
            };

            match token.kind {
                TokenKind::BraceClose => break,
                TokenKind::String => {
                    let key = decode_string(token.text);

                    if !self.next_is(TokenKind::Colon) {
                        return self.make_error("Expected colon");
                    }

                    let value_token = match self.cursor.next_token() {
                        Some(t) if t.kind.starts_value() => t,
                        _ => return self.make_error("Object keys need a value"),
                    };

                    // A repeated key keeps its first position and takes the newest value
                    let value = self.parse_value(value_token)?;
                    map.insert(key, value);
                }
                // Separators and stray tokens between members
                _ => {}
            }
        }

        Ok(Value::Object(map))
    }

    fn parse_array(&mut self) -> Result<Value, ParseError> {
        let mut items = Vec::new();

        loop {
            let Some(token) = self.cursor.next_token() else {
                return self.make_error("Expected ']' before end of input");
            };

            match token.kind {
                TokenKind::BracketClose => break,
                TokenKind::Comma => continue,
                _ => items.push(self.parse_value(token)?),
            }
        }

        Ok(Value::Array(items))
    }

    ///////////////////////////////////////////////////////////////////////////////////////////////////////////
    // Helpers

    fn nested(
        &mut self,
        parse: fn(&mut Self) -> Result<Value, ParseError>,
    ) -> Result<Value, ParseError> {
        self.depth += 1;
        if self.depth > self.limits.max_parse_depth {
            let msg = format!(
                "Maximum nesting depth of {} exceeded",
                self.limits.max_parse_depth
            );
            return self.make_error(msg);
        }

        let value = parse(self);
        self.depth -= 1;
        value
    }

    fn next_is(&mut self, kind: TokenKind) -> bool {
        self.cursor.next_token().is_some_and(|t| t.kind == kind)
    }

    fn make_error<T>(&self, msg: impl Into<String>) -> Result<T, ParseError> {
        /* Creates a ParseError quoting the tokens around the cursor */
        let context = self
            .cursor
            .context(CONTEXT_WIDTH)
            .iter()
            .map(|t| t.text.to_owned())
            .collect();
        Err(ParseError::new(msg, context))
    }
}
