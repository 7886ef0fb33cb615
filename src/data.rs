/* Data models */

use indexmap::IndexMap;
use std::fmt::Display;
use std::str::FromStr;

/// Ordered key-value storage for JSON objects. Keys keep the position of their
/// first insertion; inserting a repeated key replaces the value in place.
pub type Map = IndexMap<String, Value>;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<Value>),
    Object(Map),
}

/// A decoded number literal. Whether a literal becomes an `Int` or a `Float`
/// depends only on the presence of a `.` in its source text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    // Raw source slice. Strings keep their quotes and unprocessed escapes.
    pub text: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    BraceOpen,
    BraceClose,
    BracketOpen,
    BracketClose,
    Colon,
    Comma,
    String,
    Number,
    Bool,
    Null,
    Invalid,
}

impl TokenKind {
    /// Maps a raw token text to the kind it would be scanned as.
    pub fn classify(text: &str) -> Self {
        match text {
            "{" => TokenKind::BraceOpen,
            "}" => TokenKind::BraceClose,
            "[" => TokenKind::BracketOpen,
            "]" => TokenKind::BracketClose,
            ":" => TokenKind::Colon,
            "," => TokenKind::Comma,
            "true" | "false" => TokenKind::Bool,
            "null" => TokenKind::Null,
            _ => match text.chars().next() {
                Some('"') => TokenKind::String,
                Some('-' | '0'..='9') => TokenKind::Number,
                _ => TokenKind::Invalid,
            },
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::BraceOpen => "BraceOpen",
            TokenKind::BraceClose => "BraceClose",
            TokenKind::BracketOpen => "BracketOpen",
            TokenKind::BracketClose => "BracketClose",
            TokenKind::Colon => "Colon",
            TokenKind::Comma => "Comma",
            TokenKind::String => "String",
            TokenKind::Number => "Number",
            TokenKind::Bool => "Bool",
            TokenKind::Null => "Null",
            TokenKind::Invalid => "Invalid",
        }
    }

    /// Whether a token of this kind can begin a value.
    pub const fn starts_value(self) -> bool {
        matches!(
            self,
            TokenKind::BraceOpen
                | TokenKind::BracketOpen
                | TokenKind::String
                | TokenKind::Number
                | TokenKind::Bool
                | TokenKind::Null
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} '{}'", self.kind, self.text)
    }
}

impl<'a> Token<'a> {
    pub const fn new(kind: TokenKind, text: &'a str) -> Self {
        Self { kind, text }
    }
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the integer if this is an `Int` number.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Number(Number::Int(n)) => Some(*n),
            _ => None,
        }
    }

    /// Returns any number widened to `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(Number::Int(n)) => Some(*n as f64),
            Value::Number(Number::Float(n)) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Looks up a member of an object. Returns `None` for any other variant.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|map| map.get(key))
    }
}

impl Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Number::Int(n) => write!(f, "{n}"),
            Number::Float(n) => write!(f, "{n}"),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(Number::Int(n))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(Number::Float(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<Map> for Value {
    fn from(map: Map) -> Self {
        Value::Object(map)
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Value::Object(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl FromStr for Value {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse(s)
    }
}
