use thiserror::Error;

/// An input character that no token pattern accepts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unexpected character {character:?} at offset {offset}")]
pub struct LexError {
    /// Position of the character, counted in Unicode scalar values.
    pub offset: usize,
    pub character: char,
}

/// A grammar violation, with the raw text of the tokens around the failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} (near '{}')", .context.join(" "))]
pub struct ParseError {
    pub message: String,
    pub context: Vec<String>,
}

impl ParseError {
    pub fn new(msg: impl Into<String>, context: Vec<String>) -> Self {
        Self {
            message: msg.into(),
            context,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SerializeError {
    #[error("Maximum serialization depth of {max} exceeded (reached {depth})")]
    DepthExceeded { depth: usize, max: usize },
    #[error("Number {0} has no JSON representation")]
    NonFiniteNumber(f64),
}

/// Any failure of [`crate::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}
