use crate::data::{Token, TokenKind};
use crate::errors::LexError;
use std::iter::Peekable;
use std::str::Chars;
use tracing::trace;

// Literals are scanned greedily over the union of the characters of their
// family, and only kept if the run spells a literal exactly.
const BOOL_CHARS: &str = "truefals";
const NULL_CHARS: &str = "nul";

/// Scans a whole text into its token sequence.
pub fn tokenize(source: &str) -> Result<Vec<Token<'_>>, LexError> {
    Scanner::new(source).tokenize()
}

pub struct Scanner<'a> {
    // The original string, sliced to produce each token's raw text.
    // Iteration goes through `char_iter` so multi-byte characters are never split.
    source: &'a str,
    char_iter: Peekable<Chars<'a>>,
    // Byte indices into `source`. A single char advances `current` by 1 to 4 bytes.
    start: usize,
    current: usize,
    // Characters consumed so far. This is what errors report, so it counts
    // code points instead of bytes.
    offset: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            char_iter: source.chars().peekable(),
            start: 0,
            current: 0,
            offset: 0,
        }
    }

    pub fn tokenize(mut self) -> Result<Vec<Token<'a>>, LexError> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }
        Ok(tokens)
    }

    /// Returns the next token, or `None` once the input is exhausted.
    pub fn next_token(&mut self) -> Result<Option<Token<'a>>, LexError> {
        loop {
            self.skip_whitespace();
            self.start = self.current;
            let start_offset = self.offset;

            let Some(ch) = self.consume() else {
                return Ok(None);
            };

            let token = match ch {
                '{' | '}' | '[' | ']' | ':' | ',' => {
                    Some(self.make_token(TokenKind::classify(self.lexeme())))
                }
                '"' => Some(self.make_string()),
                't' | 'f' => self.make_literal(BOOL_CHARS, TokenKind::Bool),
                'n' => self.make_literal(NULL_CHARS, TokenKind::Null),
                '-' | '0'..='9' => Some(self.make_number()),
                character => {
                    return Err(LexError {
                        offset: start_offset,
                        character,
                    })
                }
            };

            if token.is_some() {
                return Ok(token);
            }
        }
    }

    ///////////////////////////////////////////////////////////////////////////////////////////////////////////
    // Token scanning

    fn make_string(&mut self) -> Token<'a> {
        // Escapes are kept raw here. A backslash swallows whatever follows it,
        // so only an unescaped quote ends the string.
        loop {
            match self.peek() {
                Some('"') => {
                    self.advance();
                    break;
                }
                Some('\\') => {
                    self.advance();
                    self.advance();
                }
                Some(_) => self.advance(),
                None => {
                    trace!(offset = self.offset, "string runs to end of input");
                    break;
                }
            }
        }

        self.make_token(TokenKind::String)
    }

    fn make_number(&mut self) -> Token<'a> {
        // Any run of number characters is accepted; decoding decides what it means.
        self.skip_while(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'));
        self.make_token(TokenKind::Number)
    }

    fn make_literal(&mut self, family: &str, kind: TokenKind) -> Option<Token<'a>> {
        self.skip_while(|c| family.contains(c));

        let text = self.lexeme();
        if TokenKind::classify(text) == kind {
            Some(self.make_token(kind))
        } else {
            trace!(text, "discarding unknown literal");
            None
        }
    }

    fn make_token(&self, kind: TokenKind) -> Token<'a> {
        Token::new(kind, self.lexeme())
    }

    fn lexeme(&self) -> &'a str {
        &self.source[self.start..self.current]
    }

    ///////////////////////////////////////////////////////////////////////////////////////////////////////////
    // Scanning control

    fn advance(&mut self) {
        if let Some(ch) = self.char_iter.next() {
            self.current += ch.len_utf8();
            self.offset += 1;
        }
    }

    fn consume(&mut self) -> Option<char> {
        let ch = self.peek();
        self.advance();
        ch
    }

    fn peek(&mut self) -> Option<char> {
        self.char_iter.peek().copied()
    }

    fn skip_while(&mut self, pred: impl Fn(char) -> bool) {
        while self.peek().is_some_and(&pred) {
            self.advance();
        }
    }

    fn skip_whitespace(&mut self) {
        self.skip_while(|c| matches!(c, ' ' | '\t' | '\r' | '\n'));
    }
}
