use crate::data::Token;

/// Tokens on each side of the failure point quoted in parse errors.
pub const CONTEXT_WIDTH: usize = 2;

/// Forward-only reader over a scanned token sequence. Every token is handed
/// out at most once.
#[derive(Debug, Clone)]
pub struct TokenCursor<'a> {
    tokens: Vec<Token<'a>>,
    index: usize,
}

impl<'a> TokenCursor<'a> {
    pub fn new(tokens: Vec<Token<'a>>) -> Self {
        Self { tokens, index: 0 }
    }

    pub fn next_token(&mut self) -> Option<Token<'a>> {
        let token = self.tokens.get(self.index).copied()?;
        self.index += 1;
        Some(token)
    }

    /// Number of tokens not yet handed out.
    pub fn remaining(&self) -> usize {
        self.tokens.len() - self.index
    }

    pub fn get(&self, index: usize) -> Option<&Token<'a>> {
        self.tokens.get(index)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The last token handed out, surrounded by up to `width` tokens on each side.
    pub fn context(&self, width: usize) -> &[Token<'a>] {
        let current = self.index.saturating_sub(1);
        let from = current.saturating_sub(width);
        let to = (current + width + 1).min(self.tokens.len());
        &self.tokens[from.min(to)..to]
    }
}
