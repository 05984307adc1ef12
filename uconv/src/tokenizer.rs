//! Whitespace tokenizer with a forward-only cursor

/// Tokens of one phrase, consumed left to right
#[derive(Debug, Clone)]
pub struct TokenStream<'a> {
    tokens: Vec<&'a str>,
    pos: usize,
}

impl<'a> TokenStream<'a> {
    /// Split on any Unicode whitespace; runs of whitespace never yield empty tokens
    pub fn new(input: &'a str) -> Self {
        Self {
            tokens: input.split_whitespace().collect(),
            pos: 0,
        }
    }

    pub fn peek(&self) -> Option<&'a str> {
        self.tokens.get(self.pos).copied()
    }

    pub fn is_exhausted(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Everything not yet consumed
    pub fn rest(&self) -> &[&'a str] {
        &self.tokens[self.pos.min(self.tokens.len())..]
    }
}

impl<'a> Iterator for TokenStream<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let token = self.peek()?;
        self.pos += 1;
        Some(token)
    }
}
