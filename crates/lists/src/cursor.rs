// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Forward-only token cursor shared by parameter interpreters.

/// A read position over the remaining tokens of one parse invocation.
///
/// Every interpreter consulted while resolving an option receives the same
/// cursor by `&mut`, consumes exactly the tokens it needs, and leaves the rest
/// for the next interpreter or the next option.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    tokens: &'a [String],
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor positioned at the first token.
    pub fn new(tokens: &'a [String]) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Consume and return the next token.
    pub fn next_token(&mut self) -> Option<&'a str> {
        let token = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(token.as_str())
    }

    /// Return the next token without consuming it.
    pub fn peek(&self) -> Option<&'a str> {
        self.tokens.get(self.pos).map(String::as_str)
    }

    /// Number of tokens consumed so far.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Tokens not yet consumed.
    pub fn remaining(&self) -> &'a [String] {
        self.tokens.get(self.pos..).unwrap_or(&[])
    }

    /// True once every token has been consumed.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.pos >= self.tokens.len()
    }
}

impl<'a> Iterator for Cursor<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining().len();
        (n, Some(n))
    }
}

#[cfg(test)]
#[path = "cursor_tests.rs"]
mod tests;
