// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Delimiter pairs and opening-pair detection.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors building a [`DelimiterSet`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DelimiterError {
    #[error("delimiter set must contain at least one pair")]
    Empty,
    #[error("delimiter pair '{0}{0}' opens and closes with the same character")]
    SameCharacter(char),
    #[error("delimiter character '{0}' is used by more than one pair")]
    Reused(char),
}

/// A matched opening/closing character pair bounding a list literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DelimiterPair {
    pub open: char,
    pub close: char,
}

impl DelimiterPair {
    pub const BRACKET: DelimiterPair = DelimiterPair::new('[', ']');
    pub const PAREN: DelimiterPair = DelimiterPair::new('(', ')');
    pub const BRACE: DelimiterPair = DelimiterPair::new('{', '}');

    pub const fn new(open: char, close: char) -> Self {
        Self { open, close }
    }

    /// Signed balance contribution of `text`: opening count minus closing count.
    pub fn balance(&self, text: &str) -> isize {
        text.chars().fold(0, |acc, c| {
            if c == self.open {
                acc + 1
            } else if c == self.close {
                acc - 1
            } else {
                acc
            }
        })
    }
}

impl std::fmt::Display for DelimiterPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.open, self.close)
    }
}

/// Ordered candidate delimiter pairs.
///
/// No character may belong to more than one pair, so every character is
/// unambiguously an opener, a closer, or neither.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelimiterSet {
    pairs: Vec<DelimiterPair>,
}

impl Default for DelimiterSet {
    fn default() -> Self {
        Self {
            pairs: vec![
                DelimiterPair::BRACKET,
                DelimiterPair::PAREN,
                DelimiterPair::BRACE,
            ],
        }
    }
}

impl DelimiterSet {
    /// Build a set from candidate pairs, rejecting ambiguous definitions.
    pub fn new(pairs: impl IntoIterator<Item = DelimiterPair>) -> Result<Self, DelimiterError> {
        let pairs: Vec<DelimiterPair> = pairs.into_iter().collect();
        if pairs.is_empty() {
            return Err(DelimiterError::Empty);
        }
        let mut seen = std::collections::HashSet::new();
        for pair in &pairs {
            if pair.open == pair.close {
                return Err(DelimiterError::SameCharacter(pair.open));
            }
            for c in [pair.open, pair.close] {
                if !seen.insert(c) {
                    return Err(DelimiterError::Reused(c));
                }
            }
        }
        Ok(Self { pairs })
    }

    pub fn pairs(&self) -> &[DelimiterPair] {
        &self.pairs
    }

    /// The pair opened by `c`, if any.
    pub fn pair_opened_by(&self, c: char) -> Option<DelimiterPair> {
        self.pairs.iter().copied().find(|p| p.open == c)
    }

    /// The pair closed by `c`, if any.
    pub fn pair_closed_by(&self, c: char) -> Option<DelimiterPair> {
        self.pairs.iter().copied().find(|p| p.close == c)
    }

    /// Find the first character of `token` that opens any candidate pair.
    ///
    /// Returns the byte offset of that character and its pair. Closing
    /// characters appearing earlier in the token are not considered.
    pub fn find_opening(&self, token: &str) -> Option<(usize, DelimiterPair)> {
        token
            .char_indices()
            .find_map(|(i, c)| self.pair_opened_by(c).map(|pair| (i, pair)))
    }

    /// True if `text` starts (after leading whitespace) with an opening character.
    pub fn starts_list(&self, text: &str) -> bool {
        text.trim_start()
            .chars()
            .next()
            .is_some_and(|c| self.pair_opened_by(c).is_some())
    }
}

#[cfg(test)]
#[path = "delimiter_tests.rs"]
mod tests;
