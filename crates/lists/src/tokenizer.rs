// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Multi-token list literal tokenizer.
//!
//! Parsing is applied recursively, and each invocation picks its own
//! delimiter pair:
//!
//! 1. Pull one token and find the first opening character of any pair. If there
//!    is none the token is a scalar and goes straight to the element parser.
//! 2. Keep pulling tokens until the chosen pair is balanced.
//! 3. Concatenate the tokens, strip the outermost pair, and split the body at
//!    top-level commas.
//! 4. Segments that start with an opening character are parsed as nested lists;
//!    all other segments go to the element parser.

use serde::{Deserialize, Serialize};

use crate::cursor::Cursor;
use crate::delimiter::{DelimiterPair, DelimiterSet};
use crate::error::ListError;
use crate::nested::Nested;

/// How delimiter balance is tracked while a literal spans tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MatchPolicy {
    /// Track every candidate pair on a stack; a closing character must close
    /// the innermost open pair.
    #[default]
    Strict,
    /// Count only the outermost pair's characters. A closing character of a
    /// different pair is not detected while the literal is being collected.
    Loose,
}

/// Nesting limit of [`ListConfig::default`].
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Tokenizer configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListConfig {
    /// Candidate delimiter pairs.
    pub delimiters: DelimiterSet,
    /// Balance tracking policy.
    pub policy: MatchPolicy,
    /// Maximum nesting depth. The outermost list is depth 1. Parsing recurses
    /// once per level, so 0 (unlimited) is only safe for trusted input.
    pub max_depth: usize,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            delimiters: DelimiterSet::default(),
            policy: MatchPolicy::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Reassembles list literals from a token cursor.
#[derive(Debug, Clone, Default)]
pub struct ListTokenizer {
    config: ListConfig,
}

impl ListTokenizer {
    pub fn new(config: ListConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ListConfig {
        &self.config
    }

    /// Parse one value from `cursor`: a scalar leaf, or a list literal that
    /// may span several tokens.
    ///
    /// `element` converts each leaf. The cursor is left positioned just past
    /// the token that closed the literal.
    pub fn parse<T, E, F>(&self, cursor: &mut Cursor<'_>, element: F) -> Result<Nested<T>, ListError<E>>
    where
        F: Fn(&str) -> Result<T, E>,
    {
        self.parse_at_depth(cursor, &element, 1)
    }

    fn parse_at_depth<T, E, F>(
        &self,
        cursor: &mut Cursor<'_>,
        element: &F,
        depth: usize,
    ) -> Result<Nested<T>, ListError<E>>
    where
        F: Fn(&str) -> Result<T, E>,
    {
        let first = cursor.next_token().ok_or(ListError::NoInput)?;

        let Some((start, pair)) = self.config.delimiters.find_opening(first) else {
            return element(first.trim())
                .map(Nested::Leaf)
                .map_err(ListError::Element);
        };

        self.check_depth(depth)?;

        if !first[..start].trim().is_empty() {
            return Err(ListError::Malformed {
                literal: first.to_string(),
            });
        }

        tracing::debug!(pair = %pair, depth, "list literal opened");

        let literal = match self.config.policy {
            MatchPolicy::Strict => self.collect_strict(&first[start..], pair, cursor, depth)?,
            MatchPolicy::Loose => collect_loose(&first[start..], pair, cursor)?,
        };
        let body = strip_outer(&literal, pair)?;

        let segments = split_top_level(body, &self.config.delimiters);
        let mut items = Vec::with_capacity(segments.len());
        for segment in segments {
            if self.config.delimiters.starts_list(segment) {
                let owned = [segment.to_string()];
                let mut sub = Cursor::new(&owned);
                items.push(self.parse_at_depth(&mut sub, element, depth + 1)?);
            } else {
                items.push(Nested::Leaf(element(segment).map_err(ListError::Element)?));
            }
        }
        Ok(Nested::List(items))
    }

    fn check_depth<E>(&self, depth: usize) -> Result<(), ListError<E>> {
        let max = self.config.max_depth;
        if max > 0 && depth > max {
            return Err(ListError::ExcessiveNesting { depth, max });
        }
        Ok(())
    }

    /// Collect tokens until the outermost pair closes, checking that every
    /// closing character matches the innermost open pair.
    ///
    /// `depth` is the nesting depth of the outermost pair; the limit is
    /// enforced here before any nested level recurses.
    fn collect_strict<E>(
        &self,
        first: &str,
        pair: DelimiterPair,
        cursor: &mut Cursor<'_>,
        depth: usize,
    ) -> Result<String, ListError<E>> {
        let delimiters = &self.config.delimiters;
        let mut stack: Vec<DelimiterPair> = Vec::new();
        let mut literal = String::new();
        let mut token = first;

        loop {
            for (i, c) in token.char_indices() {
                if let Some(open) = delimiters.pair_opened_by(c) {
                    stack.push(open);
                    self.check_depth(depth + stack.len() - 1)?;
                } else if let Some(close) = delimiters.pair_closed_by(c) {
                    match stack.pop() {
                        Some(top) if top == close => {}
                        Some(top) => {
                            return Err(ListError::Mismatched {
                                expected: top.close,
                                found: c,
                            })
                        }
                        None => return Err(ListError::Unopened { found: c }),
                    }
                }

                if stack.is_empty() {
                    let (head, tail) = token.split_at(i + c.len_utf8());
                    literal.push_str(head);
                    return match tail.trim().chars().next() {
                        None => Ok(literal),
                        Some(c) if delimiters.pair_closed_by(c).is_some() => {
                            Err(ListError::Unopened { found: c })
                        }
                        Some(_) => Err(ListError::Malformed {
                            literal: format!("{literal}{tail}"),
                        }),
                    };
                }
            }

            literal.push_str(token);
            token = cursor.next_token().ok_or(ListError::Incomplete {
                open: pair.open,
                close: pair.close,
            })?;
            tracing::trace!(token, open = stack.len(), "list literal continues");
        }
    }
}

/// Collect tokens until the chosen pair's opening and closing counts balance.
fn collect_loose<E>(
    first: &str,
    pair: DelimiterPair,
    cursor: &mut Cursor<'_>,
) -> Result<String, ListError<E>> {
    let mut literal = first.to_string();
    let mut balance = pair.balance(first);
    while balance != 0 {
        let token = cursor.next_token().ok_or(ListError::Incomplete {
            open: pair.open,
            close: pair.close,
        })?;
        balance += pair.balance(token);
        literal.push_str(token);
        tracing::trace!(token, balance, "list literal continues");
    }
    Ok(literal)
}

/// Strip exactly one leading opening and one trailing closing character.
fn strip_outer<E>(literal: &str, pair: DelimiterPair) -> Result<&str, ListError<E>> {
    let trimmed = literal.trim();
    trimmed
        .strip_prefix(pair.open)
        .and_then(|rest| rest.strip_suffix(pair.close))
        .ok_or_else(|| ListError::Malformed {
            literal: trimmed.to_string(),
        })
}

/// Split a list body at commas that are not enclosed in any nested pair.
///
/// Segments are trimmed. A body containing only whitespace has no segments.
///
/// ```ignore
/// use argtree_lists::{split_top_level, DelimiterSet};
///
/// let parts = split_top_level("1,[2,3],4", &DelimiterSet::default());
/// assert_eq!(parts, vec!["1", "[2,3]", "4"]);
/// ```
pub fn split_top_level<'a>(body: &'a str, delimiters: &DelimiterSet) -> Vec<&'a str> {
    if body.trim().is_empty() {
        return Vec::new();
    }

    let mut segments = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in body.char_indices() {
        if delimiters.pair_opened_by(c).is_some() {
            depth += 1;
        } else if delimiters.pair_closed_by(c).is_some() {
            depth = depth.saturating_sub(1);
        } else if c == ',' && depth == 0 {
            segments.push(body[start..i].trim());
            start = i + 1;
        }
    }
    segments.push(body[start..].trim());
    segments
}

#[cfg(test)]
#[path = "tokenizer_tests.rs"]
mod tests;
