// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! List tokenizer errors.

use thiserror::Error;

/// Errors produced while reassembling and decomposing a list literal.
///
/// `E` is the error type of the caller-supplied element parser and is
/// carried unchanged in [`ListError::Element`].
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ListError<E> {
    /// The cursor held no token at all.
    #[error("expected a list literal, found end of input")]
    NoInput,

    /// The cursor ran out before the literal's opening delimiter was closed.
    #[error("unterminated list: '{open}' is never closed by '{close}'")]
    Incomplete { open: char, close: char },

    /// A closing character that does not close the innermost open pair.
    #[error("mismatched delimiter: expected '{expected}', found '{found}'")]
    Mismatched { expected: char, found: char },

    /// A closing character with no pair open.
    #[error("unexpected closing delimiter '{found}'")]
    Unopened { found: char },

    /// Content outside the outermost delimiter pair.
    #[error("malformed list literal: {literal}")]
    Malformed { literal: String },

    /// Nesting deeper than the configured maximum.
    #[error("list nesting depth {depth} exceeds maximum of {max}")]
    ExcessiveNesting { depth: usize, max: usize },

    /// The element parser rejected a leaf.
    #[error(transparent)]
    Element(E),
}
