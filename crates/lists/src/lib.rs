// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! List literal tokenizer for command-line option values.
//!
//! A shell splits `--nums [1, 2, [3, 4], 5]` into the tokens `[1,`, `2,`,
//! `[3,`, `4],` and `5]`. This crate reassembles such a literal from a token
//! [`Cursor`], balancing delimiters across tokens, and decomposes it into a
//! [`Nested`] tree of leaf values.
//!
//! # Quick Start
//!
//! ```ignore
//! use argtree_lists::{Cursor, ListTokenizer, Nested};
//!
//! let tokens: Vec<String> = ["[1,", "2,", "[3,4],5]"].map(String::from).to_vec();
//! let mut cursor = Cursor::new(&tokens);
//! let value = ListTokenizer::default().parse(&mut cursor, |s| s.parse::<i64>())?;
//! assert_eq!(value.depth(), 2);
//! assert!(cursor.is_exhausted());
//! ```
//!
//! # Components
//!
//! - [`Cursor`] - forward-only position over the remaining tokens
//! - [`DelimiterSet`] - candidate opening/closing pairs, default `[]`, `()`, `{}`
//! - [`ListTokenizer`] - balances delimiters and recursively splits segments
//! - [`Nested`] - the resulting tree of leaves

mod cursor;
mod delimiter;
mod error;
mod nested;
mod tokenizer;

pub use cursor::Cursor;
pub use delimiter::{DelimiterError, DelimiterPair, DelimiterSet};
pub use error::ListError;
pub use nested::Nested;
pub use tokenizer::{split_top_level, ListConfig, ListTokenizer, MatchPolicy, DEFAULT_MAX_DEPTH};
