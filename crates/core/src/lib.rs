// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! argtree-core: command tree, typed options and the dispatcher.
//!
//! A tree of [`Command`]s is built once through registration calls, then
//! [`ArgumentParser::parse`] resolves a token sequence into a command path
//! and an [`OptionValues`] map, invoking callbacks along the way.

pub mod command;
pub mod error;
pub mod help;
pub mod interpreter;
pub mod list_fmt;
pub mod option;
pub mod parser;
pub mod registry;
pub mod style;
pub mod value;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use argtree_lists::{
    split_top_level, Cursor, DelimiterPair, DelimiterSet, ListConfig, ListTokenizer, MatchPolicy,
    Nested, DEFAULT_MAX_DEPTH,
};
pub use command::{help_option, Command, CommandCallback, ParseOutcome};
pub use error::{DefinitionError, EntryKind, ParameterError, ParseError};
pub use help::{CommandSummary, HelpPage, OptionSummary};
pub use interpreter::{Custom, Element, Interpreter, ParameterSet, Selection};
pub use list_fmt::or_list;
pub use option::{display_shortcut, Flow, Invocation, OptionCallback, OptionDef};
pub use parser::{ArgumentParser, ParserSettings, ProgramInfo, DEFAULT_VERSION_TEMPLATE};
pub use registry::Registry;
pub use style::Style;
pub use value::{OptionValues, Value};
