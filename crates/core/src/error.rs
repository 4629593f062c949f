// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Registration-time and parse-time errors.

use argtree_lists::ListError;
use thiserror::Error;

use crate::list_fmt::or_list;

/// Which registry namespace a duplicate was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Command,
    Option,
    Shortcut,
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            EntryKind::Command => "command name",
            EntryKind::Option => "option key",
            EntryKind::Shortcut => "shortcut",
        })
    }
}

/// Errors in the CLI definition itself.
///
/// These indicate a programming error and are raised while the tree is being
/// built, before any token is parsed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DefinitionError {
    #[error("a command needs at least one name")]
    EmptyNames,

    #[error("option '{key}' needs at least one shortcut")]
    EmptyShortcuts { key: String },

    #[error("invalid name '{name}': names must be non-empty and contain no whitespace")]
    InvalidName { name: String },

    #[error("invalid shortcut '{shortcut}': give shortcuts without leading dashes or whitespace")]
    InvalidShortcut { shortcut: String },

    #[error("duplicate {kind}: {key}")]
    DuplicateKey { kind: EntryKind, key: String },

    #[error("{interpreters} parameter interpreters but {descriptors} descriptors")]
    ParameterCountMismatch {
        interpreters: usize,
        descriptors: usize,
    },

    #[error("selection option '{key}' has no choices")]
    EmptySelection { key: String },

    #[error("a version option needs a program version")]
    MissingVersion,

    #[error("no option or command registered under '{key}'")]
    UnknownKey { key: String },
}

/// Errors raised by a parameter interpreter.
///
/// These carry no option context; [`ParameterError::for_option`] attaches it
/// when the dispatcher reports the failure.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParameterError {
    #[error("missing value")]
    Missing,

    #[error("invalid {expected} value '{value}'")]
    Format {
        value: String,
        expected: &'static str,
    },

    #[error("'{value}' is not one of {}", or_list(choices))]
    InvalidSelection { value: String, choices: Vec<String> },

    #[error("unterminated list: '{open}' is never closed by '{close}'")]
    IncompleteList { open: char, close: char },

    #[error("mismatched delimiter: expected '{expected}', found '{found}'")]
    MismatchedDelimiter { expected: char, found: char },

    #[error("unexpected closing delimiter '{found}'")]
    UnopenedDelimiter { found: char },

    #[error("malformed list literal: {literal}")]
    MalformedList { literal: String },

    #[error("list nesting depth {depth} exceeds maximum of {max}")]
    ExcessiveNesting { depth: usize, max: usize },
}

impl From<ListError<ParameterError>> for ParameterError {
    fn from(err: ListError<ParameterError>) -> Self {
        match err {
            ListError::NoInput => ParameterError::Missing,
            ListError::Incomplete { open, close } => ParameterError::IncompleteList { open, close },
            ListError::Mismatched { expected, found } => {
                ParameterError::MismatchedDelimiter { expected, found }
            }
            ListError::Unopened { found } => ParameterError::UnopenedDelimiter { found },
            ListError::Malformed { literal } => ParameterError::MalformedList { literal },
            ListError::ExcessiveNesting { depth, max } => {
                ParameterError::ExcessiveNesting { depth, max }
            }
            ListError::Element(inner) => inner,
        }
    }
}

impl ParameterError {
    /// Attach the option key and parameter descriptor being resolved.
    pub fn for_option(self, option: &str, parameter: &str) -> ParseError {
        let option = option.to_string();
        match self {
            ParameterError::Missing => ParseError::IncompleteArgument {
                option,
                parameter: parameter.to_string(),
            },
            ParameterError::Format { value, expected } => ParseError::ParameterFormat {
                option,
                value,
                expected,
            },
            ParameterError::InvalidSelection { value, choices } => ParseError::InvalidSelection {
                option,
                value,
                choices,
            },
            ParameterError::IncompleteList { open, close } => ParseError::IncompleteList {
                option,
                open,
                close,
            },
            ParameterError::MismatchedDelimiter { expected, found } => {
                ParseError::MismatchedDelimiter {
                    option,
                    expected,
                    found,
                }
            }
            ParameterError::UnopenedDelimiter { found } => {
                ParseError::UnopenedDelimiter { option, found }
            }
            ParameterError::MalformedList { literal } => ParseError::MalformedList { option, literal },
            ParameterError::ExcessiveNesting { depth, max } => ParseError::ExcessiveNesting {
                option,
                depth,
                max,
            },
        }
    }
}

/// Errors in the token sequence handed to `parse`.
///
/// A parse that fails with one of these invokes no callback.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseError {
    #[error("unknown option: {token}")]
    UnknownOption { token: String },

    #[error("unexpected argument '{token}' for {command}")]
    UnexpectedArgument { token: String, command: String },

    #[error("option '{option}' is missing its <{parameter}> value")]
    IncompleteArgument { option: String, parameter: String },

    #[error("option '{option}': invalid {expected} value '{value}'")]
    ParameterFormat {
        option: String,
        value: String,
        expected: &'static str,
    },

    #[error("option '{option}': '{value}' is not one of {}", or_list(choices))]
    InvalidSelection {
        option: String,
        value: String,
        choices: Vec<String>,
    },

    #[error("option '{option}': unterminated list, '{open}' is never closed by '{close}'")]
    IncompleteList {
        option: String,
        open: char,
        close: char,
    },

    #[error("option '{option}': mismatched delimiter, expected '{expected}' but found '{found}'")]
    MismatchedDelimiter {
        option: String,
        expected: char,
        found: char,
    },

    #[error("option '{option}': unexpected closing delimiter '{found}'")]
    UnopenedDelimiter { option: String, found: char },

    #[error("option '{option}': malformed list literal {literal}")]
    MalformedList { option: String, literal: String },

    #[error("option '{option}': list nesting depth {depth} exceeds maximum of {max}")]
    ExcessiveNesting {
        option: String,
        depth: usize,
        max: usize,
    },
}

impl ParseError {
    /// Key of the option being resolved, if the error came from an interpreter.
    pub fn option(&self) -> Option<&str> {
        match self {
            ParseError::UnknownOption { .. } | ParseError::UnexpectedArgument { .. } => None,
            ParseError::IncompleteArgument { option, .. }
            | ParseError::ParameterFormat { option, .. }
            | ParseError::InvalidSelection { option, .. }
            | ParseError::IncompleteList { option, .. }
            | ParseError::MismatchedDelimiter { option, .. }
            | ParseError::UnopenedDelimiter { option, .. }
            | ParseError::MalformedList { option, .. }
            | ParseError::ExcessiveNesting { option, .. } => Some(option),
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
