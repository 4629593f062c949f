// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use argtree_core::ParseError;
use thiserror::Error;

/// Exit status for command-line usage errors.
pub const USAGE: i32 = 2;

/// An error that carries the process exit status.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ExitError {
    pub code: i32,
    pub message: String,
}

impl ExitError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl From<ParseError> for ExitError {
    fn from(err: ParseError) -> Self {
        Self::new(USAGE, err.to_string())
    }
}
