// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::io::IsTerminal;

pub mod codes {
    /// Section headers: steel blue
    pub const HEADER: u8 = 74;
    /// Commands, shortcuts and literals: light grey
    pub const LITERAL: u8 = 250;
    /// Parameter placeholders and context: medium grey
    pub const CONTEXT: u8 = 245;
    /// Shaded rows: darker grey
    pub const MUTED: u8 = 240;

    /// Pre-formatted ANSI escape sequences for use in tests
    #[cfg(test)]
    pub const HEADER_START: &str = "\x1b[38;5;74m";
    #[cfg(test)]
    pub const LITERAL_START: &str = "\x1b[38;5;250m";
    #[cfg(test)]
    pub const CONTEXT_START: &str = "\x1b[38;5;245m";
    #[cfg(test)]
    pub const MUTED_START: &str = "\x1b[38;5;240m";
    #[cfg(test)]
    pub const RESET: &str = "\x1b[0m";
}

/// Determine if color output should be enabled.
///
/// Priority: `NO_COLOR=1` disables → `COLOR=1` forces → TTY check.
pub fn should_colorize() -> bool {
    if crate::env::no_color() {
        return false;
    }
    if crate::env::force_color() {
        return true;
    }
    std::io::stdout().is_terminal()
}

fn fg256(code: u8) -> String {
    format!("\x1b[38;5;{code}m")
}

const RESET: &str = "\x1b[0m";

fn paint(code: u8, text: &str) -> String {
    format!("{}{}{}", fg256(code), text, RESET)
}

pub fn apply_header(text: &str) -> String {
    paint(codes::HEADER, text)
}

pub fn apply_literal(text: &str) -> String {
    paint(codes::LITERAL, text)
}

pub fn apply_context(text: &str) -> String {
    paint(codes::CONTEXT, text)
}

pub fn apply_muted(text: &str) -> String {
    paint(codes::MUTED, text)
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
