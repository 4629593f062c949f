// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Sectioned help output with post-hoc colorization.
//!
//! A [`HelpPage`] is first rendered as plain text (`Usage:`, `Commands:`,
//! `Options:`) and colors are applied afterwards by [`colorize_help`], so the
//! layout never depends on escape sequences.

use std::fmt::Write;

use argtree_core::{HelpPage, Style};

use crate::color::{apply_context, apply_header, apply_literal};

const USAGE: &str = "Usage:";
const COMMANDS: &str = "Commands:";
const OPTIONS: &str = "Options:";

/// Line builder for plain help text.
struct HelpPrinter {
    buf: String,
    indent: String,
}

impl HelpPrinter {
    fn new(style: &Style) -> Self {
        Self {
            buf: String::new(),
            indent: style.indentation(),
        }
    }

    fn header(&mut self, label: &str) {
        let _ = writeln!(self.buf, "{label}");
    }

    /// Indented text line.
    fn indented(&mut self, text: &str) {
        let _ = writeln!(self.buf, "{}{text}", self.indent);
    }

    /// Two-column entry: label padded to `width`, then the description.
    fn entry(&mut self, label: &str, width: usize, desc: &str) {
        if desc.is_empty() {
            self.indented(label);
        } else {
            let _ = writeln!(self.buf, "{}{label:<width$}  {desc}", self.indent);
        }
    }

    fn plain(&mut self, text: &str) {
        let _ = writeln!(self.buf, "{text}");
    }

    fn blank(&mut self) {
        self.buf.push('\n');
    }

    fn finish(self) -> String {
        self.buf
    }
}

/// Render a help page as uncolored text.
///
/// Command and option labels share one column width so both sections line up.
pub fn render_plain(page: &HelpPage, style: &Style) -> String {
    let commands: Vec<(String, &str)> = page
        .commands
        .iter()
        .map(|c| (c.label(style), c.help.as_str()))
        .collect();
    let options: Vec<(String, &str)> = page
        .options
        .iter()
        .map(|o| (o.label(style), o.help.as_str()))
        .collect();
    let width = commands
        .iter()
        .chain(&options)
        .map(|(label, _)| label.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = HelpPrinter::new(style);
    if !page.help.is_empty() {
        out.plain(&page.help);
        out.blank();
    }
    out.header(USAGE);
    out.indented(&page.usage_line());

    for (title, rows) in [(COMMANDS, &commands), (OPTIONS, &options)] {
        if rows.is_empty() {
            continue;
        }
        out.blank();
        out.header(title);
        for (label, desc) in rows {
            out.entry(label, width, desc);
        }
    }
    out.finish()
}

/// Render a help page, colorized when `colorize` is set.
pub fn format_help(page: &HelpPage, style: &Style, colorize: bool) -> String {
    let plain = render_plain(page, style);
    if colorize {
        let mut colored = colorize_help(&plain, style);
        colored.push('\n');
        colored
    } else {
        plain
    }
}

#[derive(Clone, Copy, PartialEq)]
enum Section {
    Preamble,
    Usage,
    Commands,
    Options,
}

/// Apply the palette to plain help text produced by [`render_plain`].
///
/// - Section headers → HEADER
/// - Usage line: program words → LITERAL, `[...]` and placeholders → CONTEXT
/// - Command labels → LITERAL
/// - Option labels: shortcuts → LITERAL, parameter placeholders → CONTEXT
pub fn colorize_help(text: &str, style: &Style) -> String {
    let indent = style.indentation();
    let mut section = Section::Preamble;
    let mut lines = Vec::new();

    for line in text.lines() {
        let next = match line {
            USAGE => Some(Section::Usage),
            COMMANDS => Some(Section::Commands),
            OPTIONS => Some(Section::Options),
            _ => None,
        };
        if let Some(next) = next {
            section = next;
            lines.push(apply_header(line));
            continue;
        }

        let Some(body) = line.strip_prefix(indent.as_str()).filter(|b| !b.trim().is_empty()) else {
            lines.push(line.to_string());
            continue;
        };
        let colored = match section {
            Section::Preamble => body.to_string(),
            Section::Usage => colorize_words(body, style),
            Section::Commands => {
                let (label, desc) = split_entry(body);
                format!("{}{}", apply_literal(label), desc)
            }
            Section::Options => {
                let (label, desc) = split_entry(body);
                format!("{}{}", colorize_words(label, style), desc)
            }
        };
        lines.push(format!("{indent}{colored}"));
    }
    lines.join("\n")
}

/// Split an entry at the first run of two or more spaces.
fn split_entry(body: &str) -> (&str, &str) {
    match body.find("  ") {
        Some(pos) => body.split_at(pos),
        None => (body, ""),
    }
}

/// Color each space-separated word: placeholders as context, the rest as
/// literals. Trailing list separators stay uncolored.
fn colorize_words(text: &str, style: &Style) -> String {
    let mut out = String::with_capacity(text.len() + 32);
    for word in text.split_inclusive(' ') {
        let spaced = word.trim_end_matches(' ');
        let trailing = &word[spaced.len()..];
        let core = spaced.trim_end_matches(',');
        let separator = &spaced[core.len()..];

        if core.is_empty() {
            out.push_str(word);
            continue;
        }
        let placeholder = core.starts_with('[')
            || (!style.parameter_open.is_empty() && core.starts_with(&style.parameter_open));
        if placeholder {
            out.push_str(&apply_context(core));
        } else {
            out.push_str(&apply_literal(core));
        }
        out.push_str(separator);
        out.push_str(trailing);
    }
    out
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
