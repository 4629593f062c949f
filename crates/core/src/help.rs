// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Help description of one command, in display order.
//!
//! The engine never formats tables or prints; a host renders a [`HelpPage`]
//! however it likes.

use serde::Serialize;

use crate::command::Command;
use crate::option::display_shortcut;
use crate::parser::ProgramInfo;
use crate::style::Style;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HelpPage {
    pub program: String,
    /// Command names from the root to the described command.
    pub path: Vec<String>,
    pub help: String,
    pub usage: Option<String>,
    pub commands: Vec<CommandSummary>,
    pub options: Vec<OptionSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommandSummary {
    pub names: Vec<String>,
    pub help: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptionSummary {
    pub key: String,
    /// Raw shortcuts, without dashes.
    pub shortcuts: Vec<String>,
    pub parameters: Vec<String>,
    pub help: String,
}

impl HelpPage {
    pub fn describe(program: &ProgramInfo, path: &[String], command: &Command) -> Self {
        Self {
            program: program.name.clone(),
            path: path.to_vec(),
            help: command.help().to_string(),
            usage: command.usage().map(str::to_string),
            commands: command
                .commands()
                .map(|c| CommandSummary {
                    names: c.names().to_vec(),
                    help: c.help().to_string(),
                })
                .collect(),
            options: command
                .options()
                .map(|o| OptionSummary {
                    key: o.key().to_string(),
                    shortcuts: o.shortcuts().to_vec(),
                    parameters: o.parameters().descriptors().to_vec(),
                    help: o.help().to_string(),
                })
                .collect(),
        }
    }

    /// Explicit usage text, or `program path [command] [options]`.
    pub fn usage_line(&self) -> String {
        if let Some(usage) = &self.usage {
            return usage.clone();
        }
        let mut parts = vec![self.program.clone()];
        parts.extend(self.path.iter().cloned());
        if !self.commands.is_empty() {
            parts.push("[command]".to_string());
        }
        if !self.options.is_empty() {
            parts.push("[options]".to_string());
        }
        parts.join(" ")
    }
}

impl CommandSummary {
    pub fn label(&self, style: &Style) -> String {
        style.list(&self.names)
    }
}

impl OptionSummary {
    pub fn display_shortcuts(&self) -> Vec<String> {
        self.shortcuts.iter().map(|s| display_shortcut(s)).collect()
    }

    /// `-t, --timeout <sec>`
    pub fn label(&self, style: &Style) -> String {
        let shortcuts = style.list(&self.display_shortcuts());
        if self.parameters.is_empty() {
            shortcuts
        } else {
            format!("{} {}", shortcuts, style.parameters(&self.parameters))
        }
    }
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
