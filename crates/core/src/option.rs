// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Option definitions and parse-time option callbacks.

use std::rc::Rc;

use crate::command::Command;
use crate::error::{DefinitionError, EntryKind};
use crate::help::HelpPage;
use crate::interpreter::{self, Element, ParameterSet};
use crate::parser::ProgramInfo;
use crate::value::Value;

/// What the dispatcher does after an option callback returns.
#[derive(Debug, Clone, PartialEq)]
pub enum Flow {
    /// Keep going; the command callback still runs.
    Continue,
    /// End the parse and hand this help page to the host.
    Help(HelpPage),
    /// End the parse and hand this version line to the host.
    Version(String),
}

/// Context handed to an option callback.
pub struct Invocation<'a> {
    pub program: &'a ProgramInfo,
    /// Command that owns the option.
    pub command: &'a Command,
    /// Command names from the root to `command`, excluding the program.
    pub path: &'a [String],
    pub key: &'a str,
    pub value: &'a Value,
}

impl Invocation<'_> {
    /// Describe the owning command for a help renderer.
    pub fn help_page(&self) -> HelpPage {
        HelpPage::describe(self.program, self.path, self.command)
    }
}

pub type OptionCallback = Rc<dyn Fn(&Invocation<'_>) -> Flow>;

pub struct OptionDef {
    key: String,
    help: String,
    shortcuts: Vec<String>,
    parameters: ParameterSet,
    callback: Option<OptionCallback>,
}

impl OptionDef {
    /// Shortcuts are given without leading dashes: `["v", "verbose"]`.
    pub fn new<I, S>(
        key: impl Into<String>,
        shortcuts: I,
        parameters: ParameterSet,
    ) -> Result<Self, DefinitionError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let key = key.into();
        if key.is_empty() || key.chars().any(char::is_whitespace) {
            return Err(DefinitionError::InvalidName { name: key });
        }

        let shortcuts: Vec<String> = shortcuts.into_iter().map(Into::into).collect();
        if shortcuts.is_empty() {
            return Err(DefinitionError::EmptyShortcuts { key });
        }
        for (i, shortcut) in shortcuts.iter().enumerate() {
            if shortcut.is_empty()
                || shortcut.starts_with('-')
                || shortcut.chars().any(char::is_whitespace)
            {
                return Err(DefinitionError::InvalidShortcut {
                    shortcut: shortcut.clone(),
                });
            }
            if shortcuts[..i].contains(shortcut) {
                return Err(DefinitionError::DuplicateKey {
                    kind: EntryKind::Shortcut,
                    key: shortcut.clone(),
                });
            }
        }

        Ok(Self {
            key,
            help: String::new(),
            shortcuts,
            parameters,
            callback: None,
        })
    }

    pub fn flag(key: impl Into<String>, shortcuts: &[&str]) -> Result<Self, DefinitionError> {
        Self::new(key, shortcuts.iter().copied(), ParameterSet::flag())
    }

    pub fn int(
        key: impl Into<String>,
        shortcuts: &[&str],
        descriptor: &str,
    ) -> Result<Self, DefinitionError> {
        let parameters = ParameterSet::single(interpreter::Int, descriptor);
        Self::new(key, shortcuts.iter().copied(), parameters)
    }

    pub fn float(
        key: impl Into<String>,
        shortcuts: &[&str],
        descriptor: &str,
    ) -> Result<Self, DefinitionError> {
        let parameters = ParameterSet::single(interpreter::Float, descriptor);
        Self::new(key, shortcuts.iter().copied(), parameters)
    }

    pub fn string(
        key: impl Into<String>,
        shortcuts: &[&str],
        descriptor: &str,
    ) -> Result<Self, DefinitionError> {
        let parameters = ParameterSet::single(interpreter::Text, descriptor);
        Self::new(key, shortcuts.iter().copied(), parameters)
    }

    pub fn selection(
        key: impl Into<String>,
        shortcuts: &[&str],
        descriptor: &str,
        choices: &[&str],
    ) -> Result<Self, DefinitionError> {
        let key = key.into();
        if choices.is_empty() {
            return Err(DefinitionError::EmptySelection { key });
        }
        let parameters =
            ParameterSet::single(interpreter::Selection::new(choices.iter().copied()), descriptor);
        Self::new(key, shortcuts.iter().copied(), parameters)
    }

    pub fn list(
        key: impl Into<String>,
        shortcuts: &[&str],
        descriptor: &str,
        element: Element,
    ) -> Result<Self, DefinitionError> {
        let parameters = ParameterSet::single(interpreter::List::new(element), descriptor);
        Self::new(key, shortcuts.iter().copied(), parameters)
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = help.into();
        self
    }

    /// Run `callback` after a successful resolve, before the command callback.
    pub fn on_invoke(mut self, callback: impl Fn(&Invocation<'_>) -> Flow + 'static) -> Self {
        self.callback = Some(Rc::new(callback));
        self
    }

    /// Share an existing callback.
    pub fn with_callback(mut self, callback: OptionCallback) -> Self {
        self.callback = Some(callback);
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn help(&self) -> &str {
        &self.help
    }

    pub fn shortcuts(&self) -> &[String] {
        &self.shortcuts
    }

    pub fn parameters(&self) -> &ParameterSet {
        &self.parameters
    }

    pub fn callback(&self) -> Option<&OptionCallback> {
        self.callback.as_ref()
    }

    /// `-x` for single-character shortcuts, `--xyz` otherwise.
    pub fn display_shortcuts(&self) -> Vec<String> {
        self.shortcuts.iter().map(|s| display_shortcut(s)).collect()
    }
}

pub fn display_shortcut(shortcut: &str) -> String {
    if shortcut.chars().count() == 1 {
        format!("-{shortcut}")
    } else {
        format!("--{shortcut}")
    }
}

impl std::fmt::Debug for OptionDef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OptionDef")
            .field("key", &self.key)
            .field("shortcuts", &self.shortcuts)
            .field("parameters", &self.parameters)
            .field("callback", &self.callback.is_some())
            .finish()
    }
}

#[cfg(test)]
#[path = "option_tests.rs"]
mod tests;
