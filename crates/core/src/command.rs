// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command tree and dispatcher.
//!
//! A parse pass runs in two phases. The first delegates to child commands,
//! scans option tokens and resolves every parameter; any error aborts here
//! and no callback runs. The second invokes option callbacks in token order
//! and then, unless one of them ended the parse, the command callback once.

use std::rc::Rc;

use argtree_lists::Cursor;

use crate::error::{DefinitionError, EntryKind, ParseError};
use crate::help::HelpPage;
use crate::interpreter::Element;
use crate::option::{Flow, Invocation, OptionCallback, OptionDef};
use crate::parser::ProgramInfo;
use crate::registry::Registry;
use crate::value::{OptionValues, Value};

pub type CommandCallback = Box<dyn FnMut(&OptionValues)>;

/// Result of a successful parse.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseOutcome {
    /// The selected command's callback ran with these values.
    Dispatched {
        /// Command names below the root, in delegation order.
        path: Vec<String>,
        values: OptionValues,
    },
    /// A help option ended the parse.
    Help(HelpPage),
    /// A version option ended the parse.
    Version(String),
}

pub struct Command {
    names: Vec<String>,
    help: String,
    usage: Option<String>,
    commands: Registry<Command>,
    options: Registry<OptionDef>,
    callback: Option<CommandCallback>,
    values: OptionValues,
    /// Install `-h/--help` on every command added below this one.
    std_help: bool,
}

impl Command {
    /// The first name is the primary one; the rest are aliases.
    pub fn new<I, S>(names: I) -> Result<Self, DefinitionError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.is_empty() {
            return Err(DefinitionError::EmptyNames);
        }
        for (i, name) in names.iter().enumerate() {
            if name.is_empty() || name.starts_with('-') || name.chars().any(char::is_whitespace) {
                return Err(DefinitionError::InvalidName { name: name.clone() });
            }
            if names[..i].contains(name) {
                return Err(DefinitionError::DuplicateKey {
                    kind: EntryKind::Command,
                    key: name.clone(),
                });
            }
        }

        Ok(Self {
            names,
            help: String::new(),
            usage: None,
            commands: Registry::new(EntryKind::Command, EntryKind::Command),
            options: Registry::new(EntryKind::Option, EntryKind::Shortcut),
            callback: None,
            values: OptionValues::new(),
            std_help: false,
        })
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = help.into();
        self
    }

    pub fn with_usage(mut self, usage: impl Into<String>) -> Self {
        self.usage = Some(usage.into());
        self
    }

    /// Callback run with the resolved values when this command is selected.
    pub fn on_run(mut self, callback: impl FnMut(&OptionValues) + 'static) -> Self {
        self.callback = Some(Box::new(callback));
        self
    }

    pub fn set_callback(&mut self, callback: impl FnMut(&OptionValues) + 'static) {
        self.callback = Some(Box::new(callback));
    }

    pub fn name(&self) -> &str {
        // Constructors guarantee at least one name.
        self.names.first().map(String::as_str).unwrap_or_default()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn help(&self) -> &str {
        &self.help
    }

    pub fn usage(&self) -> Option<&str> {
        self.usage.as_deref()
    }

    // -- registration --

    /// Register a child command under all of its names.
    ///
    /// `index` sets its display position; `None` appends. Under standard
    /// help the command and its subtree gain `-h/--help` where they lack one,
    /// and so does anything later added beneath it.
    pub fn add_command(
        &mut self,
        mut command: Command,
        index: Option<usize>,
    ) -> Result<&mut Command, DefinitionError> {
        if self.std_help {
            command.install_std_help()?;
        }
        let key = command.name().to_string();
        let names = command.names.clone();
        self.commands.insert(key.clone(), &names, command, index)?;
        self.commands
            .get_mut(&key)
            .ok_or(DefinitionError::UnknownKey { key })
    }

    pub fn add_option(&mut self, option: OptionDef, index: Option<usize>) -> Result<(), DefinitionError> {
        let key = option.key().to_string();
        let shortcuts = option.shortcuts().to_vec();
        self.options.insert(key, &shortcuts, option, index)?;
        Ok(())
    }

    pub fn add_flag(&mut self, key: &str, shortcuts: &[&str], help: &str) -> Result<(), DefinitionError> {
        self.add_option(OptionDef::flag(key, shortcuts)?.with_help(help), None)
    }

    pub fn add_int_option(
        &mut self,
        key: &str,
        shortcuts: &[&str],
        descriptor: &str,
        help: &str,
    ) -> Result<(), DefinitionError> {
        self.add_option(OptionDef::int(key, shortcuts, descriptor)?.with_help(help), None)
    }

    pub fn add_float_option(
        &mut self,
        key: &str,
        shortcuts: &[&str],
        descriptor: &str,
        help: &str,
    ) -> Result<(), DefinitionError> {
        self.add_option(OptionDef::float(key, shortcuts, descriptor)?.with_help(help), None)
    }

    pub fn add_string_option(
        &mut self,
        key: &str,
        shortcuts: &[&str],
        descriptor: &str,
        help: &str,
    ) -> Result<(), DefinitionError> {
        self.add_option(OptionDef::string(key, shortcuts, descriptor)?.with_help(help), None)
    }

    pub fn add_list_option(
        &mut self,
        key: &str,
        shortcuts: &[&str],
        descriptor: &str,
        element: Element,
        help: &str,
    ) -> Result<(), DefinitionError> {
        let option = OptionDef::list(key, shortcuts, descriptor, element)?.with_help(help);
        self.add_option(option, None)
    }

    pub fn add_selection_option(
        &mut self,
        key: &str,
        shortcuts: &[&str],
        descriptor: &str,
        choices: &[&str],
        help: &str,
    ) -> Result<(), DefinitionError> {
        let option = OptionDef::selection(key, shortcuts, descriptor, choices)?.with_help(help);
        self.add_option(option, None)
    }

    /// Register `-h/--help`, which ends the parse with this command's help page.
    pub fn add_help_option(&mut self, index: Option<usize>) -> Result<(), DefinitionError> {
        self.add_option(help_option()?, index)
    }

    /// Register `-h/--help` here and on the whole subtree unless the key or
    /// a help shortcut is already taken.
    pub(crate) fn install_std_help(&mut self) -> Result<(), DefinitionError> {
        self.std_help = true;
        let taken = self.option("help").is_some()
            || self.option_by_shortcut("h").is_some()
            || self.option_by_shortcut("help").is_some();
        if !taken {
            self.add_help_option(Some(0))?;
        }
        for child in self.commands.values_mut() {
            child.install_std_help()?;
        }
        Ok(())
    }

    // -- lookup --

    /// Child command by any of its names.
    pub fn command(&self, name: &str) -> Option<&Command> {
        self.commands.resolve(name)
    }

    pub fn command_mut(&mut self, name: &str) -> Option<&mut Command> {
        self.commands.resolve_mut(name)
    }

    pub fn option(&self, key: &str) -> Option<&OptionDef> {
        self.options.get(key)
    }

    pub fn option_by_shortcut(&self, shortcut: &str) -> Option<&OptionDef> {
        self.options.resolve(shortcut)
    }

    /// Child commands in display order.
    pub fn commands(&self) -> impl Iterator<Item = &Command> {
        self.commands.display()
    }

    /// Options in display order.
    pub fn options(&self) -> impl Iterator<Item = &OptionDef> {
        self.options.display()
    }

    /// Values resolved by the last parse that selected this command.
    pub fn values(&self) -> &OptionValues {
        &self.values
    }

    // -- dispatch --

    /// Clear per-parse state in this command and every descendant.
    pub fn reset(&mut self) {
        self.values.clear();
        for child in self.commands.values_mut() {
            child.reset();
        }
    }

    /// Parse `tokens` against this command's subtree.
    pub fn parse(&mut self, program: &ProgramInfo, tokens: &[String]) -> Result<ParseOutcome, ParseError> {
        self.reset();
        self.dispatch(program, Vec::new(), tokens)
    }

    fn dispatch(
        &mut self,
        program: &ProgramInfo,
        mut path: Vec<String>,
        tokens: &[String],
    ) -> Result<ParseOutcome, ParseError> {
        // Only the first token of a command's sequence can name a child.
        if let Some(first) = tokens.first() {
            if let Some(child) = self.commands.resolve_mut(first) {
                tracing::debug!(token = %first, command = child.name(), "delegating to command");
                path.push(child.name().to_string());
                return child.dispatch(program, path, &tokens[1..]);
            }
        }

        let label = command_label(program, &path);
        let resolved = self.scan(&label, tokens)?;
        let flow = self.invoke_options(program, &path, &resolved);
        self.values = resolved.into_iter().collect();

        match flow {
            Flow::Help(page) => Ok(ParseOutcome::Help(page)),
            Flow::Version(line) => Ok(ParseOutcome::Version(line)),
            Flow::Continue => {
                if let Some(callback) = self.callback.as_mut() {
                    callback(&self.values);
                }
                tracing::debug!(command = %label, options = self.values.len(), "command dispatched");
                Ok(ParseOutcome::Dispatched {
                    path,
                    values: self.values.clone(),
                })
            }
        }
    }

    /// Resolve every option token, in order. Nothing is stored or invoked.
    fn scan(&self, label: &str, tokens: &[String]) -> Result<Vec<(String, Value)>, ParseError> {
        let mut cursor = Cursor::new(tokens);
        let mut resolved = Vec::new();
        while let Some(token) = cursor.next_token() {
            if !token.starts_with('-') {
                return Err(ParseError::UnexpectedArgument {
                    token: token.to_string(),
                    command: label.to_string(),
                });
            }
            let shortcut = token.trim_start_matches('-');
            let option = self
                .options
                .resolve(shortcut)
                .ok_or_else(|| ParseError::UnknownOption {
                    token: token.to_string(),
                })?;

            let start = cursor.position();
            let value = option.parameters().resolve(option.key(), &mut cursor)?;
            tracing::debug!(
                option = option.key(),
                consumed = cursor.position() - start,
                "option resolved"
            );
            resolved.push((option.key().to_string(), value));
        }
        Ok(resolved)
    }

    /// Run option callbacks in token order until one ends the parse.
    fn invoke_options(&self, program: &ProgramInfo, path: &[String], resolved: &[(String, Value)]) -> Flow {
        for (key, value) in resolved {
            let Some(callback) = self.options.get(key).and_then(OptionDef::callback) else {
                continue;
            };
            let invocation = Invocation {
                program,
                command: self,
                path,
                key,
                value,
            };
            match callback(&invocation) {
                Flow::Continue => {}
                flow => {
                    tracing::debug!(option = %key, "option ended the parse");
                    return flow;
                }
            }
        }
        Flow::Continue
    }
}

fn command_label(program: &ProgramInfo, path: &[String]) -> String {
    std::iter::once(program.name.as_str())
        .chain(path.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ")
}

fn show_help(invocation: &Invocation<'_>) -> Flow {
    Flow::Help(invocation.help_page())
}

/// Shared `-h/--help` callback.
pub fn help_callback() -> OptionCallback {
    Rc::new(show_help)
}

pub fn help_option() -> Result<OptionDef, DefinitionError> {
    Ok(OptionDef::flag("help", &["h", "help"])?
        .with_help("Show help.")
        .with_callback(help_callback()))
}

impl std::fmt::Debug for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Command")
            .field("names", &self.names)
            .field("commands", &self.commands.len())
            .field("options", &self.options.len())
            .field("values", &self.values)
            .finish()
    }
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod tests;
