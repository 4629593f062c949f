// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Root command plus program-wide settings.

use serde::{Deserialize, Serialize};

use crate::command::{Command, ParseOutcome};
use crate::error::{DefinitionError, ParseError};
use crate::help::HelpPage;
use crate::option::{Flow, OptionDef};
use crate::style::Style;

pub const DEFAULT_VERSION_TEMPLATE: &str = "{name} - version {version}";

/// Display index of `-V/--version` when none is given.
pub const DEFAULT_VERSION_INDEX: usize = 1;

/// Program-wide data every command sees during a parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramInfo {
    pub name: String,
    pub version: Option<String>,
    pub style: Style,
}

/// Everything [`ArgumentParser::new`] needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserSettings {
    pub program: String,
    pub version: Option<String>,
    /// Program description, shown on the root help page.
    pub help: String,
    pub usage: Option<String>,
    pub style: Style,
    /// Register `-h/--help` on the root and on every command added through
    /// the parser.
    pub std_help: bool,
    /// Register `-V/--version` with this template. `{name}` and `{version}`
    /// are substituted.
    pub version_template: Option<String>,
}

impl Default for ParserSettings {
    fn default() -> Self {
        Self {
            program: String::new(),
            version: None,
            help: String::new(),
            usage: None,
            style: Style::default(),
            std_help: true,
            version_template: None,
        }
    }
}

impl ParserSettings {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            ..Self::default()
        }
    }
}

pub struct ArgumentParser {
    program: ProgramInfo,
    root: Command,
}

impl ArgumentParser {
    pub fn new(settings: ParserSettings) -> Result<Self, DefinitionError> {
        let mut root = Command::new([settings.program.clone()])?.with_help(settings.help);
        if let Some(usage) = settings.usage {
            root = root.with_usage(usage);
        }
        if settings.std_help {
            root.install_std_help()?;
        }

        let mut parser = Self {
            program: ProgramInfo {
                name: settings.program,
                version: settings.version,
                style: settings.style,
            },
            root,
        };
        if let Some(template) = settings.version_template {
            parser.add_version_option(Some(&template), None)?;
        }
        Ok(parser)
    }

    pub fn program(&self) -> &ProgramInfo {
        &self.program
    }

    pub fn style(&self) -> &Style {
        &self.program.style
    }

    pub fn root(&self) -> &Command {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Command {
        &mut self.root
    }

    /// Add a top-level command. With standard help enabled, it and every
    /// command later nested under it gain `-h/--help` where they lack one.
    pub fn add_command(
        &mut self,
        command: Command,
        index: Option<usize>,
    ) -> Result<&mut Command, DefinitionError> {
        self.root.add_command(command, index)
    }

    pub fn add_option(&mut self, option: OptionDef, index: Option<usize>) -> Result<(), DefinitionError> {
        self.root.add_option(option, index)
    }

    /// Register `-V/--version` on the root.
    ///
    /// `template` defaults to `{name} - version {version}`, `index` to 1.
    pub fn add_version_option(
        &mut self,
        template: Option<&str>,
        index: Option<usize>,
    ) -> Result<(), DefinitionError> {
        let version = self
            .program
            .version
            .as_deref()
            .ok_or(DefinitionError::MissingVersion)?;
        let line = render_version(
            template.unwrap_or(DEFAULT_VERSION_TEMPLATE),
            &self.program.name,
            version,
        );

        let option = OptionDef::flag("version", &["V", "version"])?
            .with_help("Show version and exit.")
            .on_invoke(move |_| Flow::Version(line.clone()));
        self.root
            .add_option(option, Some(index.unwrap_or(DEFAULT_VERSION_INDEX)))
    }

    /// Parse one token sequence, excluding the program name.
    pub fn parse(&mut self, tokens: &[String]) -> Result<ParseOutcome, ParseError> {
        tracing::debug!(program = %self.program.name, tokens = tokens.len(), "parse started");
        self.root.parse(&self.program, tokens)
    }

    pub fn parse_from<I, S>(&mut self, tokens: I) -> Result<ParseOutcome, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tokens: Vec<String> = tokens.into_iter().map(Into::into).collect();
        self.parse(&tokens)
    }

    /// Help page of the root command.
    pub fn help_page(&self) -> HelpPage {
        HelpPage::describe(&self.program, &[], &self.root)
    }
}

/// Substitute `{name}` and `{version}` in one pass; substituted text is
/// never rescanned.
fn render_version(template: &str, name: &str, version: &str) -> String {
    let mut out = String::with_capacity(template.len() + name.len() + version.len());
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        if let Some(after) = tail.strip_prefix("{name}") {
            out.push_str(name);
            rest = after;
        } else if let Some(after) = tail.strip_prefix("{version}") {
            out.push_str(version);
            rest = after;
        } else {
            out.push('{');
            rest = &tail[1..];
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
