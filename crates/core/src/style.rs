// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Display settings shared by every command of one parser.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Style {
    /// Spaces before each table row.
    pub indent: usize,
    /// Joins aliases and shortcuts in a label (`install, i`).
    pub list_separator: String,
    pub parameter_open: String,
    pub parameter_close: String,
    /// Render parameter descriptors lowercased (`<SEC>` becomes `<sec>`).
    pub lowercase_parameters: bool,
    /// Renderers may shade every other table row.
    pub alternate_rows: bool,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            indent: 2,
            list_separator: ", ".to_string(),
            parameter_open: "<".to_string(),
            parameter_close: ">".to_string(),
            lowercase_parameters: true,
            alternate_rows: true,
        }
    }
}

impl Style {
    pub fn parameter(&self, descriptor: &str) -> String {
        let name = if self.lowercase_parameters {
            descriptor.to_lowercase()
        } else {
            descriptor.to_string()
        };
        format!("{}{}{}", self.parameter_open, name, self.parameter_close)
    }

    /// Space-separated parameter placeholders.
    pub fn parameters<S: AsRef<str>>(&self, descriptors: &[S]) -> String {
        descriptors
            .iter()
            .map(|d| self.parameter(d.as_ref()))
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn list<S: AsRef<str>>(&self, items: &[S]) -> String {
        items
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(&self.list_separator)
    }

    pub fn indentation(&self) -> String {
        " ".repeat(self.indent)
    }
}
