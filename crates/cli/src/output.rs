// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use argtree_core::{OptionValues, ProgramInfo, Value};
use serde::Serialize;

use crate::color;
use crate::table::{Column, Table};

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;

/// Choices accepted by `--output`, in selection-index order.
pub const FORMAT_CHOICES: [&str; 2] = ["human", "json"];

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
}

impl OutputFormat {
    /// Map the `--output` selection index; absent means [`OutputFormat::Human`].
    pub fn from_selection(index: Option<usize>) -> Self {
        match index {
            Some(1) => OutputFormat::Json,
            _ => OutputFormat::Human,
        }
    }
}

#[derive(Serialize)]
struct DispatchReport<'a> {
    command: Vec<&'a str>,
    values: &'a OptionValues,
}

/// Render the result of a dispatched parse.
pub fn render_dispatched(
    program: &ProgramInfo,
    path: &[String],
    values: &OptionValues,
    format: OutputFormat,
    colorize: bool,
) -> anyhow::Result<String> {
    let mut command: Vec<&str> = vec![program.name.as_str()];
    command.extend(path.iter().map(String::as_str));

    match format {
        OutputFormat::Json => {
            let report = DispatchReport {
                command,
                values,
            };
            let mut text = serde_json::to_string_pretty(&report)?;
            text.push('\n');
            Ok(text)
        }
        OutputFormat::Human => {
            let joined = command.join(" ");
            let label = if colorize {
                color::apply_header("command:")
            } else {
                "command:".to_string()
            };
            let mut out = format!("{label} {joined}\n");
            if values.is_empty() {
                out.push_str("no options set\n");
                return Ok(out);
            }
            let mut table = Table::new(
                vec![Column::literal("OPTION"), Column::left("VALUE")],
                colorize,
            )
            .shade_alternate(program.style.alternate_rows);
            for (key, value) in values.iter() {
                table.row(vec![key.to_string(), describe(value)]);
            }
            out.push('\n');
            out.push_str(&table.render_to_string());
            Ok(out)
        }
    }
}

/// Human-readable value text. Flags read as `set`.
fn describe(value: &Value) -> String {
    match value {
        Value::Flag => "set".to_string(),
        other => other.to_string(),
    }
}
