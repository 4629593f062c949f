// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Column-aligned table output for parsed option values.

use std::io::Write;

use crate::color;

/// How a cell's text is styled after padding.
pub enum CellStyle {
    Plain,
    /// Apply [`color::apply_literal`].
    Literal,
}

/// A column definition in a [`Table`].
pub struct Column {
    pub name: &'static str,
    pub style: CellStyle,
}

impl Column {
    pub fn left(name: &'static str) -> Self {
        Self {
            name,
            style: CellStyle::Plain,
        }
    }

    /// Cells rendered as literals when colorizing.
    pub fn literal(name: &'static str) -> Self {
        Self {
            name,
            style: CellStyle::Literal,
        }
    }
}

/// A tabular renderer that auto-computes column widths from data.
pub struct Table {
    columns: Vec<Column>,
    rows: Vec<Vec<String>>,
    colorize: bool,
    shade_alternate: bool,
}

/// Column separator: double space.
const SEP: &str = "  ";

impl Table {
    pub fn new(columns: Vec<Column>, colorize: bool) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            colorize,
            shade_alternate: false,
        }
    }

    #[cfg(test)]
    pub fn plain(columns: Vec<Column>) -> Self {
        Self::new(columns, false)
    }

    #[cfg(test)]
    pub fn colored(columns: Vec<Column>) -> Self {
        Self::new(columns, true)
    }

    /// Mute every second data row when colorizing.
    pub fn shade_alternate(mut self, enabled: bool) -> Self {
        self.shade_alternate = enabled;
        self
    }

    pub fn row(&mut self, cells: Vec<String>) {
        self.rows.push(cells);
    }

    /// Render the header and rows to the given writer.
    ///
    /// The last column is never padded. Color is applied after
    /// padding so escapes don't affect widths.
    pub fn render(&self, out: &mut impl Write) -> std::io::Result<()> {
        if self.rows.is_empty() {
            return Ok(());
        }
        let widths = self.compute_widths();

        let header: Vec<String> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                let padded = self.fit(i, col.name, widths[i]);
                if self.colorize {
                    color::apply_header(&padded)
                } else {
                    padded
                }
            })
            .collect();
        writeln!(out, "{}", header.join(SEP))?;

        for (n, row) in self.rows.iter().enumerate() {
            let shaded = self.colorize && self.shade_alternate && n % 2 == 1;
            let cells: Vec<String> = self
                .columns
                .iter()
                .enumerate()
                .map(|(i, col)| {
                    let raw = row.get(i).map(String::as_str).unwrap_or("");
                    let padded = self.fit(i, raw, widths[i]);
                    if shaded {
                        color::apply_muted(&padded)
                    } else {
                        stylize(&padded, &col.style, self.colorize)
                    }
                })
                .collect();
            writeln!(out, "{}", cells.join(SEP))?;
        }
        Ok(())
    }

    /// Render into a string.
    pub fn render_to_string(&self) -> String {
        let mut buf = Vec::new();
        if self.render(&mut buf).is_err() {
            return String::new();
        }
        String::from_utf8_lossy(&buf).into_owned()
    }

    fn fit(&self, index: usize, text: &str, width: usize) -> String {
        if index + 1 == self.columns.len() {
            text.to_string()
        } else {
            format!("{text:<width$}")
        }
    }

    fn compute_widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                let data = self
                    .rows
                    .iter()
                    .map(|row| row.get(i).map(|s| s.chars().count()).unwrap_or(0))
                    .max()
                    .unwrap_or(0);
                data.max(col.name.chars().count())
            })
            .collect()
    }
}

fn stylize(text: &str, style: &CellStyle, colorize: bool) -> String {
    if !colorize {
        return text.to_string();
    }
    match style {
        CellStyle::Plain => text.to_string(),
        CellStyle::Literal => color::apply_literal(text),
    }
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;
