//! Table rendering utilities for CLI outputs.

use crate::utils::colors::{GREY, RESET, colorize_optional};
use crate::utils::formatting::{bold, is_numeric_cell, pad_left, pad_right, visible_width};

/// Cells wider than this are wrapped over several lines.
pub const MAX_CELL_WIDTH: usize = 28;

pub struct Column {
    pub header: String,
    pub width: usize,
    pub align_right: bool,
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
    separator: String,
    max_rows: usize,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            separator: "-".to_string(),
            max_rows: 0,
        }
    }

    /// Columns sized on their headers; widths grow with each added row.
    pub fn from_headers(headers: &[&str]) -> Self {
        let columns = headers
            .iter()
            .map(|h| Column {
                header: h.to_string(),
                width: visible_width(h).min(MAX_CELL_WIDTH),
                align_right: false,
            })
            .collect();
        Self::new(columns)
    }

    pub fn with_separator(mut self, sep: &str) -> Self {
        if !sep.is_empty() {
            self.separator = sep.to_string();
        }
        self
    }

    /// Render at most `n` rows; 0 means no limit.
    pub fn with_max_rows(mut self, n: usize) -> Self {
        self.max_rows = n;
        self
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        for (col, cell) in self.columns.iter_mut().zip(&row) {
            col.width = col.width.max(visible_width(cell).min(MAX_CELL_WIDTH));
            // a column is numeric until a non-empty text cell shows up
            if self.rows.is_empty() {
                col.align_right = is_numeric_cell(cell);
            } else if !cell.is_empty() && !is_numeric_cell(cell) {
                col.align_right = false;
            }
        }
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        // Header
        let header: Vec<String> = self
            .columns
            .iter()
            .map(|c| bold(&pad_right(&c.header, c.width)))
            .collect();
        out.push_str(header.join(" ").trim_end());
        out.push('\n');

        let total_width: usize =
            self.columns.iter().map(|c| c.width).sum::<usize>() + self.columns.len().saturating_sub(1);
        out.push_str(&self.separator.repeat(total_width / self.separator.chars().count().max(1)));
        out.push('\n');

        // Rows
        let shown = if self.max_rows == 0 {
            self.rows.len()
        } else {
            self.rows.len().min(self.max_rows)
        };

        for row in &self.rows[..shown] {
            self.render_row(row, &mut out);
        }

        if shown < self.rows.len() {
            out.push_str(&format!(
                "{GREY}… {} more rows{RESET}\n",
                self.rows.len() - shown
            ));
        }

        out
    }

    fn render_row(&self, row: &[String], out: &mut String) {
        let cells: Vec<Vec<String>> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                let cell = row.get(i).map(String::as_str).unwrap_or("");
                wrap_cell(cell, col.width)
            })
            .collect();

        let height = cells.iter().map(Vec::len).max().unwrap_or(1);

        for line in 0..height {
            let parts: Vec<String> = self
                .columns
                .iter()
                .zip(&cells)
                .map(|(col, lines)| match lines.get(line) {
                    Some(s) if col.align_right => pad_left(s, col.width),
                    Some(s) => pad_right(s, col.width),
                    None => " ".repeat(col.width),
                })
                .collect();
            out.push_str(parts.join(" ").trim_end());
            out.push('\n');
        }
    }
}

/// Split a cell over several lines when it is wider than `width`.
/// Colored cells are left whole.
fn wrap_cell(cell: &str, width: usize) -> Vec<String> {
    if cell.is_empty() {
        return vec![colorize_optional(cell)];
    }
    if cell.contains('\x1b') || visible_width(cell) <= width {
        return vec![cell.to_string()];
    }
    textwrap::wrap(cell, width.max(1))
        .into_iter()
        .map(|l| l.into_owned())
        .collect()
}
