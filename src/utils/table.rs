//! Table rendering utilities for CLI outputs.
//! Cells may span several lines; long text is wrapped to the column width.

use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    /// Upper bound for the rendered width; longer cells are wrapped.
    pub max_width: usize,
}

impl Column {
    pub fn new(header: &str, max_width: usize) -> Self {
        Self {
            header: header.to_string(),
            max_width,
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                let longest_line = self
                    .rows
                    .iter()
                    .filter_map(|r| r.get(i))
                    .flat_map(|cell| cell.lines())
                    .map(UnicodeWidthStr::width)
                    .max()
                    .unwrap_or(0);
                longest_line
                    .max(UnicodeWidthStr::width(col.header.as_str()))
                    .min(col.max_width.max(1))
            })
            .collect()
    }

    /// Render the table. `style` receives (column index, padded cell line) and
    /// may wrap it in ANSI colors; padding is computed on the plain text.
    pub fn render_with<F>(&self, style: F) -> String
    where
        F: Fn(usize, &str) -> String,
    {
        let widths = self.widths();
        let mut out = String::new();

        // Header
        for (col, w) in self.columns.iter().zip(&widths) {
            out.push_str(&pad(&col.header, *w));
            out.push(' ');
        }
        out.push('\n');

        for w in &widths {
            out.push_str(&"-".repeat(*w));
            out.push(' ');
        }
        out.push('\n');

        // Rows
        for row in &self.rows {
            let wrapped: Vec<Vec<String>> = widths
                .iter()
                .enumerate()
                .map(|(i, w)| wrap_cell(row.get(i).map(String::as_str).unwrap_or(""), *w))
                .collect();
            let height = wrapped.iter().map(Vec::len).max().unwrap_or(1);

            for line in 0..height {
                for (i, w) in widths.iter().enumerate() {
                    let text = wrapped[i].get(line).map(String::as_str).unwrap_or("");
                    out.push_str(&style(i, &pad(text, *w)));
                    out.push(' ');
                }
                out.push('\n');
            }
        }

        out
    }

    pub fn render(&self) -> String {
        self.render_with(|_, cell| cell.to_string())
    }
}

fn wrap_cell(cell: &str, width: usize) -> Vec<String> {
    let mut lines: Vec<String> = cell
        .lines()
        .flat_map(|l| {
            textwrap::wrap(l, width)
                .into_iter()
                .map(|c| c.into_owned())
                .collect::<Vec<_>>()
        })
        .collect();
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

fn pad(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    if w >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - w))
    }
}
