//! GFM pipe tables.

use std::sync::LazyLock;

use regex::Regex;

/// A pipe table with a fixed header row.
#[derive(Debug, Clone, Default)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Start a table with the given column headers.
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.headers.len()
    }

    /// Append a data row. Cells are escaped; short rows are padded with
    /// empty cells and extra cells are dropped.
    pub fn push_row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut row: Vec<String> = cells
            .into_iter()
            .take(self.width())
            .map(|c| escape_cell(c.as_ref()))
            .collect();
        row.resize(self.width(), String::new());
        self.rows.push(row);
    }

    /// Render header, separator and data rows, each terminated by `\n`.
    pub fn render(&self) -> String {
        let mut out = String::new();

        push_line(&mut out, self.headers.iter().map(String::as_str));

        let dashes: Vec<String> = self
            .headers
            .iter()
            .map(|h| "-".repeat(h.chars().count().max(3)))
            .collect();
        push_line(&mut out, dashes.iter().map(String::as_str));

        for row in &self.rows {
            push_line(&mut out, row.iter().map(String::as_str));
        }

        out
    }
}

fn push_line<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>) {
    out.push('|');
    for cell in cells {
        out.push(' ');
        out.push_str(cell);
        out.push_str(" |");
    }
    out.push('\n');
}

/// Make arbitrary text safe for a single table cell.
///
/// Line breaks (and the whitespace around them) collapse to one space and
/// `|` is backslash-escaped.
pub fn escape_cell(text: &str) -> String {
    static BREAK_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"\s*(?:\r\n|\r|\n)\s*").expect("valid regex"));

    BREAK_RE
        .replace_all(text.trim(), " ")
        .replace('|', "\\|")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_header_separator_and_rows() {
        let mut table = Table::new(["Name", "Description", "Version"]);
        table.push_row(["[example-plugin]", "Does things", "1.2.0"]);

        let rendered = table.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "| Name | Description | Version |");
        assert_eq!(lines[1], "| ---- | ----------- | ------- |");
        assert_eq!(lines[2], "| [example-plugin] | Does things | 1.2.0 |");
    }

    #[test]
    fn short_rows_are_padded() {
        let mut table = Table::new(["Name", "Description"]);
        table.push_row(["only-name"]);
        assert!(table.render().ends_with("| only-name |  |\n"));
    }

    #[test]
    fn long_rows_are_truncated() {
        let mut table = Table::new(["Name"]);
        table.push_row(["a", "b"]);
        assert!(table.render().ends_with("| a |\n"));
    }

    #[test]
    fn escape_cell_handles_pipes_and_newlines() {
        assert_eq!(escape_cell("a | b"), "a \\| b");
        assert_eq!(escape_cell("first line\n   second\r\nthird"), "first line second third");
        assert_eq!(escape_cell("  padded  "), "padded");
        assert_eq!(escape_cell(""), "");
    }
}
