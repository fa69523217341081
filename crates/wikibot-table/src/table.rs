//! Pipe-syntax table parsing and rendering

use crate::error::TableError;
use crate::Result;

/// A table destined for an article: header cells, data rows, and three
/// independent style strings used only when rendering. Parsing never
/// produces styles, it is a pure decode of the cell matrix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub style: Option<String>,
    pub header_style: Option<String>,
    pub row_style: Option<String>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the table as pipe-syntax markup.
    ///
    /// Cell content is emitted verbatim, so cells must not themselves
    /// start a line with `|`, `!` or the table sentinels.
    pub fn to_markup(&self) -> String {
        let mut markup = format!("{{| {}\n", self.style.as_deref().unwrap_or(""));
        if !self.header.is_empty() {
            if let Some(style) = &self.header_style {
                markup.push_str(&format!("|---- {style}\n"));
            }
            for cell in &self.header {
                markup.push_str(&format!("!{cell}\n"));
            }
        }
        for row in &self.rows {
            markup.push_str(&format!(
                "|---- {}\n",
                self.row_style.as_deref().unwrap_or("")
            ));
            for cell in row {
                markup.push_str(&format!("|{cell}\n"));
            }
        }
        markup.push_str("|}");
        markup
    }

    /// Parse the first pipe-syntax table found in `text` into rows of
    /// trimmed cell strings. Prose before the table is ignored; scanning
    /// stops at the closing sentinel.
    ///
    /// When the closing `|}` never appears the result is empty rather
    /// than a partial table. Kept for compatibility with existing
    /// callers even though a partial result might be more useful.
    pub fn parse(text: &str) -> Result<Vec<Vec<String>>> {
        let mut rows: Vec<Vec<String>> = Vec::new();
        let mut row: Vec<String> = Vec::new();
        let mut in_table = false;

        for raw in text.lines() {
            if raw.starts_with("{|") {
                rows.clear();
                row.clear();
                in_table = true;
                continue;
            }
            if !in_table {
                continue;
            }

            let line = raw.trim_start_matches(' ');
            if line.starts_with("|}") {
                if !row.is_empty() {
                    rows.push(std::mem::take(&mut row));
                }
                return Ok(rows);
            } else if line.starts_with("|-") {
                if !row.is_empty() {
                    rows.push(std::mem::take(&mut row));
                }
            } else if line == "!" || line == "|" {
                row.push(String::new());
            } else if let Some(cells) = line.strip_prefix('!') {
                for cell in split_cells(cells, true) {
                    row.push(cell);
                }
            } else if let Some(cells) = line.strip_prefix('|') {
                for cell in split_cells(cells, false) {
                    row.push(cell);
                }
            } else if !line.trim().is_empty() {
                // Continuation of a multi-line cell.
                match row.last_mut() {
                    Some(cell) => {
                        cell.push('\n');
                        cell.push_str(raw);
                    }
                    None => return Err(TableError::OrphanContinuation(raw.to_string())),
                }
            }
        }
        Ok(Vec::new())
    }
}

/// Split a cell line on its inline separators: `||` for data cells,
/// `||` or `!!` for header cells. Trailing empty segments are kept.
fn split_cells(content: &str, header: bool) -> Vec<String> {
    let normalized;
    let content = if header {
        normalized = content.replace("!!", "||");
        normalized.as_str()
    } else {
        content
    };
    content
        .split("||")
        .map(|cell| cell.trim().to_string())
        .collect()
}
