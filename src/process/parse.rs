// src/process/parse.rs
use tracing::{debug, instrument};

use crate::process::table::{Row, Table};
use crate::process::utils::trim_cell;

/// Tokenize published-sheet CSV into a [`Table`].
///
/// Single pass, no backtracking. A `"` toggles quote-mode and is dropped, so
/// quoted fields may hold commas and line breaks, but a literal quote cannot
/// be written (`""` is two toggles, not an escape). Blank lines produce no
/// row. Unbalanced quotes never fail; the remainder of the input is simply
/// read in whichever mode the last toggle left. Cells are trimmed afterwards.
#[instrument(level = "debug", skip(text), fields(bytes = text.len()))]
pub fn parse_csv(text: &str) -> Table {
    let mut rows: Vec<Row> = Vec::new();
    let mut cur = String::new();
    let mut row: Row = Vec::new();
    let mut in_quotes = false;

    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => row.push(std::mem::take(&mut cur)),
            '\n' | '\r' if !in_quotes => {
                if !cur.is_empty() || !row.is_empty() {
                    row.push(std::mem::take(&mut cur));
                    rows.push(std::mem::take(&mut row));
                }
                // CRLF
                if ch == '\r' && chars.peek() == Some(&'\n') {
                    chars.next();
                }
            }
            _ => cur.push(ch),
        }
    }

    // last line without a terminator
    if !cur.is_empty() || !row.is_empty() {
        row.push(cur);
        rows.push(row);
    }

    if in_quotes {
        debug!("input ended inside a quoted field");
    }

    for row in rows.iter_mut() {
        for cell in row.iter_mut() {
            let trimmed = trim_cell(cell);
            if trimmed.len() != cell.len() {
                *cell = trimmed.to_string();
            }
        }
    }

    debug!(rows = rows.len(), "parsed csv");
    Table::new(rows)
}
