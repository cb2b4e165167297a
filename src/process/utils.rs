/// Sheet exports often carry a BOM on the first cell; it counts as whitespace
/// here, NEL does not.
fn is_trim_char(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

/// Trim the whitespace set browsers strip from sheet text.
pub fn trim_cell(raw: &str) -> &str {
    raw.trim_matches(is_trim_char)
}

/// Trim whitespace + uppercase; the form both the query and the ID column
/// are compared in.
pub fn normalize_id(raw: &str) -> String {
    trim_cell(raw).to_uppercase()
}

/// Cell at `idx`, or `placeholder` when the row is short or the cell is blank.
pub fn cell_or<'a>(row: &'a [String], idx: usize, placeholder: &'a str) -> &'a str {
    match row.get(idx) {
        Some(cell) if !cell.is_empty() => cell,
        _ => placeholder,
    }
}
