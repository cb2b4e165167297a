/// One parsed line: positional cells (ID, Name, Degree, Concentration, Year).
pub type Row = Vec<String>;

/// Rows of a published sheet, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    /// Row 0 is the header and is never treated as data.
    pub rows: Vec<Row>,
}

impl Table {
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn header(&self) -> Option<&Row> {
        self.rows.first()
    }

    /// Everything after the header.
    pub fn data_rows(&self) -> &[Row] {
        self.rows.get(1..).unwrap_or(&[])
    }

    /// A sheet needs a header plus at least one data row to be searchable.
    pub fn has_data(&self) -> bool {
        self.rows.len() >= 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Row {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn header_is_split_from_data() {
        let table = Table::new(vec![row(&["ID", "Name"]), row(&["AB1", "Alice"])]);
        assert_eq!(table.header(), Some(&row(&["ID", "Name"])));
        assert_eq!(table.data_rows(), &[row(&["AB1", "Alice"])]);
        assert!(table.has_data());
    }

    #[test]
    fn header_only_has_no_data() {
        let table = Table::new(vec![row(&["ID", "Name"])]);
        assert!(table.data_rows().is_empty());
        assert!(!table.has_data());

        let empty = Table::default();
        assert!(empty.is_empty());
        assert!(empty.header().is_none());
        assert!(empty.data_rows().is_empty());
    }
}
