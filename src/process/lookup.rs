// src/process/lookup.rs
use serde::Serialize;
use std::fmt;
use tracing::debug;

use crate::process::table::Table;
use crate::process::utils::{cell_or, normalize_id};

/// Substituted for any column a matched row does not carry.
pub const PLACEHOLDER: &str = "N/A";

const COL_ID: usize = 0;
const COL_NAME: usize = 1;
const COL_DEGREE: usize = 2;
const COL_CONCENTRATION: usize = 3;
const COL_YEAR: usize = 4;

/// A registration ID in its compared form (trimmed, uppercased).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Query(String);

impl Query {
    pub fn normalize(raw: &str) -> Self {
        Self(normalize_id(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Fields of a matched row. Values are raw sheet text; escape before display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    pub name: String,
    pub degree: String,
    pub concentration: String,
    pub year: String,
}

impl Record {
    fn from_row(row: &[String]) -> Self {
        Self {
            name: cell_or(row, COL_NAME, PLACEHOLDER).to_string(),
            degree: cell_or(row, COL_DEGREE, PLACEHOLDER).to_string(),
            concentration: cell_or(row, COL_CONCENTRATION, PLACEHOLDER).to_string(),
            year: cell_or(row, COL_YEAR, PLACEHOLDER).to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    Found(Record),
    NotFound,
}

/// Scan the data rows top to bottom and return the first whose ID column
/// equals `query` after normalization. The header row is skipped without
/// being checked against any expected column names.
pub fn lookup(table: &Table, query: &Query) -> Lookup {
    let hit = table.data_rows().iter().enumerate().find(|(_, row)| {
        let id = row.get(COL_ID).map(String::as_str).unwrap_or_default();
        normalize_id(id) == query.as_str()
    });

    match hit {
        Some((idx, row)) => {
            debug!(row = idx + 1, "matched registration id");
            Lookup::Found(Record::from_row(row))
        }
        None => {
            debug!(scanned = table.data_rows().len(), "no matching row");
            Lookup::NotFound
        }
    }
}
