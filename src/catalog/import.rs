//! # Tabular Import Normalizer
//!
//! Turns a loosely formatted delimited text file into new catalog records.
//!
//! ## Cleaning
//!
//! Spreadsheet exports vary in delimiter and punctuation, so the raw text is
//! rewritten before parsing, in this order:
//!
//! | From | To |
//! |------|----|
//! | `，` (full-width comma) | `,` |
//! | `;` | `,` |
//! | tab | `,` |
//! | `, ` | `,` |
//! | `（` / `）` | ` (` / `) ` |
//!
//! ## Shape
//!
//! The first non-comment line is the header. Recognized column names
//! (case-sensitive): `title`, `author`, `height`, `width`, `medium`, `date`.
//! Lines starting with `#` are comments. Missing columns and empty cells
//! become empty strings; only structural problems fail the import.

use csv::{ReaderBuilder, StringRecord, Trim};

use super::date::normalize_date;
use super::record::CardFields;
use super::store::RecordStore;
use crate::error::{LabelError, Result};

/// Column names recognized in the header row.
pub const COLUMNS: [&str; 6] = ["title", "author", "height", "width", "medium", "date"];

/// Apply delimiter and punctuation cleanup to raw file text.
pub fn clean_text(raw: &str) -> String {
    raw.replace('，', ",")
        .replace(';', ",")
        .replace('\t', ",")
        .replace(", ", ",")
        .replace('（', " (")
        .replace('）', ") ")
}

/// Header positions of the recognized columns.
#[derive(Debug, Default)]
struct ColumnMap {
    title: Option<usize>,
    author: Option<usize>,
    height: Option<usize>,
    width: Option<usize>,
    medium: Option<usize>,
    date: Option<usize>,
}

impl ColumnMap {
    fn from_header(header: &StringRecord) -> Self {
        let find = |name: &str| header.iter().position(|column| column == name);
        Self {
            title: find("title"),
            author: find("author"),
            height: find("height"),
            width: find("width"),
            medium: find("medium"),
            date: find("date"),
        }
    }

    /// Map a data row onto card fields, defaulting absent cells to "".
    fn fields(&self, row: &StringRecord) -> CardFields {
        let cell = |index: Option<usize>| {
            index
                .and_then(|i| row.get(i))
                .unwrap_or_default()
                .to_string()
        };
        CardFields {
            title: cell(self.title),
            author: cell(self.author),
            height: cell(self.height),
            width: cell(self.width),
            medium: cell(self.medium),
            date: normalize_date(&cell(self.date)),
        }
    }
}

/// Parse cleaned text into card fields, one per data row.
///
/// Fails with [`LabelError::Parse`] when there is no header row, when a row
/// has more cells than the header, or when the reader itself fails.
pub fn parse_rows(text: &str) -> Result<Vec<CardFields>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .comment(Some(b'#'))
        .flexible(true)
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    let header = reader.headers()?.clone();
    if header.is_empty() {
        return Err(LabelError::Parse("missing header row".to_string()));
    }
    let columns = ColumnMap::from_header(&header);

    let mut rows = Vec::new();
    for result in reader.records() {
        let row = result?;
        if row.len() > header.len() {
            let line = row.position().map(|pos| pos.line()).unwrap_or_default();
            return Err(LabelError::Parse(format!(
                "line {}: expected {} fields, saw {}",
                line,
                header.len(),
                row.len()
            )));
        }
        rows.push(columns.fields(&row));
    }

    Ok(rows)
}

/// Import `raw_text` into a new store derived from `store`.
///
/// Existing records and ids are untouched; on error nothing is imported.
/// Returns the new store and the ids of the imported records.
pub fn import_records(raw_text: &str, store: &RecordStore) -> Result<(RecordStore, Vec<String>)> {
    let rows = parse_rows(&clean_text(raw_text))?;
    Ok(store.with_appended(rows))
}
