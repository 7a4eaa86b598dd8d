//! Prompt extraction from published CSV exports
//!
//! Layers the two-column prompt convention on top of [`CsvParser`]: the
//! first column is a category label, the second the prompt body, and the
//! first row of a multi-row document is assumed to be a header.

use crate::csv::CsvParser;
use crate::types::Record;
use indexmap::IndexSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Parse a CSV document into prompt records
///
/// Never fails; malformed or empty input degrades to an empty or partial
/// result. After scanning, three passes run in order:
/// 1. Trailing rows whose every field trims to empty are dropped.
/// 2. If more than one row remains, the first is dropped as a header row.
///    A single remaining row is kept as data.
/// 3. Each remaining row maps to a [`Record`] (first field trimmed as
///    category, second field verbatim as body, missing fields empty).
pub fn parse_records(text: &str) -> Vec<Record> {
    let mut rows = CsvParser::default().parse_document(text);

    while rows
        .last()
        .is_some_and(|row| row.iter().all(|field| field.trim().is_empty()))
    {
        rows.pop();
    }

    let data_rows = if rows.len() > 1 { &rows[1..] } else { &rows[..] };
    data_rows.iter().map(|row| Record::from_row(row)).collect()
}

/// Human-readable label for a fetched source
///
/// When the URL carries a `gid=<digits>` sheet token the label includes it,
/// e.g. `Sheet 2 (gid 123)`; otherwise only the 1-based position is used.
pub fn sheet_label(url: &str, index: usize) -> String {
    match sheet_gid(url) {
        Some(gid) => format!("Sheet {} (gid {})", index + 1, gid),
        None => format!("Sheet {}", index + 1),
    }
}

/// First `gid=` token in the URL that is followed by at least one digit
fn sheet_gid(url: &str) -> Option<&str> {
    for (pos, _) in url.match_indices("gid=") {
        let rest = &url[pos + 4..];
        let digits = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        if digits > 0 {
            return Some(&rest[..digits]);
        }
    }
    None
}

/// One fetched source document, parsed into prompt records
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Sheet {
    /// Source locator the document was fetched from
    pub url: String,
    /// Display label, see [`sheet_label`]
    pub name: String,
    /// Parsed records in source row order
    pub records: Vec<Record>,
}

impl Sheet {
    /// Parse CSV text fetched from `url` at position `index` among sources
    pub fn from_csv(url: impl Into<String>, index: usize, text: &str) -> Self {
        let url = url.into();
        let name = sheet_label(&url, index);
        let records = parse_records(text);
        Sheet { url, name, records }
    }

    /// Unique non-blank category labels, in first-seen order
    pub fn categories(&self) -> Vec<&str> {
        let mut set: IndexSet<&str> = IndexSet::new();
        for record in &self.records {
            if !record.category.is_empty() {
                set.insert(record.category.as_str());
            }
        }
        set.into_iter().collect()
    }

    /// Prompt bodies, optionally restricted to one category
    ///
    /// `None` (or a filter that trims to empty) returns every body.
    pub fn prompts(&self, category: Option<&str>) -> Vec<&str> {
        let filter = category.map(str::trim).filter(|c| !c.is_empty());
        self.records
            .iter()
            .filter(|record| filter.is_none_or(|c| record.category == c))
            .map(|record| record.body.as_str())
            .collect()
    }
}
