//! Type definitions for parsed prompt data

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single parsed prompt row
///
/// `category` is the first column of the source row with surrounding
/// whitespace trimmed; `body` is the second column kept verbatim, since
/// prompt text is displayed preformatted and internal whitespace matters.
/// Rows with fewer than two fields fill the missing side with an empty
/// string rather than failing.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Record {
    /// Category label (trimmed)
    pub category: String,
    /// Prompt body (untrimmed, as-is)
    pub body: String,
}

impl Record {
    /// Create a record from already-extracted values
    pub fn new(category: impl Into<String>, body: impl Into<String>) -> Self {
        Record {
            category: category.into(),
            body: body.into(),
        }
    }

    /// Build a record from a parsed row of fields
    ///
    /// Fields beyond the row's length default to the empty string, so
    /// ragged rows never fault.
    pub fn from_row(row: &[String]) -> Self {
        Record {
            category: row.first().map(|f| f.trim().to_string()).unwrap_or_default(),
            body: row.get(1).cloned().unwrap_or_default(),
        }
    }
}
