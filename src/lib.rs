//! # promptvault
//!
//! Fetches published spreadsheet CSV exports and organizes two-column
//! prompt data (category label, prompt body) for browsing by category.
//!
//! The core is a hand-rolled, quote-aware CSV scanner that handles quoted
//! delimiters, escaped quotes, and multi-line fields, paired with the
//! prompt-sheet conventions: trailing blank rows are trimmed, the first
//! row of a multi-row document is treated as a header, and each remaining
//! row becomes a [`Record`]. Parsing never fails; remote data is
//! unvalidated and malformed input degrades to a partial result.
//!
//! ## Features
//!
//! - `fetch` (default) — blocking HTTP retrieval via [`SheetFetcher`]
//! - `serde` — `Serialize`/`Deserialize` on [`Record`] and [`Sheet`]
//!
//! ## Examples
//!
//! ```
//! use promptvault::parse_records;
//!
//! let records = parse_records("Category,Prompt\nWriting,\"Draft an intro, short\"\n");
//! assert_eq!(records[0].category, "Writing");
//! assert_eq!(records[0].body, "Draft an intro, short");
//! ```

pub mod csv;
pub mod error;
#[cfg(feature = "fetch")]
pub mod fetcher;
pub mod sheet;
pub mod types;

pub use csv::CsvParser;
pub use error::{Result, VaultError};
#[cfg(feature = "fetch")]
pub use fetcher::{source_urls, SheetFetcher};
pub use sheet::{parse_records, sheet_label, Sheet};
pub use types::Record;
