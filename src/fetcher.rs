//! HTTP retrieval of published CSV exports
//!
//! One GET per source URL, parsed into a [`Sheet`] as each response
//! arrives. Fetching is sequential and fails fast: the first bad source
//! aborts the batch so the caller can surface a single message.

use crate::error::{Result, VaultError};
use crate::sheet::Sheet;
use reqwest::blocking::Client;
use reqwest::header::CACHE_CONTROL;

/// Fetches published CSV exports and parses them into sheets
///
/// # Examples
///
/// ```no_run
/// use promptvault::SheetFetcher;
///
/// let fetcher = SheetFetcher::new().unwrap();
/// let sheets = fetcher
///     .fetch_all(&["https://docs.google.com/spreadsheets/d/e/KEY/pub?output=csv"])
///     .unwrap();
/// for sheet in &sheets {
///     println!("{}: {} prompts", sheet.name, sheet.records.len());
/// }
/// ```
pub struct SheetFetcher {
    client: Client,
}

impl SheetFetcher {
    /// Create a fetcher with a default HTTP client
    pub fn new() -> Result<Self> {
        let client = Client::builder().build().map_err(VaultError::Client)?;
        Ok(SheetFetcher { client })
    }

    /// Fetch one source and parse it, labeled by its position in the batch
    ///
    /// Responses are requested uncached so a refresh always sees the
    /// latest published data.
    pub fn fetch(&self, url: &str, index: usize) -> Result<Sheet> {
        let response = self
            .client
            .get(url)
            .header(CACHE_CONTROL, "no-store")
            .send()
            .map_err(|source| VaultError::Fetch {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(VaultError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let text = response.text().map_err(|source| VaultError::Fetch {
            url: url.to_string(),
            source,
        })?;

        Ok(Sheet::from_csv(url, index, &text))
    }

    /// Fetch every source in order, aborting on the first failure
    pub fn fetch_all<S: AsRef<str>>(&self, urls: &[S]) -> Result<Vec<Sheet>> {
        let mut sheets = Vec::with_capacity(urls.len());
        for (index, url) in urls.iter().enumerate() {
            sheets.push(self.fetch(url.as_ref(), index)?);
        }
        Ok(sheets)
    }
}

/// Split a pasted link list into source URLs
///
/// One URL per line; surrounding whitespace is trimmed and blank lines are
/// dropped.
pub fn source_urls(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}
