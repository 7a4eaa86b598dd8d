//! Integration tests for promptvault

use promptvault::{parse_records, Record, Sheet};

const EXPORT: &str = concat!(
    "Kategori,Prompt\r\n",
    "Writing,\"Draft a short intro paragraph about \"\"Rust\"\".\"\r\n",
    "Writing,\"Rewrite the following text:\n\n{TEXT}\"\r\n",
    "Review,  Summarize the diff below.  \r\n",
    "Review\r\n",
    "\r\n",
    "\r\n",
);

#[test]
fn test_published_export_end_to_end() {
    let records = parse_records(EXPORT);

    assert_eq!(records.len(), 4);
    assert_eq!(
        records[0],
        Record::new("Writing", "Draft a short intro paragraph about \"Rust\".")
    );
    // Multi-line body survives with its newlines intact
    assert_eq!(records[1].body, "Rewrite the following text:\n\n{TEXT}");
    // Category trimmed, body untouched
    assert_eq!(records[2].category, "Review");
    assert_eq!(records[2].body, "  Summarize the diff below.  ");
    // Ragged row pads the body
    assert_eq!(records[3], Record::new("Review", ""));
}

#[test]
fn test_sheet_grouping_and_filtering() {
    let sheet = Sheet::from_csv(
        "https://docs.google.com/spreadsheets/d/e/KEY/pub?gid=77&output=csv",
        0,
        EXPORT,
    );

    assert_eq!(sheet.name, "Sheet 1 (gid 77)");
    assert_eq!(sheet.categories(), vec!["Writing", "Review"]);
    assert_eq!(sheet.prompts(Some("Review")).len(), 2);
    assert_eq!(sheet.prompts(None).len(), 4);
}

#[test]
fn test_multiple_sources_keep_positions() {
    let sources = [
        ("https://docs.google.com/d/e/A/pub?output=csv", "H,H\na,1\n"),
        ("https://docs.google.com/d/e/B/pub?gid=5&output=csv", "H,H\nb,2\n"),
    ];

    let sheets: Vec<Sheet> = sources
        .iter()
        .enumerate()
        .map(|(i, &(url, text))| Sheet::from_csv(url, i, text))
        .collect();

    assert_eq!(sheets[0].name, "Sheet 1");
    assert_eq!(sheets[1].name, "Sheet 2 (gid 5)");
    assert_eq!(sheets[0].records, vec![Record::new("a", "1")]);
    assert_eq!(sheets[1].records, vec![Record::new("b", "2")]);
}

#[test]
fn test_header_only_document_keeps_its_row() {
    // A one-row document is treated as data, never as a bare header
    let records = parse_records("Kategori,Prompt\n");
    assert_eq!(records, vec![Record::new("Kategori", "Prompt")]);
}

#[cfg(feature = "fetch")]
#[test]
fn test_fetch_error_is_user_readable() {
    use promptvault::{source_urls, SheetFetcher, VaultError};

    let urls = source_urls("https://[invalid/pub?output=csv\n");
    let fetcher = SheetFetcher::new().unwrap();
    let err = fetcher.fetch_all(&urls).unwrap_err();
    assert!(err.to_string().starts_with("failed to fetch "));
    match err {
        VaultError::Fetch { url, .. } => {
            assert_eq!(url, "https://[invalid/pub?output=csv");
        }
        other => panic!("expected transport error, got {other}"),
    }
}
