//! Fetch one or more published CSV exports and print their categories
//!
//! Usage: cargo run --example fetch_sheets -- <url> [<url>...]
//!
//! Works with Google Sheets "Publish to web" CSV links
//! (`.../pub?output=csv`, optionally with a `gid=` tab selector).

use promptvault::SheetFetcher;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let urls: Vec<String> = std::env::args().skip(1).collect();
    if urls.is_empty() {
        return Err("usage: fetch_sheets <url> [<url>...]".into());
    }

    let fetcher = SheetFetcher::new()?;
    let sheets = fetcher.fetch_all(&urls)?;

    for sheet in &sheets {
        println!("{} ({} prompts)", sheet.name, sheet.records.len());
        for category in sheet.categories() {
            println!("  {}: {}", category, sheet.prompts(Some(category)).len());
        }
    }

    Ok(())
}
