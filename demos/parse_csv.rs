//! Parse a local CSV export and list its prompts by category
//!
//! Usage: cargo run --example parse_csv -- path/to/export.csv

use promptvault::Sheet;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let path = std::env::args()
        .nth(1)
        .ok_or("usage: parse_csv <export.csv>")?;
    let text = std::fs::read_to_string(&path)?;

    let sheet = Sheet::from_csv(&path, 0, &text);
    println!("{}: {} prompts", sheet.name, sheet.records.len());

    for category in sheet.categories() {
        println!("\n[{}]", category);
        for prompt in sheet.prompts(Some(category)) {
            println!("  - {}", prompt.replace('\n', "\n    "));
        }
    }

    Ok(())
}
