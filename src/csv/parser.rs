//! CSV parsing with RFC 4180-like behavior

/// CSV parser for reading whole delimited documents
///
/// Scans the full document text in a single pass so that quoted fields may
/// contain the delimiter, escaped quotes (`""`), and even line terminators.
/// Parsing is total: malformed input degrades to a partial result instead of
/// failing. An unterminated quote at end-of-input keeps whatever content was
/// scanned, and a missing final newline does not drop the last row.
pub struct CsvParser {
    delimiter: u8,
    quote_char: u8,
}

impl CsvParser {
    /// Create a new CSV parser with custom delimiter and quote character
    pub fn new(delimiter: u8, quote_char: u8) -> Self {
        Self {
            delimiter,
            quote_char,
        }
    }

    /// Parse an entire document into rows of fields
    ///
    /// Rows are split on `\n`; `\r` outside quotes is ignored, which
    /// normalizes CRLF line endings. Inside quotes every character is kept
    /// verbatim, including newlines.
    pub fn parse_document(&self, text: &str) -> Vec<Vec<String>> {
        let delimiter = self.delimiter as char;
        let quote = self.quote_char as char;

        let mut rows: Vec<Vec<String>> = Vec::new();
        let mut row: Vec<String> = Vec::new();
        let mut field = String::new();
        let mut in_quotes = false;
        let mut chars = text.chars().peekable();

        while let Some(ch) = chars.next() {
            if in_quotes {
                if ch == quote {
                    // Check for escaped quote ("")
                    if chars.peek() == Some(&quote) {
                        field.push(quote);
                        chars.next(); // Skip second quote
                    } else {
                        // End of quoted section
                        in_quotes = false;
                    }
                } else {
                    // Verbatim content, newlines included
                    field.push(ch);
                }
            } else if ch == quote {
                in_quotes = true;
            } else if ch == delimiter {
                row.push(std::mem::take(&mut field));
            } else if ch == '\n' {
                row.push(std::mem::take(&mut field));
                rows.push(std::mem::take(&mut row));
            } else if ch == '\r' {
                // CRLF normalization
            } else {
                field.push(ch);
            }
        }

        // Flush the last row when the input lacks a final newline
        if !field.is_empty() || !row.is_empty() {
            row.push(field);
            rows.push(row);
        }

        rows
    }
}

impl Default for CsvParser {
    fn default() -> Self {
        Self::new(b',', b'"')
    }
}
