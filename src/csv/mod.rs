//! CSV utilities for parsing published spreadsheet exports

mod parser;

pub use parser::CsvParser;
