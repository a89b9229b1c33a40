use std::fs;
use std::io;
use std::path::Path;

use crate::error::RecordError;

pub const SEAT_ROWS: std::ops::RangeInclusive<char> = 'A'..='E';
pub const SEATS_PER_ROW: u32 = 10;

pub fn split_record(line: &str) -> Vec<&str> {
    line.split(',').collect()
}

pub fn parse_number(field: &'static str, value: &str) -> Result<i32, RecordError> {
    value
        .parse()
        .map_err(|_| RecordError::InvalidNumber {
            field,
            value: value.to_string(),
        })
}

/// Every bookable seat label in row-major order: `A1..A10`, `B1..B10`, up to `E10`.
pub fn seat_grid() -> Vec<String> {
    SEAT_ROWS
        .flat_map(|row| (1..=SEATS_PER_ROW).map(move |number| format!("{row}{number}")))
        .collect()
}

/// Rewrites `path` with one record per line, each followed by `\n`.
pub fn write_records<I>(path: &Path, records: I) -> io::Result<()>
where
    I: IntoIterator<Item = String>,
{
    let mut content = String::new();
    for record in records {
        content.push_str(&record);
        content.push('\n');
    }
    fs::write(path, content)
}
