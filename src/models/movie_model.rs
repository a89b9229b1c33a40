use crate::error::RecordError;
use crate::utils::{parse_number, split_record};

/// A movie as stored in `movies.csv` (`id,title,duration`).
///
/// Titles are written verbatim, so a title containing a comma produces a line
/// that no longer loads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movie {
    pub id: i32,
    pub title: String,
    pub duration: i32,
}

impl Movie {
    pub fn new(id: i32, title: impl Into<String>, duration: i32) -> Self {
        Self {
            id,
            title: title.into(),
            duration,
        }
    }

    pub fn from_record(line: &str) -> Result<Self, RecordError> {
        let fields = split_record(line);
        if fields.len() != 3 {
            return Err(RecordError::FieldCount {
                expected: "3",
                found: fields.len(),
            });
        }

        Ok(Self {
            id: parse_number("id", fields[0])?,
            title: fields[1].to_string(),
            duration: parse_number("duration", fields[2])?,
        })
    }

    pub fn to_record(&self) -> String {
        format!("{},{},{}", self.id, self.title, self.duration)
    }
}
