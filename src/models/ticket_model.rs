use crate::error::RecordError;
use crate::utils::{parse_number, split_record};

use super::showtime_model::ShowtimeKey;

/// One sold seat, stored in `sold_tickets.csv` as `movieId,time,seat`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub showtime: ShowtimeKey,
    pub seat: String,
}

impl Ticket {
    pub fn new(showtime: ShowtimeKey, seat: impl Into<String>) -> Self {
        Self {
            showtime,
            seat: seat.into(),
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
            showtime: ShowtimeKey::new(parse_number("movieId", fields[0])?, fields[1]),
            seat: fields[2].to_string(),
        })
    }

    pub fn to_record(&self) -> String {
        format!("{},{}", self.showtime, self.seat)
    }
}
