use std::fmt;

use crate::error::RecordError;
use crate::utils::{parse_number, split_record};

/// Identifies a showtime by the movie it screens and its time label.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShowtimeKey {
    pub movie_id: i32,
    pub time: String,
}

impl ShowtimeKey {
    pub fn new(movie_id: i32, time: impl Into<String>) -> Self {
        Self {
            movie_id,
            time: time.into(),
        }
    }
}

impl fmt::Display for ShowtimeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.movie_id, self.time)
    }
}

/// A screening and the seats currently occupied for it, stored in
/// `showTimes.csv` as `movieId,time[,seat...]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Showtime {
    pub movie_id: i32,
    pub time: String,
    pub seats: Vec<String>,
}

impl Showtime {
    pub fn new(movie_id: i32, time: impl Into<String>) -> Self {
        Self {
            movie_id,
            time: time.into(),
            seats: Vec::new(),
        }
    }

    pub fn with_seats<I, S>(mut self, seats: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.seats = seats.into_iter().map(Into::into).collect();
        self
    }

    pub fn key(&self) -> ShowtimeKey {
        ShowtimeKey::new(self.movie_id, self.time.clone())
    }

    pub fn is_taken(&self, seat: &str) -> bool {
        self.seats.iter().any(|taken| taken == seat)
    }

    pub fn from_record(line: &str) -> Result<Self, RecordError> {
        let fields = split_record(line);
        if fields.len() < 2 {
            return Err(RecordError::FieldCount {
                expected: "at least 2",
                found: fields.len(),
            });
        }

        Ok(Self {
            movie_id: parse_number("movieId", fields[0])?,
            time: fields[1].to_string(),
            seats: fields[2..].iter().map(|seat| seat.to_string()).collect(),
        })
    }

    pub fn to_record(&self) -> String {
        let mut record = format!("{},{}", self.movie_id, self.time);
        for seat in &self.seats {
            record.push(',');
            record.push_str(seat);
        }
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_showtime_with_seats() {
        let showtime = Showtime::from_record("1,16:00,A1,B2").unwrap();
        assert_eq!(showtime.key(), ShowtimeKey::new(1, "16:00"));
        assert_eq!(showtime.seats, vec!["A1", "B2"]);
        assert!(showtime.is_taken("B2"));
        assert!(!showtime.is_taken("C3"));
    }

    #[test]
    fn test_empty_showtime_has_no_trailing_comma() {
        let showtime = Showtime::from_record("1,16:00").unwrap();
        assert!(showtime.seats.is_empty());
        assert_eq!(showtime.to_record(), "1,16:00");
    }

    #[test]
    fn test_single_field_is_rejected() {
        assert_eq!(
            Showtime::from_record("1").unwrap_err(),
            RecordError::FieldCount {
                expected: "at least 2",
                found: 1
            }
        );
    }

    #[test]
    fn test_key_display() {
        assert_eq!(ShowtimeKey::new(4, "21:30").to_string(), "4,21:30");
    }
}
