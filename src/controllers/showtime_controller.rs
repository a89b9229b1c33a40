use tracing::{info, warn};

use crate::error::StoreError;
use crate::models::showtime_model::{Showtime, ShowtimeKey};
use crate::store::CatalogStore;
use crate::utils::seat_grid;

use super::EditOutcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkOutcome {
    Marked { added: usize },
    ShowtimeNotFound,
}

impl MarkOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            MarkOutcome::Marked { .. } => "Места отмечены как занятые.",
            MarkOutcome::ShowtimeNotFound => "Сеанс с указанным фильмом и временем не найден.",
        }
    }
}

impl CatalogStore {
    /// Seats of the grid not yet occupied for the showtime, in grid order.
    pub fn available_seats(&self, showtime: &ShowtimeKey) -> Option<Vec<String>> {
        let showtime = self.showtime(showtime)?;
        Some(
            seat_grid()
                .into_iter()
                .filter(|seat| !showtime.is_taken(seat))
                .collect(),
        )
    }

    /// Replace the showtime with the same movie and time, seats included.
    pub fn edit_showtime(&mut self, showtime: Showtime) -> Result<EditOutcome, StoreError> {
        let key = showtime.key();
        let Some(entry) = self.showtime_mut(&key) else {
            warn!("Showtime {} not found", key);
            return Ok(EditOutcome::NotFound);
        };

        *entry = showtime;
        self.save_showtimes()?;

        info!("Updated showtime {}", key);
        Ok(EditOutcome::Updated)
    }

    /// Occupy seats without issuing tickets. Seats already taken are skipped;
    /// the showtimes file is rewritten once for the whole batch.
    pub fn mark_seats_taken<S: AsRef<str>>(
        &mut self,
        showtime: &ShowtimeKey,
        seats: &[S],
    ) -> Result<MarkOutcome, StoreError> {
        let Some(entry) = self.showtime_mut(showtime) else {
            warn!("Cannot mark seats for unknown showtime {}", showtime);
            return Ok(MarkOutcome::ShowtimeNotFound);
        };

        let mut added = 0;
        for seat in seats {
            let seat = seat.as_ref();
            if !entry.is_taken(seat) {
                entry.seats.push(seat.to_string());
                added += 1;
            }
        }
        self.save_showtimes()?;

        info!("Marked {} seats taken for showtime {}", added, showtime);
        Ok(MarkOutcome::Marked { added })
    }
}

/// Header and seat lines printed for a showtime's free seats.
pub fn display_available_seats(showtime: &ShowtimeKey, seats: &[String]) -> String {
    let mut output = format!("Доступные места для сеанса {}:", showtime.time);
    for seat in seats {
        output.push('\n');
        output.push_str(seat);
    }
    output
}
