use tracing::{info, warn};

use crate::error::StoreError;
use crate::models::{showtime_model::ShowtimeKey, ticket_model::Ticket};
use crate::store::CatalogStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaleOutcome {
    Sold(Ticket),
    SeatTaken,
    ShowtimeNotFound,
}

impl SaleOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            SaleOutcome::Sold(_) => "Билет продан.",
            SaleOutcome::SeatTaken => "Извините, выбранное место уже занято.",
            SaleOutcome::ShowtimeNotFound => "Сеанс с указанным фильмом и временем не найден.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnOutcome {
    Returned,
    NotFound,
}

impl ReturnOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            ReturnOutcome::Returned => "Билет возвращен.",
            ReturnOutcome::NotFound => "Указанный билет не найден.",
        }
    }
}

impl CatalogStore {
    /// Sell `seat` for the showtime, recording a ticket.
    /// Both the showtimes and sold tickets files are rewritten on success.
    pub fn sell_ticket(
        &mut self,
        showtime: &ShowtimeKey,
        seat: &str,
    ) -> Result<SaleOutcome, StoreError> {
        let Some(entry) = self.showtime_mut(showtime) else {
            warn!("Cannot sell seat {} for unknown showtime {}", seat, showtime);
            return Ok(SaleOutcome::ShowtimeNotFound);
        };

        if entry.is_taken(seat) {
            warn!("Seat {} already taken for showtime {}", seat, showtime);
            return Ok(SaleOutcome::SeatTaken);
        }

        entry.seats.push(seat.to_string());
        let ticket = Ticket::new(showtime.clone(), seat);
        self.sold_tickets.push(ticket.clone());

        self.save_showtimes()?;
        self.save_sold_tickets()?;

        info!("Sold seat {} for showtime {}", seat, showtime);
        Ok(SaleOutcome::Sold(ticket))
    }

    /// Return a previously sold ticket, freeing its seat.
    pub fn return_ticket(&mut self, ticket: &Ticket) -> Result<ReturnOutcome, StoreError> {
        let Some(position) = self.sold_tickets.iter().position(|sold| sold == ticket) else {
            warn!("Ticket {} not found", ticket.to_record());
            return Ok(ReturnOutcome::NotFound);
        };

        if let Some(showtime) = self.showtime_mut(&ticket.showtime) {
            if let Some(seat) = showtime.seats.iter().position(|seat| *seat == ticket.seat) {
                showtime.seats.remove(seat);
            }
        }
        self.sold_tickets.remove(position);

        self.save_showtimes()?;
        self.save_sold_tickets()?;

        info!("Returned seat {} for showtime {}", ticket.seat, ticket.showtime);
        Ok(ReturnOutcome::Returned)
    }
}
