//! Showtime and ticket bookkeeping for a single cinema, persisted to flat
//! comma-separated files.

pub mod config;
pub mod controllers;
pub mod error;
pub mod models;
pub mod store;
pub mod utils;

pub use config::{CatalogPaths, StoreConfig};
pub use controllers::{
    showtime_controller::{display_available_seats, MarkOutcome},
    ticket_controller::{ReturnOutcome, SaleOutcome},
    EditOutcome,
};
pub use error::{CatalogFile, ConfigError, LoadError, RecordError, StoreError};
pub use models::{
    movie_model::Movie,
    showtime_model::{Showtime, ShowtimeKey},
    ticket_model::Ticket,
};
pub use store::{CatalogStore, DanglingReference};
