pub mod movie_model;
pub mod showtime_model;
pub mod ticket_model;
