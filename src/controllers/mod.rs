pub mod movie_controller;
pub mod showtime_controller;
pub mod ticket_controller;

/// Result of replacing a movie or showtime record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    Updated,
    NotFound,
}

impl EditOutcome {
    pub fn movie_message(&self) -> &'static str {
        match self {
            EditOutcome::Updated => "Данные о фильме обновлены.",
            EditOutcome::NotFound => "Фильм с указанным ID не найден.",
        }
    }

    pub fn showtime_message(&self) -> &'static str {
        match self {
            EditOutcome::Updated => "Данные о сеансе обновлены.",
            EditOutcome::NotFound => "Сеанс с указанным фильмом и временем не найден.",
        }
    }
}
