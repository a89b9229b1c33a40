use tracing::{info, warn};

use crate::error::StoreError;
use crate::models::movie_model::Movie;
use crate::store::CatalogStore;

use super::EditOutcome;

impl CatalogStore {
    /// Replace the movie with the same id and rewrite the movies file.
    /// Nothing is written when the id is unknown.
    pub fn edit_movie(&mut self, movie: Movie) -> Result<EditOutcome, StoreError> {
        let Some(&index) = self.movie_index.get(&movie.id) else {
            warn!("Movie {} not found", movie.id);
            return Ok(EditOutcome::NotFound);
        };

        let id = movie.id;
        self.movies[index] = movie;
        self.save_movies()?;

        info!("Updated movie {}", id);
        Ok(EditOutcome::Updated)
    }
}
