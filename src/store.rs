use std::collections::HashMap;
use std::fs;
use std::hash::Hash;
use std::io;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::config::CatalogPaths;
use crate::error::{CatalogFile, LoadError, RecordError, StoreError};
use crate::models::{
    movie_model::Movie,
    showtime_model::{Showtime, ShowtimeKey},
    ticket_model::Ticket,
};
use crate::utils::write_records;

/// A record whose reference does not resolve. Reported, never rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DanglingReference {
    /// The showtime screens a movie id absent from the movies file.
    Showtime(ShowtimeKey),
    /// The ticket points at a showtime absent from the showtimes file.
    Ticket(Ticket),
}

/// In-memory catalog of movies, showtimes and sold tickets, backed by three
/// flat files that are rewritten in full after every mutation.
///
/// Files are written without locking: only one process may work on a given
/// set of catalog files at a time.
#[derive(Debug)]
pub struct CatalogStore {
    pub(crate) paths: CatalogPaths,
    pub(crate) movies: Vec<Movie>,
    pub(crate) showtimes: Vec<Showtime>,
    pub(crate) sold_tickets: Vec<Ticket>,
    pub(crate) movie_index: HashMap<i32, usize>,
    pub(crate) showtime_index: HashMap<ShowtimeKey, usize>,
}

impl CatalogStore {
    pub fn open(paths: CatalogPaths) -> Result<Self, LoadError> {
        let movies = load_records(CatalogFile::Movies, &paths.movies, Movie::from_record)?;
        let showtimes =
            load_records(CatalogFile::Showtimes, &paths.showtimes, Showtime::from_record)?;
        let sold_tickets =
            load_records(CatalogFile::SoldTickets, &paths.sold_tickets, Ticket::from_record)?;

        info!(
            "Loaded {} movies, {} showtimes, {} sold tickets",
            movies.len(),
            showtimes.len(),
            sold_tickets.len()
        );

        let store = Self {
            movie_index: index_by(&movies, |movie| movie.id),
            showtime_index: index_by(&showtimes, Showtime::key),
            paths,
            movies,
            showtimes,
            sold_tickets,
        };

        for reference in store.dangling_references() {
            warn!("Unresolved reference in catalog: {:?}", reference);
        }

        Ok(store)
    }

    pub fn paths(&self) -> &CatalogPaths {
        &self.paths
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn showtimes(&self) -> &[Showtime] {
        &self.showtimes
    }

    pub fn sold_tickets(&self) -> &[Ticket] {
        &self.sold_tickets
    }

    pub fn movie(&self, id: i32) -> Option<&Movie> {
        self.movie_index.get(&id).map(|&index| &self.movies[index])
    }

    pub fn showtime(&self, key: &ShowtimeKey) -> Option<&Showtime> {
        self.showtime_index.get(key).map(|&index| &self.showtimes[index])
    }

    pub(crate) fn showtime_mut(&mut self, key: &ShowtimeKey) -> Option<&mut Showtime> {
        let index = *self.showtime_index.get(key)?;
        self.showtimes.get_mut(index)
    }

    /// Showtimes whose movie is unknown and tickets whose showtime is unknown.
    pub fn dangling_references(&self) -> Vec<DanglingReference> {
        let showtimes = self
            .showtimes
            .iter()
            .filter(|showtime| !self.movie_index.contains_key(&showtime.movie_id))
            .map(|showtime| DanglingReference::Showtime(showtime.key()));

        let tickets = self
            .sold_tickets
            .iter()
            .filter(|ticket| !self.showtime_index.contains_key(&ticket.showtime))
            .map(|ticket| DanglingReference::Ticket(ticket.clone()));

        showtimes.chain(tickets).collect()
    }

    pub(crate) fn save_movies(&self) -> Result<(), StoreError> {
        save_records(
            CatalogFile::Movies,
            &self.paths.movies,
            self.movies.iter().map(Movie::to_record),
        )
    }

    pub(crate) fn save_showtimes(&self) -> Result<(), StoreError> {
        save_records(
            CatalogFile::Showtimes,
            &self.paths.showtimes,
            self.showtimes.iter().map(Showtime::to_record),
        )
    }

    pub(crate) fn save_sold_tickets(&self) -> Result<(), StoreError> {
        save_records(
            CatalogFile::SoldTickets,
            &self.paths.sold_tickets,
            self.sold_tickets.iter().map(Ticket::to_record),
        )
    }
}

fn load_records<T>(
    file: CatalogFile,
    path: &Path,
    parse: fn(&str) -> Result<T, RecordError>,
) -> Result<Vec<T>, LoadError> {
    let content = fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => LoadError::Missing {
            file,
            path: path.to_path_buf(),
        },
        _ => LoadError::Read {
            file,
            path: path.to_path_buf(),
            source,
        },
    })?;

    content
        .lines()
        .enumerate()
        .map(|(index, line)| {
            parse(line).map_err(|reason| LoadError::Malformed {
                file,
                path: path.to_path_buf(),
                line: index + 1,
                reason,
            })
        })
        .collect()
}

fn save_records<I>(file: CatalogFile, path: &Path, records: I) -> Result<(), StoreError>
where
    I: IntoIterator<Item = String>,
{
    write_records(path, records).map_err(|source| StoreError::Write {
        file,
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Rewrote {} file {}", file, path.display());
    Ok(())
}

/// Maps each key to the position of its first occurrence.
fn index_by<T, K, F>(items: &[T], key: F) -> HashMap<K, usize>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut index = HashMap::with_capacity(items.len());
    for (position, item) in items.iter().enumerate() {
        index.entry(key(item)).or_insert(position);
    }
    index
}
