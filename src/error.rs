use std::fmt;
use std::io;
use std::path::PathBuf;

/// The three files backing the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFile {
    Movies,
    Showtimes,
    SoldTickets,
}

impl fmt::Display for CatalogFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogFile::Movies => write!(f, "movies"),
            CatalogFile::Showtimes => write!(f, "showtimes"),
            CatalogFile::SoldTickets => write!(f, "sold tickets"),
        }
    }
}

/// Why a single line could not be turned into a record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    #[error("expected {expected} fields, found {found}")]
    FieldCount { expected: &'static str, found: usize },

    #[error("field `{field}` is not an integer: {value:?}")]
    InvalidNumber { field: &'static str, value: String },
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("{file} file not found: {}", path.display())]
    Missing { file: CatalogFile, path: PathBuf },

    #[error("failed to read {file} file {}: {source}", path.display())]
    Read {
        file: CatalogFile,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed {file} file {} at line {line}: {reason}", path.display())]
    Malformed {
        file: CatalogFile,
        path: PathBuf,
        line: usize,
        #[source]
        reason: RecordError,
    },
}

impl LoadError {
    pub fn file(&self) -> CatalogFile {
        match self {
            LoadError::Missing { file, .. }
            | LoadError::Read { file, .. }
            | LoadError::Malformed { file, .. } => *file,
        }
    }

    /// Diagnostic shown to the operator before the program stops.
    pub fn user_message(&self) -> &'static str {
        match (self, self.file()) {
            (LoadError::Malformed { .. }, CatalogFile::Movies) => {
                "Некорректные входные данные в файле с информацией о фильмах!"
            }
            (LoadError::Malformed { .. }, CatalogFile::Showtimes) => {
                "Некорректные входные данные в файле сеансов!"
            }
            (LoadError::Malformed { .. }, CatalogFile::SoldTickets) => {
                "Некорректные входные данные в файле с информацией о проданных билетах!"
            }
            (_, CatalogFile::Movies) => {
                "Добавьте файл с информацией о фильмах movies.csv в ту же папку, где находится запущенный файл программы!"
            }
            (_, CatalogFile::Showtimes) => {
                "Добавьте файл с информацией о сеансах showTimes.csv в ту же папку, где находится запущенный файл программы!"
            }
            (_, CatalogFile::SoldTickets) => {
                "Добавьте файл с информацией о проданных билетах sold_tickets в ту же папку, где находится запущенный файл программы!"
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to write {file} file {}: {source}", path.display())]
    Write {
        file: CatalogFile,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
