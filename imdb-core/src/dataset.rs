//! The loaded movie table and its process-wide, load-once cache.

use crate::movie::Movie;
use anyhow::Context;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::OnceLock;

/// Where the movie CSV comes from.
#[derive(Debug, Clone, Copy)]
pub enum DatasetSource<'a> {
    /// A CSV file on the local filesystem.
    Path(&'a Path),
    /// CSV text compiled into the binary. Empty text means no dataset.
    Embedded(&'a str),
}

/// The full, immutable collection of movies for a session.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dataset {
    movies: Vec<Movie>,
}

impl Dataset {
    pub fn from_movies(movies: Vec<Movie>) -> Self {
        Self { movies }
    }

    /// Parse a dataset from CSV text.
    pub fn from_csv_str(csv_data: &str) -> anyhow::Result<Self> {
        Ok(Self::from_movies(Movie::parse_movie_csv(csv_data)?))
    }

    /// Read and parse a dataset from a CSV file.
    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("failed to open movie CSV {}", path.display()))?;
        let movies = Movie::read_movie_csv(BufReader::new(file))
            .with_context(|| format!("failed to parse movie CSV {}", path.display()))?;
        Ok(Self::from_movies(movies))
    }

    /// Load from a source, returning `None` when there is nothing to load or
    /// loading fails. Failures are logged rather than raised.
    pub fn load(source: DatasetSource<'_>) -> Option<Self> {
        let result = match source {
            DatasetSource::Path(path) => {
                if !path.exists() {
                    log::warn!("dataset: {} does not exist", path.display());
                    return None;
                }
                Self::from_path(path)
            }
            DatasetSource::Embedded(csv_data) => {
                if csv_data.trim().is_empty() {
                    log::warn!("dataset: embedded CSV is empty");
                    return None;
                }
                Self::from_csv_str(csv_data)
            }
        };
        match result {
            Ok(dataset) => {
                log::info!("dataset: loaded {} movies", dataset.len());
                Some(dataset)
            }
            Err(e) => {
                log::error!("dataset: load failed: {:#}", e);
                None
            }
        }
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// The first `n` rows (fewer if the dataset is shorter).
    pub fn head(&self, n: usize) -> &[Movie] {
        &self.movies[..n.min(self.movies.len())]
    }
}

/// Initialize-once holder for a [`Dataset`].
///
/// The first call to [`get_or_load`](Self::get_or_load) reads and parses the
/// source; every later call returns the same table, whatever source it names.
/// A failed load is cached too and stays absent for the life of the process.
pub struct DatasetCache {
    cell: OnceLock<Option<Dataset>>,
}

impl DatasetCache {
    pub const fn new() -> Self {
        Self {
            cell: OnceLock::new(),
        }
    }

    pub fn get_or_load(&self, source: DatasetSource<'_>) -> Option<&Dataset> {
        self.cell.get_or_init(|| Dataset::load(source)).as_ref()
    }

    /// Whether a load has already been attempted.
    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl Default for DatasetCache {
    fn default() -> Self {
        Self::new()
    }
}

static SHARED_DATASET: DatasetCache = DatasetCache::new();

/// Process-wide memoized load.
pub fn load_data(source: DatasetSource<'_>) -> Option<&'static Dataset> {
    SHARED_DATASET.get_or_load(source)
}
