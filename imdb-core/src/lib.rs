//! Core types for the IMDB movie dashboard: the movie record, CSV parsing,
//! and the memoized dataset loader.

pub mod dataset;
pub mod movie;

pub use dataset::{load_data, Dataset, DatasetCache, DatasetSource};
pub use movie::Movie;
