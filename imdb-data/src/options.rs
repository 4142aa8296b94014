//! Selectable values for the filter controls, derived from the full dataset.

use crate::filter::{Bounds, Choice, FilterSelection};
use imdb_core::Dataset;
use serde::Serialize;
use std::collections::{BTreeSet, HashSet};

/// Fixed range of the rating slider.
pub const VOTE_AVERAGE_RANGE: Bounds<f64> = Bounds { min: 0.0, max: 10.0 };

/// Option lists and slider limits for every control.
///
/// Always computed from the unfiltered dataset so that narrowing one control
/// never removes choices from another.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterOptions {
    /// "All" followed by every distinct genre, sorted.
    pub genres: Vec<String>,
    /// "All" followed by every distinct language code, in order of appearance.
    pub languages: Vec<String>,
    /// Earliest and latest release year; `(0, 0)` when no date parses.
    pub years: Bounds<i32>,
    /// Zero to the largest budget in the dataset.
    pub budget: Bounds<f64>,
}

impl FilterOptions {
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let movies = dataset.movies();

        let genre_set: BTreeSet<&str> = movies.iter().flat_map(|m| m.genre_list()).collect();
        let mut genres = Vec::with_capacity(genre_set.len() + 1);
        genres.push(Choice::ALL_LABEL.to_string());
        genres.extend(genre_set.into_iter().map(str::to_string));

        let mut seen: HashSet<&str> = HashSet::new();
        let mut languages = vec![Choice::ALL_LABEL.to_string()];
        for movie in movies {
            let code = movie.original_language.as_str();
            if !code.is_empty() && seen.insert(code) {
                languages.push(code.to_string());
            }
        }

        let years = movies
            .iter()
            .filter_map(|m| m.year)
            .fold(None, |acc: Option<(i32, i32)>, y| match acc {
                None => Some((y, y)),
                Some((lo, hi)) => Some((lo.min(y), hi.max(y))),
            })
            .map(|(lo, hi)| Bounds::new(lo, hi))
            .unwrap_or(Bounds::new(0, 0));

        let budget_max = movies
            .iter()
            .filter_map(|m| m.budget)
            .fold(0.0_f64, f64::max)
            .trunc();

        log::debug!(
            "options: {} genres, {} languages, years {}-{}, budget max {}",
            genres.len() - 1,
            languages.len() - 1,
            years.min,
            years.max,
            budget_max
        );

        Self {
            genres,
            languages,
            years,
            budget: Bounds::new(0.0, budget_max),
        }
    }

    /// The selection every control starts with: full ranges, "All" choices.
    pub fn default_selection(&self) -> FilterSelection {
        FilterSelection {
            vote_average: VOTE_AVERAGE_RANGE,
            genre: Choice::All,
            original_language: Choice::All,
            year: self.years,
            budget: self.budget,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "\
title,release_date,budget,original_language,genres
A,1999-02-01,1000,en,\"Drama, Comedy\"
B,2004-08-08,250000.75,ja,\"Animation,Drama\"
C,not a date,0,en,
D,1987-11-30,,fr, Comedy
";

    #[test]
    fn genres_are_split_trimmed_and_deduplicated() {
        let options = FilterOptions::from_dataset(&Dataset::from_csv_str(CSV).unwrap());
        assert_eq!(options.genres, vec!["All", "Animation", "Comedy", "Drama"]);
    }

    #[test]
    fn languages_keep_first_appearance_order() {
        let options = FilterOptions::from_dataset(&Dataset::from_csv_str(CSV).unwrap());
        assert_eq!(options.languages, vec!["All", "en", "ja", "fr"]);
    }

    #[test]
    fn year_and_budget_bounds() {
        let options = FilterOptions::from_dataset(&Dataset::from_csv_str(CSV).unwrap());
        assert_eq!(options.years, Bounds::new(1987, 2004));
        assert_eq!(options.budget, Bounds::new(0.0, 250000.0));
    }

    #[test]
    fn default_selection_is_wide_open() {
        let dataset = Dataset::from_csv_str(CSV).unwrap();
        let options = FilterOptions::from_dataset(&dataset);
        let selection = options.default_selection();
        assert_eq!(selection.vote_average, VOTE_AVERAGE_RANGE);
        assert_eq!(selection.genre, Choice::All);
        assert_eq!(selection.original_language, Choice::All);
        assert_eq!(selection.year, options.years);
        assert_eq!(selection.budget, options.budget);
    }

    #[test]
    fn empty_dataset_has_only_all() {
        let options = FilterOptions::from_dataset(&Dataset::default());
        assert_eq!(options.genres, vec!["All"]);
        assert_eq!(options.languages, vec!["All"]);
        assert_eq!(options.years, Bounds::new(0, 0));
        assert_eq!(options.budget, Bounds::new(0.0, 0.0));
    }
}
