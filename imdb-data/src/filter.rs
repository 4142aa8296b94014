//! The filter predicate applied to the dataset on every control change.

use imdb_core::{Dataset, Movie};
use serde::Serialize;
use std::ops::Deref;

/// Inclusive `[min, max]` range chosen on a slider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds<T> {
    pub min: T,
    pub max: T,
}

impl<T: PartialOrd + Copy> Bounds<T> {
    pub fn new(min: T, max: T) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: T) -> bool {
        value >= self.min && value <= self.max
    }
}

/// A single-value selection where "All" lifts the constraint.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub enum Choice {
    #[default]
    All,
    Only(String),
}

impl Choice {
    /// Label of the unconstrained option in selection lists.
    pub const ALL_LABEL: &'static str = "All";

    /// Build a choice from a selection-list label.
    pub fn from_label(label: &str) -> Self {
        if label == Self::ALL_LABEL {
            Choice::All
        } else {
            Choice::Only(label.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Choice::All => Self::ALL_LABEL,
            Choice::Only(value) => value,
        }
    }
}

/// The bounds currently chosen on every control.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterSelection {
    pub vote_average: Bounds<f64>,
    pub genre: Choice,
    pub original_language: Choice,
    pub year: Bounds<i32>,
    /// Bounds taken from the budget column but compared against `revenue`.
    pub budget: Bounds<f64>,
}

impl FilterSelection {
    /// Whether a single movie passes every active constraint.
    ///
    /// The budget range is checked against the movie's revenue. Movies
    /// without a parseable release year never pass the year check.
    pub fn matches(&self, movie: &Movie) -> bool {
        if movie.adult {
            return false;
        }
        if !self.vote_average.contains(movie.rating()) {
            return false;
        }
        match movie.year {
            Some(year) if self.year.contains(year) => {}
            _ => return false,
        }
        if !self.budget.contains(movie.gross()) {
            return false;
        }
        if let Choice::Only(genre) = &self.genre {
            if !movie.genres.contains(genre.as_str()) {
                return false;
            }
        }
        if let Choice::Only(language) = &self.original_language {
            if movie.original_language != *language {
                return false;
            }
        }
        true
    }

    /// Produce the filtered view of a dataset, preserving row order.
    pub fn apply(&self, dataset: &Dataset) -> FilteredView {
        let movies: Vec<Movie> = dataset
            .movies()
            .iter()
            .filter(|m| self.matches(m))
            .cloned()
            .collect();
        log::debug!(
            "filter: {} of {} movies match (genre={}, language={})",
            movies.len(),
            dataset.len(),
            self.genre.label(),
            self.original_language.label()
        );
        FilteredView { movies }
    }
}

/// Rows of the dataset passing a [`FilterSelection`]. Owns its rows.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilteredView {
    movies: Vec<Movie>,
}

impl Deref for FilteredView {
    type Target = [Movie];

    fn deref(&self) -> &[Movie] {
        &self.movies
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "\
id,title,vote_average,release_date,revenue,adult,budget,original_language,genres
1,Action Comedy,6.5,2010-06-01,500,False,100,en,\"Action,Comedy\"
2,Drama Only,7.0,2012-03-15,800,False,200,fr,Drama
3,Adult Film,8.0,2011-01-01,300,True,50,en,Comedy
4,Unrated,0,2015-09-09,0,False,0,en,Comedy
5,No Date,5.0,,100,False,10,en,Comedy
6,Blockbuster,7.8,2019-12-20,2000000,False,300000,en,\"Action, Adventure\"
";

    fn dataset() -> Dataset {
        Dataset::from_csv_str(CSV).unwrap()
    }

    fn wide_open() -> FilterSelection {
        FilterSelection {
            vote_average: Bounds::new(0.0, 10.0),
            genre: Choice::All,
            original_language: Choice::All,
            year: Bounds::new(1900, 2100),
            budget: Bounds::new(0.0, 1e12),
        }
    }

    fn titles(view: &FilteredView) -> Vec<&str> {
        view.iter().map(|m| m.title.as_str()).collect()
    }

    #[test]
    fn wide_open_selection_drops_adult_and_undated() {
        let view = wide_open().apply(&dataset());
        assert_eq!(
            titles(&view),
            vec!["Action Comedy", "Drama Only", "Unrated", "Blockbuster"]
        );
    }

    #[test]
    fn genre_is_substring_match() {
        let selection = FilterSelection {
            genre: Choice::Only("Comedy".to_string()),
            ..wide_open()
        };
        let view = selection.apply(&dataset());
        assert_eq!(titles(&view), vec!["Action Comedy", "Unrated"]);
    }

    #[test]
    fn genre_scenario_two_rows() {
        let csv = "\
title,vote_average,release_date,revenue,adult,genres
A,5,2000-01-01,10,False,\"Action,Comedy\"
B,5,2000-01-01,10,False,Drama
";
        let dataset = Dataset::from_csv_str(csv).unwrap();
        let selection = FilterSelection {
            genre: Choice::Only("Comedy".to_string()),
            ..wide_open()
        };
        assert_eq!(titles(&selection.apply(&dataset)), vec!["A"]);
    }

    #[test]
    fn language_is_exact_match() {
        let selection = FilterSelection {
            original_language: Choice::Only("fr".to_string()),
            ..wide_open()
        };
        assert_eq!(titles(&selection.apply(&dataset())), vec!["Drama Only"]);

        let selection = FilterSelection {
            original_language: Choice::Only("f".to_string()),
            ..wide_open()
        };
        assert!(selection.apply(&dataset()).is_empty());
    }

    #[test]
    fn budget_bounds_apply_to_revenue() {
        // Budgets are 100 and 200 but revenues are 500 and 800.
        let selection = FilterSelection {
            budget: Bounds::new(400.0, 600.0),
            ..wide_open()
        };
        assert_eq!(titles(&selection.apply(&dataset())), vec!["Action Comedy"]);

        let selection = FilterSelection {
            budget: Bounds::new(100.0, 200.0),
            ..wide_open()
        };
        assert!(selection.apply(&dataset()).is_empty());
    }

    #[test]
    fn unrated_rows_read_as_zero() {
        let selection = FilterSelection {
            vote_average: Bounds::new(0.0, 0.0),
            ..wide_open()
        };
        assert_eq!(titles(&selection.apply(&dataset())), vec!["Unrated"]);
    }

    #[test]
    fn bounds_are_inclusive() {
        let selection = FilterSelection {
            vote_average: Bounds::new(6.5, 7.0),
            year: Bounds::new(2010, 2012),
            budget: Bounds::new(500.0, 800.0),
            ..wide_open()
        };
        assert_eq!(
            titles(&selection.apply(&dataset())),
            vec!["Action Comedy", "Drama Only"]
        );
    }

    #[test]
    fn filter_is_sound_and_complete() {
        let dataset = dataset();
        let selections = [
            wide_open(),
            FilterSelection {
                vote_average: Bounds::new(6.0, 8.0),
                year: Bounds::new(2011, 2020),
                ..wide_open()
            },
            FilterSelection {
                genre: Choice::Only("Action".to_string()),
                original_language: Choice::Only("en".to_string()),
                budget: Bounds::new(0.0, 1000.0),
                ..wide_open()
            },
        ];
        for selection in &selections {
            let view = selection.apply(&dataset);
            for movie in view.iter() {
                assert!(!movie.adult);
                assert!(selection.vote_average.contains(movie.rating()));
                assert!(selection.year.contains(movie.year.unwrap()));
                assert!(selection.budget.contains(movie.gross()));
            }
            let expected = dataset.movies().iter().filter(|m| selection.matches(m)).count();
            assert_eq!(view.len(), expected);
        }
    }

    #[test]
    fn filtering_is_idempotent() {
        let dataset = dataset();
        let selection = FilterSelection {
            genre: Choice::Only("Comedy".to_string()),
            ..wide_open()
        };
        assert_eq!(selection.apply(&dataset), selection.apply(&dataset));
    }

    #[test]
    fn all_adult_rows_give_empty_view() {
        let csv = "\
title,vote_average,release_date,revenue,adult
A,5,2000-01-01,10,True
B,6,2001-01-01,20,True
";
        let dataset = Dataset::from_csv_str(csv).unwrap();
        assert!(wide_open().apply(&dataset).is_empty());
    }

    #[test]
    fn choice_labels_round_trip() {
        assert_eq!(Choice::from_label("All"), Choice::All);
        assert_eq!(Choice::from_label("Drama"), Choice::Only("Drama".to_string()));
        assert_eq!(Choice::All.label(), "All");
    }
}
