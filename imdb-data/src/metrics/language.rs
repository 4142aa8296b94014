use crate::models::LanguageCount;
use imdb_core::Movie;
use std::collections::BTreeMap;

/// Number of rated movies per original language, sorted by language code.
pub fn original_language_distribution(movies: &[Movie]) -> Vec<LanguageCount> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for movie in movies {
        if movie.vote_average.is_none() || movie.original_language.is_empty() {
            continue;
        }
        *counts.entry(movie.original_language.as_str()).or_default() += 1;
    }
    counts
        .into_iter()
        .map(|(language, count)| LanguageCount {
            language: language.to_string(),
            count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::fixtures::rows;

    #[test]
    fn counts_rated_movies_per_language() {
        let movies = rows("\
title,vote_average,original_language
A,7,en
B,6,fr
C,0,en
D,8,en
E,5,
F,4,de
");
        let counts = original_language_distribution(&movies);
        let pairs: Vec<(&str, usize)> = counts
            .iter()
            .map(|c| (c.language.as_str(), c.count))
            .collect();
        assert_eq!(pairs, vec![("de", 1), ("en", 2), ("fr", 1)]);
    }

    #[test]
    fn empty_view_has_no_bars() {
        assert!(original_language_distribution(&[]).is_empty());
    }
}
