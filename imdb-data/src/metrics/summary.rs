use crate::models::ViewSummary;
use imdb_core::movie::COLUMN_COUNT;
use imdb_core::Movie;

/// Row count and coverage of the zero-as-missing fields.
pub fn summarize(movies: &[Movie]) -> ViewSummary {
    let years = movies.iter().filter_map(|m| m.year);
    ViewSummary {
        rows: movies.len(),
        columns: COLUMN_COUNT,
        rated: movies.iter().filter(|m| m.vote_average.is_some()).count(),
        with_budget: movies.iter().filter(|m| m.budget.is_some()).count(),
        with_revenue: movies.iter().filter(|m| m.revenue.is_some()).count(),
        earliest_year: years.clone().min(),
        latest_year: years.max(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::fixtures::rows;

    #[test]
    fn summarizes_coverage() {
        let movies = rows("\
title,vote_average,budget,revenue,release_date
A,7,100,0,1999-01-01
B,0,0,50,2004-05-05
C,5,10,20,
");
        let summary = summarize(&movies);
        assert_eq!(summary.rows, 3);
        assert_eq!(summary.columns, 21);
        assert_eq!(summary.rated, 2);
        assert_eq!(summary.with_budget, 2);
        assert_eq!(summary.with_revenue, 2);
        assert_eq!(summary.earliest_year, Some(1999));
        assert_eq!(summary.latest_year, Some(2004));
    }

    #[test]
    fn empty_summary() {
        let summary = summarize(&[]);
        assert_eq!(summary.rows, 0);
        assert_eq!(summary.earliest_year, None);
    }
}
