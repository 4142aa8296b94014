//! Text summary of a filtered view.

use crate::FilterArgs;
use imdb_core::{Dataset, Movie};
use imdb_data::{metrics, FilterOptions};
use imdb_utils::format::usd;
use log::info;
use std::fmt::Write;
use std::path::Path;

/// Load `csv`, filter it with `filters` and print the summary to stdout.
pub fn run_summary(csv: &Path, filters: &FilterArgs) -> anyhow::Result<()> {
    let dataset = Dataset::from_path(csv)?;
    let options = FilterOptions::from_dataset(&dataset);
    let view = filters.selection(&options).apply(&dataset);
    info!("{} of {} movies match", view.len(), dataset.len());

    print!("{}", render_summary(&dataset, &view));
    Ok(())
}

/// Human-readable report on `view` relative to the full dataset.
pub fn render_summary(dataset: &Dataset, view: &[Movie]) -> String {
    let all = metrics::summarize(dataset.movies());
    let filtered = metrics::summarize(view);

    let mut out = String::new();
    let _ = writeln!(out, "Dataset:  {} rows, {} columns", all.rows, all.columns);
    let _ = writeln!(out, "Filtered: {} rows", filtered.rows);
    let _ = writeln!(out, "  rated:        {}", filtered.rated);
    let _ = writeln!(out, "  with budget:  {}", filtered.with_budget);
    let _ = writeln!(out, "  with revenue: {}", filtered.with_revenue);
    if let (Some(first), Some(last)) = (filtered.earliest_year, filtered.latest_year) {
        let _ = writeln!(out, "  released:     {}-{}", first, last);
    }

    match metrics::most_popular_film(view) {
        Some(movie) => {
            let _ = writeln!(
                out,
                "Most popular: {} (popularity {:.1})",
                movie.title,
                movie.popularity.unwrap_or(0.0)
            );
            if let (Some(budget), Some(revenue)) = (movie.budget, movie.revenue) {
                let _ = writeln!(out, "  budget {}, revenue {}", usd(budget), usd(revenue));
            }
        }
        None => {
            let _ = writeln!(out, "Most popular: none");
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "\
title,vote_average,release_date,revenue,budget,popularity
Quiet,6.0,1999-05-01,100,50,2.5
Loud,7.5,2008-07-04,2500000,1000000,88.4
Unknown,0,,0,0,0
";

    #[test]
    fn reports_counts_and_most_popular() {
        let dataset = Dataset::from_csv_str(CSV).unwrap();
        let text = render_summary(&dataset, dataset.movies());
        assert!(text.contains("Dataset:  3 rows, 21 columns"));
        assert!(text.contains("Filtered: 3 rows"));
        assert!(text.contains("rated:        2"));
        assert!(text.contains("released:     1999-2008"));
        assert!(text.contains("Most popular: Loud (popularity 88.4)"));
        assert!(text.contains("budget $1,000,000, revenue $2,500,000"));
    }

    #[test]
    fn empty_view_has_no_most_popular() {
        let dataset = Dataset::from_csv_str(CSV).unwrap();
        let text = render_summary(&dataset, &[]);
        assert!(text.contains("Filtered: 0 rows"));
        assert!(text.contains("Most popular: none"));
        assert!(!text.contains("released:"));
    }
}
