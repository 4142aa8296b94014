use crate::models::MonthRevenue;
use imdb_core::Movie;
use imdb_utils::dates::MONTH_NAMES;

/// Total revenue per release month, January through December.
///
/// Movies whose release date did not parse are left out. Months with no
/// revenue are still listed (with 0) so the bars keep calendar order; when
/// no movie has a usable date the result is empty.
pub fn month_vs_revenue(movies: &[Movie]) -> Vec<MonthRevenue> {
    use chrono::Datelike;

    let mut totals = [0.0_f64; 12];
    let mut dated = 0usize;
    for movie in movies {
        if let Some(date) = movie.release_date {
            dated += 1;
            totals[date.month0() as usize] += movie.revenue.unwrap_or(0.0);
        }
    }
    if dated == 0 {
        return Vec::new();
    }

    MONTH_NAMES
        .into_iter()
        .zip(totals)
        .map(|(month, revenue)| MonthRevenue { month, revenue })
        .collect()
}
