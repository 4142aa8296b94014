use crate::models::{SuccessChartData, SuccessPoint};
use crate::regression::fit_quadratic;
use imdb_core::Movie;

/// Number of samples drawn along the fitted trend curve.
pub const TREND_SAMPLES: usize = 50;

/// `vote_average * vote_count * popularity`, or `None` when the rating or
/// popularity is unknown.
pub fn success_score(movie: &Movie) -> Option<f64> {
    Some(movie.vote_average? * movie.vote_count as f64 * movie.popularity?)
}

/// Rescale scores as `(s - min) / max * 100`.
///
/// This is min-subtracted but max-divided, so the top score maps to
/// `100 * (max - min) / max` rather than 100. Returns `None` when there is
/// nothing to scale, when the maximum is zero or not finite, or when every
/// score is the same.
pub fn normalize_success(scores: &[f64]) -> Option<Vec<f64>> {
    if scores.is_empty() {
        return None;
    }
    let min = scores.iter().copied().fold(f64::INFINITY, f64::min);
    let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if !min.is_finite() || !max.is_finite() || max == 0.0 || max == min {
        log::debug!("success: cannot normalize (min={}, max={})", min, max);
        return None;
    }
    Some(scores.iter().map(|s| (s - min) / max * 100.0).collect())
}

/// Budget against normalized success, with a quadratic trend line.
///
/// Only movies with a known budget and a computable score take part.
pub fn budget_vs_success(movies: &[Movie]) -> Option<SuccessChartData> {
    let scored: Vec<(&Movie, f64, f64)> = movies
        .iter()
        .filter_map(|m| Some((m, m.budget?, success_score(m)?)))
        .collect();
    let scores: Vec<f64> = scored.iter().map(|(_, _, s)| *s).collect();
    let normalized = normalize_success(&scores)?;

    let points: Vec<SuccessPoint> = scored
        .iter()
        .zip(&normalized)
        .map(|((movie, budget, success), norm)| SuccessPoint {
            title: movie.title.clone(),
            budget: *budget,
            success: *success,
            success_norm: *norm,
        })
        .collect();

    let budgets: Vec<f64> = points.iter().map(|p| p.budget).collect();
    let trend = match fit_quadratic(&budgets, &normalized) {
        Some(fit) => {
            let lo = budgets.iter().copied().fold(f64::INFINITY, f64::min);
            let hi = budgets.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            fit.sample(lo, hi, TREND_SAMPLES)
        }
        None => Vec::new(),
    };

    Some(SuccessChartData { points, trend })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::fixtures::rows;

    #[test]
    fn normalization_uses_literal_formula() {
        let normalized = normalize_success(&[10.0, 20.0, 50.0]).unwrap();
        assert_eq!(normalized, vec![0.0, 20.0, 80.0]);
        let top = normalized.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        assert!((top - 100.0 * (50.0 - 10.0) / 50.0).abs() < 1e-9);
        assert!(top < 100.0);
    }

    #[test]
    fn degenerate_scores_are_not_normalized() {
        assert!(normalize_success(&[]).is_none());
        assert!(normalize_success(&[0.0, 0.0]).is_none());
        assert!(normalize_success(&[4.0, 4.0, 4.0]).is_none());
        assert!(normalize_success(&[1.0, f64::INFINITY]).is_none());
    }

    #[test]
    fn score_multiplies_three_operands() {
        let movies = rows("title,vote_average,vote_count,popularity\nA,7.5,200,3\nB,0,10,5\nC,6,0,2\n");
        assert_eq!(success_score(&movies[0]), Some(4500.0));
        assert_eq!(success_score(&movies[1]), None);
        assert_eq!(success_score(&movies[2]), Some(0.0));
    }

    #[test]
    fn chart_skips_rows_without_budget_or_score() {
        let movies = rows("\
title,budget,vote_average,vote_count,popularity
A,1000,5,10,2
B,0,8,100,9
C,3000,6,20,4
D,4000,0,50,4
E,5000,7,30,6
F,6000,7,40,
");
        let chart = budget_vs_success(&movies).unwrap();
        let titles: Vec<&str> = chart.points.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "C", "E"]);
        // success: A=100, C=480, E=1260
        assert_eq!(chart.points[0].success_norm, 0.0);
        assert!((chart.points[2].success_norm - (1260.0 - 100.0) / 1260.0 * 100.0).abs() < 1e-9);
        assert_eq!(chart.trend.len(), TREND_SAMPLES);
        assert_eq!(chart.trend.first().unwrap().x, 1000.0);
        assert!((chart.trend.last().unwrap().x - 5000.0).abs() < 1e-6);
    }

    #[test]
    fn two_budgets_give_points_without_trend() {
        let movies = rows("title,budget,vote_average,vote_count,popularity\nA,100,5,10,2\nB,200,6,10,3\n");
        let chart = budget_vs_success(&movies).unwrap();
        assert_eq!(chart.points.len(), 2);
        assert!(chart.trend.is_empty());
    }

    #[test]
    fn identical_scores_skip_the_chart() {
        let movies = rows("title,budget,vote_average,vote_count,popularity\nA,100,5,10,2\nB,200,5,10,2\n");
        assert!(budget_vs_success(&movies).is_none());
        assert!(budget_vs_success(&[]).is_none());
    }
}
