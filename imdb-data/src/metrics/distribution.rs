use crate::models::HistogramBin;
use imdb_core::Movie;

/// Number of equal-width bins on the rating histogram.
pub const VOTE_AVERAGE_BINS: usize = 20;

/// Count values into `bins` equal-width buckets spanning their min..max.
///
/// Every value lands in exactly one bucket, so the counts add up to
/// `values.len()`. When all values are equal a single `[v, v]` bucket holds
/// them. Returns no buckets for empty input.
pub fn histogram(values: &[f64], bins: usize) -> Vec<HistogramBin> {
    if values.is_empty() || bins == 0 {
        return Vec::new();
    }
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if !min.is_finite() || !max.is_finite() {
        return Vec::new();
    }
    if max == min {
        return vec![HistogramBin {
            start: min,
            end: max,
            count: values.len(),
        }];
    }

    let width = (max - min) / bins as f64;
    let mut counts = vec![0usize; bins];
    for &v in values {
        let idx = (((v - min) / width).floor() as usize).min(bins - 1);
        counts[idx] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            start: min + width * i as f64,
            end: if i + 1 == bins {
                max
            } else {
                min + width * (i + 1) as f64
            },
            count,
        })
        .collect()
}

/// Histogram of ratings, ignoring unrated movies.
pub fn vote_average_distribution(movies: &[Movie]) -> Vec<HistogramBin> {
    let ratings: Vec<f64> = movies.iter().filter_map(|m| m.vote_average).collect();
    histogram(&ratings, VOTE_AVERAGE_BINS)
}
