use crate::models::ScatterPoint;
use imdb_core::Movie;

fn points(movies: &[Movie], axes: impl Fn(&Movie) -> Option<(f64, f64)>) -> Vec<ScatterPoint> {
    movies
        .iter()
        .filter_map(|m| {
            axes(m).map(|(x, y)| ScatterPoint {
                title: m.title.clone(),
                x,
                y,
            })
        })
        .collect()
}

/// (budget, revenue) for movies with both figures known.
pub fn budget_vs_revenue(movies: &[Movie]) -> Vec<ScatterPoint> {
    points(movies, |m| Some((m.budget?, m.revenue?)))
}

/// (budget, runtime) for movies with both figures known.
pub fn runtime_vs_budget(movies: &[Movie]) -> Vec<ScatterPoint> {
    points(movies, |m| Some((m.budget?, m.runtime?)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::fixtures::rows;

    #[test]
    fn rows_missing_either_axis_are_dropped() {
        let movies = rows("title,budget,revenue\nA,0,0\nB,100,50\nC,200,0\nD,0,70\n");
        let points = budget_vs_revenue(&movies);
        assert_eq!(
            points,
            vec![ScatterPoint {
                title: "B".to_string(),
                x: 100.0,
                y: 50.0
            }]
        );
    }

    #[test]
    fn zero_points_when_each_row_fails_a_check() {
        let movies = rows("title,budget,revenue\nA,0,0\nB,100,0\nC,200,0\n");
        assert!(budget_vs_revenue(&movies).is_empty());

        let movies = rows("title,budget,revenue\nA,0,0\nB,100,50\nC,200,0\n");
        assert_eq!(budget_vs_revenue(&movies).len(), 1);
    }

    #[test]
    fn runtime_uses_budget_on_x() {
        let movies = rows("title,budget,runtime\nA,1000,95\nB,0,120\nC,5000,0\n");
        let points = runtime_vs_budget(&movies);
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].x, 1000.0);
        assert_eq!(points[0].y, 95.0);
    }
}
