//! Filtering and metric computation over the movie dataset.
//!
//! This crate turns the loaded [`imdb_core::Dataset`] into the filtered view
//! the user asked for, and computes the data behind every dashboard panel.
//! Nothing here knows how charts are drawn.

pub mod filter;
pub mod metrics;
pub mod models;
pub mod options;

pub use filter::{Bounds, Choice, FilterSelection, FilteredView};
pub use options::FilterOptions;

/// Least-squares curve fitting for chart trend lines.
pub mod regression {
    use crate::models::CurvePoint;

    /// `y = c0 + c1·t + c2·t²` with `t = (x - mean) / scale`.
    ///
    /// The fit is done on standardized x so that large budgets do not blow up
    /// the `x⁴` sums in the normal equations.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct Quadratic {
        mean: f64,
        scale: f64,
        coefficients: [f64; 3],
    }

    impl Quadratic {
        pub fn eval(&self, x: f64) -> f64 {
            let t = (x - self.mean) / self.scale;
            let [c0, c1, c2] = self.coefficients;
            c0 + c1 * t + c2 * t * t
        }

        /// Evaluate at `samples` evenly spaced points from `lo` to `hi`.
        pub fn sample(&self, lo: f64, hi: f64, samples: usize) -> Vec<CurvePoint> {
            match samples {
                0 => Vec::new(),
                1 => vec![CurvePoint { x: lo, y: self.eval(lo) }],
                n => (0..n)
                    .map(|i| {
                        let x = lo + (hi - lo) * i as f64 / (n - 1) as f64;
                        CurvePoint { x, y: self.eval(x) }
                    })
                    .collect(),
            }
        }
    }

    /// Fit a quadratic to `(xs[i], ys[i])` by ordinary least squares.
    ///
    /// Needs at least three distinct x values; returns `None` otherwise or
    /// when the system is numerically singular.
    pub fn fit_quadratic(xs: &[f64], ys: &[f64]) -> Option<Quadratic> {
        if xs.len() != ys.len() || xs.iter().chain(ys).any(|v| !v.is_finite()) {
            return None;
        }
        let mut distinct = xs.to_vec();
        distinct.sort_by(f64::total_cmp);
        distinct.dedup();
        if distinct.len() < 3 {
            return None;
        }

        let n = xs.len() as f64;
        let mean = xs.iter().sum::<f64>() / n;
        let scale = (xs.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n).sqrt();
        if scale == 0.0 {
            return None;
        }

        // Power sums of t (s[k] = Σ t^k) and moment sums with y.
        let mut s = [0.0_f64; 5];
        let mut r = [0.0_f64; 3];
        for (x, y) in xs.iter().zip(ys) {
            let t = (x - mean) / scale;
            let mut p = 1.0;
            for (k, sk) in s.iter_mut().enumerate() {
                *sk += p;
                if k < 3 {
                    r[k] += p * y;
                }
                p *= t;
            }
        }

        let mut m = [
            [s[0], s[1], s[2], r[0]],
            [s[1], s[2], s[3], r[1]],
            [s[2], s[3], s[4], r[2]],
        ];
        let coefficients = solve3(&mut m)?;
        Some(Quadratic {
            mean,
            scale,
            coefficients,
        })
    }

    /// Gaussian elimination with partial pivoting on an augmented 3×4 matrix.
    fn solve3(m: &mut [[f64; 4]; 3]) -> Option<[f64; 3]> {
        for col in 0..3 {
            let pivot = (col..3).max_by(|&a, &b| m[a][col].abs().total_cmp(&m[b][col].abs()))?;
            if m[pivot][col].abs() < 1e-12 {
                return None;
            }
            m.swap(col, pivot);
            for row in col + 1..3 {
                let factor = m[row][col] / m[col][col];
                for k in col..4 {
                    m[row][k] -= factor * m[col][k];
                }
            }
        }
        let mut out = [0.0_f64; 3];
        for row in (0..3).rev() {
            let tail: f64 = (row + 1..3).map(|k| m[row][k] * out[k]).sum();
            out[row] = (m[row][3] - tail) / m[row][row];
        }
        out.iter().all(|c| c.is_finite()).then_some(out)
    }

}
