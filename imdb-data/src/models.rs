//! Result structs produced by the metric builders.
//!
//! All structs derive `Serialize` so they can be embedded as inline data in
//! chart descriptions.

use serde::Serialize;

/// One bucket of a histogram, `[start, end)` except for the last bucket,
/// which also holds `end`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

/// A titled point on a scatter chart.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ScatterPoint {
    pub title: String,
    pub x: f64,
    pub y: f64,
}

/// Total revenue of the movies released in one calendar month.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MonthRevenue {
    /// Full month name, e.g. "June".
    pub month: &'static str,
    pub revenue: f64,
}

/// Number of movies per original language.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LanguageCount {
    pub language: String,
    pub count: usize,
}

/// A movie's budget against its normalized success score.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SuccessPoint {
    pub title: String,
    pub budget: f64,
    /// Raw `vote_average * vote_count * popularity`.
    pub success: f64,
    /// `(success - min) / max * 100`
    pub success_norm: f64,
}

/// A sample on a fitted curve.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct CurvePoint {
    pub x: f64,
    pub y: f64,
}

/// Data behind the budget vs success chart.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SuccessChartData {
    pub points: Vec<SuccessPoint>,
    /// Quadratic fit of `success_norm` on `budget`; empty when the points
    /// cannot support one.
    pub trend: Vec<CurvePoint>,
}

/// Headline numbers for a set of movies.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ViewSummary {
    pub rows: usize,
    pub columns: usize,
    pub rated: usize,
    pub with_budget: usize,
    pub with_revenue: usize,
    pub earliest_year: Option<i32>,
    pub latest_year: Option<i32>,
}
