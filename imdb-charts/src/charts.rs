//! One builder per dashboard chart.
//!
//! Each builder computes its data with [`imdb_data::metrics`] and wraps it in
//! a [`ChartSpec`]. A builder returns `None` when there is nothing to draw.

use crate::spec::{interactive, quantitative, ChartSpec};
use imdb_core::Movie;
use imdb_data::metrics;
use imdb_data::models::ScatterPoint;
use imdb_utils::dates::MONTH_NAMES;
use serde_json::{json, Value};

/// The fixed set of charts on the analysis page, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartKind {
    VoteAverageDistribution,
    BudgetVsRevenue,
    RuntimeVsBudget,
    OriginalLanguageDistribution,
    MonthVsRevenue,
    BudgetVsSuccess,
}

impl ChartKind {
    pub const ALL: [ChartKind; 6] = [
        ChartKind::VoteAverageDistribution,
        ChartKind::BudgetVsRevenue,
        ChartKind::RuntimeVsBudget,
        ChartKind::OriginalLanguageDistribution,
        ChartKind::MonthVsRevenue,
        ChartKind::BudgetVsSuccess,
    ];

    /// Stable identifier, used for DOM ids and exported file names.
    pub fn id(&self) -> &'static str {
        match self {
            ChartKind::VoteAverageDistribution => "vote-average-distribution",
            ChartKind::BudgetVsRevenue => "budget-vs-revenue",
            ChartKind::RuntimeVsBudget => "runtime-vs-budget",
            ChartKind::OriginalLanguageDistribution => "original-language-distribution",
            ChartKind::MonthVsRevenue => "month-vs-revenue",
            ChartKind::BudgetVsSuccess => "budget-vs-popularity",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ChartKind::VoteAverageDistribution => "Vote Average Distribution",
            ChartKind::BudgetVsRevenue => "Budget vs revenue",
            ChartKind::RuntimeVsBudget => "Runtime vs budget",
            ChartKind::OriginalLanguageDistribution => "Original language distribution",
            ChartKind::MonthVsRevenue => "Month vs revenue",
            ChartKind::BudgetVsSuccess => "Budget vs popularity",
        }
    }

    pub fn build(&self, movies: &[Movie]) -> Option<ChartSpec> {
        let spec = match self {
            ChartKind::VoteAverageDistribution => vote_average_distribution(movies),
            ChartKind::BudgetVsRevenue => budget_vs_revenue(movies),
            ChartKind::RuntimeVsBudget => runtime_vs_budget(movies),
            ChartKind::OriginalLanguageDistribution => original_language_distribution(movies),
            ChartKind::MonthVsRevenue => month_vs_revenue(movies),
            ChartKind::BudgetVsSuccess => budget_vs_popularity(movies),
        };
        if spec.is_none() {
            log::debug!("charts: {} has nothing to draw", self.id());
        }
        spec
    }
}

/// Histogram of ratings (unrated movies excluded), 20 bins.
pub fn vote_average_distribution(movies: &[Movie]) -> Option<ChartSpec> {
    let bins = metrics::vote_average_distribution(movies);
    if bins.is_empty() {
        return None;
    }
    Some(ChartSpec::new(
        ChartKind::VoteAverageDistribution.title(),
        json!({
            "data": { "values": bins },
            "mark": { "type": "bar", "opacity": 0.7 },
            "encoding": {
                "x": { "field": "start", "bin": "binned", "type": "quantitative", "title": "Vote average" },
                "x2": { "field": "end" },
                "y": quantitative("count", "Frequency"),
                "tooltip": [
                    { "field": "start", "type": "quantitative", "title": "From" },
                    { "field": "end", "type": "quantitative", "title": "To" },
                    { "field": "count", "type": "quantitative" },
                ],
            },
        }),
    ))
}

fn scatter(
    kind: ChartKind,
    points: Vec<ScatterPoint>,
    (x_field, x_title): (&str, &str),
    (y_field, y_title): (&str, &str),
) -> Option<ChartSpec> {
    if points.is_empty() {
        return None;
    }
    let values: Vec<Value> = points
        .into_iter()
        .map(|p| json!({ "title": p.title, x_field: p.x, y_field: p.y }))
        .collect();
    Some(ChartSpec::new(
        kind.title(),
        json!({
            "data": { "values": values },
            "mark": { "type": "circle", "size": 60, "opacity": 0.7 },
            "params": interactive(),
            "encoding": {
                "x": quantitative(x_field, x_title),
                "y": quantitative(y_field, y_title),
                "color": { "field": y_field, "type": "quantitative" },
                "tooltip": [
                    { "field": "title", "type": "nominal" },
                    { "field": x_field, "type": "quantitative" },
                    { "field": y_field, "type": "quantitative" },
                ],
            },
        }),
    ))
}

/// Budget against revenue, colored by revenue.
pub fn budget_vs_revenue(movies: &[Movie]) -> Option<ChartSpec> {
    scatter(
        ChartKind::BudgetVsRevenue,
        metrics::budget_vs_revenue(movies),
        ("budget", "Budget (in USD)"),
        ("revenue", "Revenue (in USD)"),
    )
}

/// Budget against runtime, colored by runtime.
pub fn runtime_vs_budget(movies: &[Movie]) -> Option<ChartSpec> {
    scatter(
        ChartKind::RuntimeVsBudget,
        metrics::runtime_vs_budget(movies),
        ("budget", "Budget (in USD)"),
        ("runtime", "Runtime (min)"),
    )
}

/// Count of rated movies per original language, colored by count.
pub fn original_language_distribution(movies: &[Movie]) -> Option<ChartSpec> {
    let counts = metrics::original_language_distribution(movies);
    if counts.is_empty() {
        return None;
    }
    Some(ChartSpec::new(
        ChartKind::OriginalLanguageDistribution.title(),
        json!({
            "data": { "values": counts },
            "mark": { "type": "bar", "opacity": 0.7 },
            "encoding": {
                "x": { "field": "language", "type": "nominal", "title": "Original language" },
                "y": quantitative("count", "Amount"),
                "color": { "field": "count", "type": "quantitative" },
                "tooltip": [
                    { "field": "language", "type": "nominal" },
                    { "field": "count", "type": "quantitative" },
                ],
            },
        }),
    ))
}

/// Revenue summed per release month, bars in calendar order.
pub fn month_vs_revenue(movies: &[Movie]) -> Option<ChartSpec> {
    let months = metrics::month_vs_revenue(movies);
    if months.is_empty() {
        return None;
    }
    Some(ChartSpec::new(
        ChartKind::MonthVsRevenue.title(),
        json!({
            "data": { "values": months },
            "mark": "bar",
            "encoding": {
                "x": {
                    "field": "month",
                    "type": "ordinal",
                    "sort": MONTH_NAMES,
                    "title": "Release month",
                },
                "y": {
                    "field": "revenue",
                    "type": "quantitative",
                    "title": "Revenue",
                    "axis": { "format": ".0s" },
                },
                "color": { "field": "revenue", "type": "quantitative" },
                "tooltip": [
                    { "field": "month", "type": "ordinal" },
                    { "field": "revenue", "type": "quantitative", "format": ",.0f" },
                ],
            },
        }),
    ))
}

/// Budget against normalized success score, with a red quadratic trend line.
pub fn budget_vs_popularity(movies: &[Movie]) -> Option<ChartSpec> {
    let chart = metrics::budget_vs_success(movies)?;
    let values: Vec<Value> = chart
        .points
        .iter()
        .map(|p| json!({ "title": p.title, "budget": p.budget, "success": p.success_norm }))
        .collect();

    let mut layers = vec![json!({
        "data": { "values": values },
        "mark": "circle",
        "encoding": {
            "x": quantitative("budget", "Budget"),
            "y": quantitative("success", "Success"),
            "color": { "field": "success", "type": "quantitative" },
            "tooltip": [
                { "field": "title", "type": "nominal" },
                { "field": "budget", "type": "quantitative" },
                { "field": "success", "type": "quantitative" },
            ],
        },
    })];
    if !chart.trend.is_empty() {
        let curve: Vec<Value> = chart
            .trend
            .iter()
            .map(|c| json!({ "budget": c.x, "success": c.y }))
            .collect();
        layers.push(json!({
            "data": { "values": curve },
            "mark": { "type": "line", "color": "red" },
            "encoding": {
                "x": quantitative("budget", "Budget"),
                "y": quantitative("success", "Success"),
            },
        }));
    }

    Some(ChartSpec::new(
        ChartKind::BudgetVsSuccess.title(),
        json!({ "layer": layers }),
    ))
}
