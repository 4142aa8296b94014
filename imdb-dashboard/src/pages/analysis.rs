//! Analysis page: sidebar filters over the dataset and the chart suite.
//!
//! The filtered view is recomputed whenever the selection changes, and every
//! chart is rebuilt from it. Charts with nothing to draw are cleared.

use dioxus::prelude::*;
use imdb_charts::ChartKind;
use imdb_dashboard_ui::components::{ChartContainer, ChartHeader, FilmCard, FilterSidebar, Notice};
use imdb_dashboard_ui::js_bridge;
use imdb_dashboard_ui::state::AppState;
use imdb_data::metrics;
use imdb_utils::format::si;

/// Charts under "Simple metrics", after the most popular film.
const SIMPLE: [ChartKind; 4] = [
    ChartKind::VoteAverageDistribution,
    ChartKind::BudgetVsRevenue,
    ChartKind::RuntimeVsBudget,
    ChartKind::OriginalLanguageDistribution,
];

/// Charts under "Advanced metrics".
const ADVANCED: [ChartKind; 2] = [ChartKind::MonthVsRevenue, ChartKind::BudgetVsSuccess];

/// Text shown above and below a chart.
fn commentary(kind: ChartKind) -> (&'static [&'static str], &'static [&'static str]) {
    match kind {
        ChartKind::VoteAverageDistribution => (
            &["Plenty of films carry a vote average of 0, meaning nobody rated them, so they are left out."],
            &["Most films sit in the middle of the scale while few get very low or very high ratings. \
               The shape is close to a normal distribution, which is expected when people rate things subjectively."],
        ),
        ChartKind::BudgetVsRevenue => (
            &["Films with an unknown budget or revenue (recorded as 0) are left out."],
            &["Some films with a large budget still lose money, while many cheaper films turn a profit. \
               A film's success seems to depend more on its idea and crew than on how much was spent."],
        ),
        ChartKind::RuntimeVsBudget => (
            &["How does the length of a film relate to its budget? \
               Films with an unknown budget or runtime (recorded as 0) are left out."],
            &["Runtime barely follows the budget, which suggests the industry settled on a standard running time. \
               The more money a film gets, the less its length varies, as expensive productions come with tighter constraints."],
        ),
        ChartKind::OriginalLanguageDistribution => (
            &["Films grouped by the language they were originally released in. Unrated films are not counted."],
            &["With every language shown, English (en) dominates. \
               Narrowing the vote average range shows which languages the top rated films were made in."],
        ),
        ChartKind::MonthVsRevenue => (
            &["Total revenue of the films released in each month. G stands for one billion."],
            &["June and December bring in the most. That is when blockbusters tend to be released, \
               such as \"Avatar\" (2009) or \"Star Wars: The Force Awakens\" (2015)."],
        ),
        ChartKind::BudgetVsSuccess => (
            &[
                "Success is vote_average × vote_count × popularity, rescaled as (success − min) / max × 100.",
                "Films with an unknown budget, rating or popularity are left out. The red line is a quadratic fit of success on budget.",
            ],
            &[],
        ),
    }
}

fn lines(text: &[&str]) -> Vec<String> {
    text.iter().map(|s| s.to_string()).collect()
}

#[component]
pub fn AnalysisPage() -> Element {
    let state = use_context::<AppState>();

    let view = use_memo(move || {
        let dataset = (state.dataset)()?;
        let selection = state.selection.read().clone()?;
        Some(selection.apply(dataset))
    });

    let specs = use_memo(move || {
        let view = view.read();
        ChartKind::ALL.map(|kind| view.as_ref().and_then(|v| kind.build(v)))
    });

    let popular = use_memo(move || {
        view.read()
            .as_ref()
            .and_then(|v| metrics::most_popular_film(v).cloned())
    });

    // Re-render every chart whenever the filtered view changes
    use_effect(move || {
        let specs = specs();
        js_bridge::init_charts();
        for (kind, spec) in ChartKind::ALL.iter().zip(specs.iter()) {
            match spec {
                Some(spec) => js_bridge::render_chart(kind.id(), spec),
                None => js_bridge::destroy_chart(kind.id()),
            }
        }
        log::debug!(
            "analysis: {} of {} charts rendered",
            specs.iter().filter(|s| s.is_some()).count(),
            specs.len()
        );
    });

    let (matching, gross) = view.read().as_ref().map_or((0, 0.0), |v| {
        (v.len(), v.iter().map(|m| m.gross()).sum::<f64>())
    });
    let gross = si(gross);
    let drawn: Vec<ChartKind> = ChartKind::ALL
        .into_iter()
        .zip(specs().iter())
        .filter(|(_, spec)| spec.is_some())
        .map(|(kind, _)| kind)
        .collect();

    rsx! {
        div {
            style: "display: flex; gap: 24px; align-items: flex-start;",

            FilterSidebar {}

            div {
                style: "flex: 1; min-width: 0;",
                h1 { "Analysis" }
                p {
                    style: "color: #555;",
                    "{matching} movies match the current filters, with a combined revenue of ${gross}."
                }

                h2 { "Simple metrics" }
                ChartHeader {
                    title: "The most popular film".to_string(),
                    paragraphs: vec!["The film with the largest popularity value in the current selection.".to_string()],
                }
                if let Some(movie) = popular() {
                    FilmCard { movie }
                } else {
                    Notice { message: "No movies match the current filters.".to_string() }
                }
                for kind in SIMPLE {
                    ChartSection { key: "{kind.id()}", kind, empty: !drawn.contains(&kind) }
                }

                h2 { "Advanced metrics" }
                for kind in ADVANCED {
                    ChartSection { key: "{kind.id()}", kind, empty: !drawn.contains(&kind) }
                }
            }
        }
    }
}

/// A chart with its title and commentary.
#[component]
fn ChartSection(kind: ChartKind, empty: bool) -> Element {
    let (intro, outro) = commentary(kind);

    rsx! {
        section {
            ChartHeader {
                title: kind.title().to_string(),
                paragraphs: lines(intro),
            }
            ChartContainer {
                id: kind.id().to_string(),
                empty,
            }
            if !empty {
                for paragraph in outro.iter() {
                    p {
                        style: "margin: 4px 0 16px 0; font-size: 14px; color: #444;",
                        "{paragraph}"
                    }
                }
            }
        }
    }
}
