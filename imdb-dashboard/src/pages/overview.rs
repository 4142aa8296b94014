//! Overview page: what the dataset holds, a sample of it, and what each
//! column means.

use dioxus::prelude::*;
use imdb_dashboard_ui::components::{ColumnGlossary, MovieTable, Notice};
use imdb_dashboard_ui::state::AppState;
use imdb_data::metrics;

/// Rows shown in the sample table.
const SAMPLE_ROWS: usize = 100;

#[component]
pub fn OverviewPage() -> Element {
    let state = use_context::<AppState>();

    let Some(dataset) = (state.dataset)() else {
        return rsx! {
            Notice { message: "No movie dataset is loaded.".to_string() }
        };
    };

    let summary = metrics::summarize(dataset.movies());
    let sample = dataset.head(SAMPLE_ROWS).to_vec();
    let years = match (summary.earliest_year, summary.latest_year) {
        (Some(first), Some(last)) => format!(" Release dates run from {} to {}.", first, last),
        _ => String::new(),
    };

    rsx! {
        h1 { "Overview" }
        p {
            "The dataset is a CSV file about IMDb movies with "
            strong { "{summary.columns} columns" }
            " and "
            strong { "{summary.rows} rows" }
            ". It holds columns like "
            code { "budget" }
            ", "
            code { "imdb_id" }
            ", "
            code { "original_title" }
            ", "
            code { "genres" }
            ", "
            code { "production_companies" }
            ", "
            code { "production_countries" }
            " and more.{years}"
        }

        MovieTable { rows: sample }
        p {
            em { "first {SAMPLE_ROWS} entries" }
        }

        h3 { "Columns description" }
        ColumnGlossary {}
    }
}
