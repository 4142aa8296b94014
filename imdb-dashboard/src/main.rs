//! IMDB Movie Dashboard
//!
//! Two pages over the IMDB movie dataset: an overview of the raw table and an
//! analysis page where sidebar filters drive a suite of charts.
//!
//! Data flow:
//! 1. `build.rs` copies `imdb_movies.csv` into `OUT_DIR`.
//! 2. `include_str!` embeds the CSV into the WASM binary.
//! 3. On mount the CSV is parsed once through `imdb_core::load_data` and the
//!    filter options are derived from the full dataset.
//! 4. Every filter change re-runs the selection and re-renders the charts
//!    through vegaEmbed.

mod pages;

use dioxus::prelude::*;
use imdb_core::DatasetSource;
use imdb_dashboard_ui::components::{ErrorDisplay, LoadingSpinner, PageNav};
use imdb_dashboard_ui::state::{AppState, Page};
use pages::{AnalysisPage, OverviewPage};

/// The movie dataset, empty when no fixture was present at build time.
const MOVIES_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/imdb_movies.csv"));

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("imdb-dashboard-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // Load the dataset once on mount
    use_effect(move || {
        match imdb_core::load_data(DatasetSource::Embedded(MOVIES_CSV)) {
            Some(dataset) => {
                web_sys::console::log_1(
                    &format!("[IMDB] dashboard: loaded {} movies", dataset.len()).into(),
                );
                state.install_dataset(dataset);
            }
            None => {
                log::error!("dashboard: no movie dataset available");
                state.error_msg.set(Some(
                    "The movie dataset is not available, so there is nothing to render."
                        .to_string(),
                ));
            }
        }
        state.loading.set(false);
    });

    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            PageNav {}

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay { message: err }
            } else if (state.loading)() {
                LoadingSpinner {}
            } else {
                {
                    match (state.page)() {
                        Page::Overview => rsx! { OverviewPage {} },
                        Page::Analysis => rsx! { AnalysisPage {} },
                    }
                }
            }
        }
    }
}
