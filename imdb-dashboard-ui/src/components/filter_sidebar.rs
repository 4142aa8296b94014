//! Sidebar with every filter control of the analysis page.

use crate::components::{OptionSelect, RangeSlider};
use crate::state::AppState;
use dioxus::prelude::*;
use imdb_data::options::VOTE_AVERAGE_RANGE;
use imdb_data::{Bounds, Choice};

/// Step and upper limit of the budget slider.
///
/// A range input only stops on `min + k * step`, so the limit is rounded up
/// to a whole step to keep the largest value reachable.
fn budget_slider(max: f64) -> (f64, f64) {
    let step = (max / 1000.0).floor().max(1.0);
    (step, (max / step).ceil() * step)
}

/// Filter controls bound to `AppState::selection`.
///
/// Option lists and slider limits come from `AppState::options`, which is
/// derived from the full dataset. The budget slider's limits come from the
/// budget column while its bounds are applied to revenue.
#[component]
pub fn FilterSidebar() -> Element {
    let mut state = use_context::<AppState>();
    let options = state.options.read().clone();
    let selection = state.selection.read().clone();

    let (Some(options), Some(selection)) = (options, selection) else {
        return rsx! {};
    };

    let (budget_step, budget_top) = budget_slider(options.budget.max);

    rsx! {
        aside {
            style: "width: 260px; flex-shrink: 0; padding: 12px 16px; background: #FAFAFA; border-right: 1px solid #E0E0E0;",
            h2 { style: "margin-top: 0; font-size: 20px;", "Filters" }

            RangeSlider {
                id: "vote-average",
                label: "vote_average",
                min: VOTE_AVERAGE_RANGE.min,
                max: VOTE_AVERAGE_RANGE.max,
                step: 0.1,
                low: selection.vote_average.min,
                high: selection.vote_average.max,
                on_change: move |(lo, hi): (f64, f64)| {
                    state.update_selection(|s| s.vote_average = Bounds::new(lo, hi));
                },
            }

            OptionSelect {
                id: "genre",
                label: "genre",
                options: options.genres.clone(),
                selected: selection.genre.label().to_string(),
                on_change: move |label: String| {
                    state.update_selection(|s| s.genre = Choice::from_label(&label));
                },
            }

            OptionSelect {
                id: "original-language",
                label: "original_language",
                options: options.languages.clone(),
                selected: selection.original_language.label().to_string(),
                on_change: move |label: String| {
                    state.update_selection(|s| s.original_language = Choice::from_label(&label));
                },
            }

            RangeSlider {
                id: "year",
                label: "year",
                min: options.years.min as f64,
                max: options.years.max as f64,
                low: selection.year.min as f64,
                high: selection.year.max as f64,
                on_change: move |(lo, hi): (f64, f64)| {
                    state.update_selection(|s| s.year = Bounds::new(lo as i32, hi as i32));
                },
            }

            RangeSlider {
                id: "budget",
                label: "Budget range",
                min: options.budget.min,
                max: budget_top,
                step: budget_step,
                low: selection.budget.min,
                high: selection.budget.max,
                on_change: move |(lo, hi): (f64, f64)| {
                    state.update_selection(|s| s.budget = Bounds::new(lo, hi));
                },
            }
        }
    }
}
