//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use imdb_core::Dataset;
use imdb_data::{FilterOptions, FilterSelection};
use dioxus::prelude::*;

/// The two top-level screens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Overview,
    Analysis,
}

impl Page {
    pub const ALL: [Page; 2] = [Page::Overview, Page::Analysis];

    pub fn title(&self) -> &'static str {
        match self {
            Page::Overview => "Overview",
            Page::Analysis => "Analysis",
        }
    }
}

/// Shared application state for the dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Memoized dataset (None until loaded, or when loading failed)
    pub dataset: Signal<Option<&'static Dataset>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Option lists and slider limits derived from the full dataset
    pub options: Signal<Option<FilterOptions>>,
    /// Bounds currently chosen in the sidebar
    pub selection: Signal<Option<FilterSelection>>,
    /// Page being shown
    pub page: Signal<Page>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            dataset: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            options: Signal::new(None),
            selection: Signal::new(None),
            page: Signal::new(Page::Overview),
        }
    }

    /// Install a loaded dataset: derive the control options once and reset
    /// the selection to its full-range default.
    pub fn install_dataset(&mut self, dataset: &'static Dataset) {
        let options = FilterOptions::from_dataset(dataset);
        self.selection.set(Some(options.default_selection()));
        self.options.set(Some(options));
        self.dataset.set(Some(dataset));
    }

    /// Change the selection with `update`, if one exists.
    pub fn update_selection(&mut self, update: impl FnOnce(&mut FilterSelection)) {
        if let Some(selection) = &mut *self.selection.write() {
            update(selection);
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pages_have_distinct_titles() {
        assert_eq!(Page::ALL[0], Page::Overview);
        assert_eq!(Page::Overview.title(), "Overview");
        assert_eq!(Page::Analysis.title(), "Analysis");
    }
}
