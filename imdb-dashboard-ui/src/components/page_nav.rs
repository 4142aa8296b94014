//! Top navigation between the dashboard pages.

use crate::state::{AppState, Page};
use dioxus::prelude::*;

const ACTIVE_TAB: &str = "padding: 8px 16px; border: none; border-bottom: 3px solid #1976D2; background: none; font-weight: bold; cursor: pointer;";
const IDLE_TAB: &str = "padding: 8px 16px; border: none; border-bottom: 3px solid transparent; background: none; color: #555; cursor: pointer;";

/// One tab per page; the active page is highlighted.
#[component]
pub fn PageNav() -> Element {
    let mut state = use_context::<AppState>();
    let current = (state.page)();
    let tabs: Vec<(Page, &str)> = Page::ALL
        .into_iter()
        .map(|page| {
            let style = if page == current { ACTIVE_TAB } else { IDLE_TAB };
            (page, style)
        })
        .collect();

    rsx! {
        nav {
            style: "display: flex; gap: 8px; margin-bottom: 16px; border-bottom: 1px solid #E0E0E0;",
            for (page, style) in tabs {
                button {
                    key: "{page.title()}",
                    style: "{style}",
                    onclick: move |_| state.page.set(page),
                    "{page.title()}"
                }
            }
        }
    }
}
