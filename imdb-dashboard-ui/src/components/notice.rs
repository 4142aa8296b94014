//! Inline status boxes: errors, empty results, and the loading indicator.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
}

/// Displays an error message in a styled box.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            style: "padding: 12px 16px; margin: 8px 0; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A;",
            strong { "Error: " }
            "{props.message}"
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct NoticeProps {
    pub message: String,
}

/// A muted note, used where a panel has nothing to show.
#[component]
pub fn Notice(props: NoticeProps) -> Element {
    rsx! {
        div {
            style: "padding: 10px 14px; margin: 8px 0; background: #F5F5F5; color: #616161; border-radius: 4px; font-size: 13px;",
            "{props.message}"
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct LoadingSpinnerProps {
    #[props(default = "Loading movie dataset...".to_string())]
    pub label: String,
}

/// Loading indicator shown while the dataset is parsed.
#[component]
pub fn LoadingSpinner(props: LoadingSpinnerProps) -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: center; align-items: center; padding: 40px; color: #666;",
            "{props.label}"
        }
    }
}
