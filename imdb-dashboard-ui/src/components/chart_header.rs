//! Chart header component with title and explanatory text.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    /// Chart title
    pub title: String,
    /// Paragraphs shown under the title
    #[props(default = Vec::new())]
    pub paragraphs: Vec<String>,
}

/// Header for chart sections showing title and optional description.
#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    rsx! {
        div {
            style: "margin: 24px 0 8px 0;",
            h3 {
                style: "margin: 0 0 4px 0; font-size: 18px;",
                "{props.title}"
            }
            for paragraph in props.paragraphs.iter() {
                p {
                    style: "margin: 4px 0; font-size: 14px; color: #444;",
                    "{paragraph}"
                }
            }
        }
    }
}
