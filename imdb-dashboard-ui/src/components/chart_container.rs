//! Chart container component with an empty state.

use dioxus::prelude::*;

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id for the chart container (vegaEmbed renders into this)
    pub id: String,
    /// Whether the current view leaves nothing to draw
    #[props(default = false)]
    pub empty: bool,
    /// Minimum height in pixels while the chart is drawn
    #[props(default = 360)]
    pub min_height: u32,
}

/// A container div for Vega-Lite charts.
///
/// The target div is always present so a stale chart can be cleared from it;
/// it collapses when the chart has nothing to draw.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let height = if props.empty { 0 } else { props.min_height };
    let style = format!("min-height: {}px; position: relative; width: 100%;", height);

    rsx! {
        div {
            style: "{style}",
            if props.empty {
                crate::components::Notice {
                    message: "No movies in the current selection have the data this chart needs.".to_string(),
                }
            }
            div {
                id: "{props.id}",
                style: "width: 100%;",
            }
        }
    }
}
