//! Two-handle numeric range control built from a pair of range inputs.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct RangeSliderProps {
    /// Prefix for the DOM ids of both inputs
    pub id: String,
    pub label: String,
    pub min: f64,
    pub max: f64,
    #[props(default = 1.0)]
    pub step: f64,
    /// Currently selected lower bound
    pub low: f64,
    /// Currently selected upper bound
    pub high: f64,
    /// Called with the new `(low, high)`; `low <= high` always holds
    pub on_change: EventHandler<(f64, f64)>,
}

/// Inclusive range picker. Moving one handle past the other drags it along.
#[component]
pub fn RangeSlider(props: RangeSliderProps) -> Element {
    let low = props.low;
    let high = props.high;
    let on_change = props.on_change;

    let on_low_change = move |evt: Event<FormData>| {
        if let Ok(value) = evt.value().parse::<f64>() {
            on_change.call((value, high.max(value)));
        }
    };

    let on_high_change = move |evt: Event<FormData>| {
        if let Ok(value) = evt.value().parse::<f64>() {
            on_change.call((low.min(value), value));
        }
    };

    rsx! {
        div {
            style: "margin: 12px 0;",
            label {
                r#for: "{props.id}-low",
                style: "display: block; font-weight: bold; margin-bottom: 4px;",
                "{props.label}: {low} – {high}"
            }
            input {
                id: "{props.id}-low",
                r#type: "range",
                style: "width: 100%;",
                min: "{props.min}",
                max: "{props.max}",
                step: "{props.step}",
                value: "{low}",
                onchange: on_low_change,
            }
            input {
                id: "{props.id}-high",
                r#type: "range",
                style: "width: 100%;",
                min: "{props.min}",
                max: "{props.max}",
                step: "{props.step}",
                value: "{high}",
                onchange: on_high_change,
            }
        }
    }
}
