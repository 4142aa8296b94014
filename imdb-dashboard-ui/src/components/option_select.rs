//! Dropdown selector over a list of labels.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct OptionSelectProps {
    pub id: String,
    pub label: String,
    pub options: Vec<String>,
    pub selected: String,
    pub on_change: EventHandler<String>,
}

/// Single-choice dropdown; reports the chosen label.
#[component]
pub fn OptionSelect(props: OptionSelectProps) -> Element {
    let on_change = props.on_change;
    let on_select = move |evt: Event<FormData>| {
        on_change.call(evt.value());
    };

    rsx! {
        div {
            style: "margin: 12px 0;",
            label {
                r#for: "{props.id}",
                style: "display: block; font-weight: bold; margin-bottom: 4px;",
                "{props.label}"
            }
            select {
                id: "{props.id}",
                style: "width: 100%;",
                onchange: on_select,
                for option in props.options.iter() {
                    option {
                        value: "{option}",
                        selected: *option == props.selected,
                        "{option}"
                    }
                }
            }
        }
    }
}
