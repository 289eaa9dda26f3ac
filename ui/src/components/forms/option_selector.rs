use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct OptionSelectorProps {
    pub id: String,
    pub label: String,
    pub options: Vec<String>,
    pub selected: Option<String>,
    pub border_color: String,
    pub disabled: bool,
    pub on_change: EventHandler<Option<String>>,
}

#[component]
pub fn OptionSelector(props: OptionSelectorProps) -> Element {
    let options = props.options;
    let selected = props.selected.unwrap_or_default();
    let on_change = props.on_change;

    rsx! {
        div {
            class: "input-section",
            label {
                class: "input-label",
                r#for: "{props.id}",
                "{props.label}"
            }
            select {
                id: "{props.id}",
                class: "option-selector",
                style: "border-color: {props.border_color};",
                value: "{selected}",
                disabled: props.disabled,
                onchange: move |evt| {
                    let value = evt.value();
                    on_change.call(if value.is_empty() { None } else { Some(value) });
                },
                // Placeholder shown while nothing is selected
                option {
                    value: "",
                    selected: selected.is_empty(),
                    disabled: true,
                    hidden: true,
                    "{props.label}"
                }
                for choice in options {
                    option {
                        value: "{choice}",
                        selected: choice == selected,
                        "{choice}"
                    }
                }
            }
        }
    }
}
