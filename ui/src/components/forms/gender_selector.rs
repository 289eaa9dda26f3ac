use dioxus::prelude::*;

use crate::registration::Gender;

#[derive(Props, PartialEq, Clone)]
pub struct GenderSelectorProps {
    pub label: String,
    pub selected: Option<Gender>,
    pub disabled: bool,
    pub on_change: EventHandler<Option<Gender>>,
}

#[component]
pub fn GenderSelector(props: GenderSelectorProps) -> Element {
    let selected = props.selected;
    let on_change = props.on_change;

    rsx! {
        fieldset {
            class: "radio-group",
            disabled: props.disabled,
            legend {
                class: "input-label",
                "{props.label}"
            }
            div {
                class: "radio-row",
                for gender in Gender::ALL {
                    label {
                        class: "radio-option",
                        input {
                            r#type: "radio",
                            name: "genero",
                            value: "{gender.value()}",
                            checked: selected == Some(gender),
                            onchange: move |evt| on_change.call(Gender::from_value(&evt.value())),
                        }
                        "{gender.label()}"
                    }
                }
            }
        }
    }
}
