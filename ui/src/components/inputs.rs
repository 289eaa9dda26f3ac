//! Input components for the registration form

use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct TextInputProps {
    pub id: String,
    pub label: String,
    pub value: String,
    pub border_color: String,
    pub disabled: bool,
    pub on_change: EventHandler<String>,
}

#[component]
pub fn TextInput(props: TextInputProps) -> Element {
    rsx! {
        div {
            class: "input-section",
            label {
                class: "input-label",
                r#for: "{props.id}",
                "{props.label}"
            }
            input {
                id: "{props.id}",
                class: "input-field",
                style: "border-color: {props.border_color};",
                // Always plain text: email inputs trim the value before it reaches the reducer
                r#type: "text",
                value: "{props.value}",
                disabled: props.disabled,
                oninput: move |event| props.on_change.call(event.value())
            }
        }
    }
}
