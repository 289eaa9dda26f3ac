use dioxus::prelude::*;

use crate::components::forms::{GenderSelector, OptionSelector};
use crate::components::inputs::TextInput;
use crate::registration::*;

#[derive(Props, PartialEq, Clone)]
pub struct RegistrationFormViewProps {
    pub state: Signal<RegistrationState>,
    pub dispatch: EventHandler<RegistrationAction>,
    pub border_color: String,
}

#[component]
pub fn RegistrationFormView(props: RegistrationFormViewProps) -> Element {
    let state = props.state;
    let dispatch = props.dispatch;
    let border_color = props.border_color;

    let form = state().form;
    // Nothing behind the success dialog accepts input
    let frozen = state().dialog.is_success();

    rsx! {
        div {
            class: "registration-form",

            TextInput {
                id: "nombre".to_string(),
                label: form.name.label.clone(),
                value: form.name.value.clone(),
                border_color: border_color.clone(),
                disabled: frozen,
                on_change: move |name: String| dispatch.call(RegistrationAction::SetName(name)),
            }

            TextInput {
                id: "control".to_string(),
                label: form.control_number.label.clone(),
                value: form.control_number.value.clone(),
                border_color: border_color.clone(),
                disabled: frozen,
                on_change: move |control: String| {
                    dispatch.call(RegistrationAction::SetControlNumber(control))
                },
            }

            TextInput {
                id: "email".to_string(),
                label: form.email.label.clone(),
                value: form.email.value.clone(),
                border_color: border_color.clone(),
                disabled: frozen,
                on_change: move |email: String| dispatch.call(RegistrationAction::SetEmail(email)),
            }

            // Career and semester share a row
            div {
                class: "selector-row",
                OptionSelector {
                    id: "carrera".to_string(),
                    label: form.career.label.clone(),
                    options: form.career.options.clone(),
                    selected: form.career.selected.clone(),
                    border_color: border_color.clone(),
                    disabled: frozen,
                    on_change: move |career: Option<String>| {
                        dispatch.call(RegistrationAction::SelectCareer(career))
                    },
                }
                OptionSelector {
                    id: "semestre".to_string(),
                    label: form.semester.label.clone(),
                    options: form.semester.options.clone(),
                    selected: form.semester.selected.clone(),
                    border_color: border_color.clone(),
                    disabled: frozen,
                    on_change: move |semester: Option<String>| {
                        dispatch.call(RegistrationAction::SelectSemester(semester))
                    },
                }
            }

            GenderSelector {
                label: form.gender.label.clone(),
                selected: form.gender.selected,
                disabled: frozen,
                on_change: move |gender: Option<Gender>| {
                    dispatch.call(RegistrationAction::SelectGender(gender))
                },
            }

            button {
                class: "submit-button",
                r#type: "button",
                disabled: frozen,
                onclick: move |_| dispatch.call(RegistrationAction::Submit),
                "Enviar"
            }
        }
    }
}
