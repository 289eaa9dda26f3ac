use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct AlertDialogProps {
    /// Empty title renders the body alone
    pub title: String,
    pub body: String,
    pub action_label: String,
    /// Modal dialogs ignore clicks on the backdrop
    pub modal: bool,
    pub on_dismiss: EventHandler<()>,
}

#[component]
pub fn AlertDialog(props: AlertDialogProps) -> Element {
    let modal = props.modal;
    let on_dismiss = props.on_dismiss;

    rsx! {
        div {
            class: "dialog-backdrop",
            onclick: move |_| {
                if !modal {
                    on_dismiss.call(());
                }
            },
            div {
                class: "dialog-panel",
                "role": "alertdialog",
                "aria-modal": "{modal}",
                onclick: move |evt: MouseEvent| evt.stop_propagation(),

                if !props.title.is_empty() {
                    h2 {
                        class: "dialog-title",
                        "{props.title}"
                    }
                }
                p {
                    class: "dialog-body",
                    "{props.body}"
                }
                div {
                    class: "dialog-actions",
                    button {
                        class: "dialog-button",
                        r#type: "button",
                        onclick: move |_| on_dismiss.call(()),
                        "{props.action_label}"
                    }
                }
            }
        }
    }
}
