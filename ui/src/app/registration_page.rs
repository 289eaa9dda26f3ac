use crate::console_info;
use dioxus::prelude::*;

use crate::components::display::AlertDialog;
use crate::components::forms::RegistrationFormView;
use crate::registration::{DialogState, RegistrationAction, RegistrationState};
use crate::services::config::get_global_config;

const REGISTRATION_CSS: Asset = asset!("/assets/styling/registration.css");

/// Render whichever dialog the state says is open
fn render_dialog(
    state: Signal<RegistrationState>,
    dispatch: EventHandler<RegistrationAction>,
) -> Element {
    match state().dialog {
        DialogState::Closed => rsx! {},
        DialogState::Error { title, body } => rsx! {
            AlertDialog {
                title: title,
                body: body,
                action_label: "Entendido".to_string(),
                modal: false,
                on_dismiss: move |_| dispatch.call(RegistrationAction::DismissError),
            }
        },
        DialogState::Success { body } => rsx! {
            AlertDialog {
                title: String::new(),
                body: body,
                action_label: "Ok".to_string(),
                modal: true,
                on_dismiss: move |_| dispatch.call(RegistrationAction::DismissSuccess),
            }
        },
    }
}

#[component]
pub fn RegistrationPage() -> Element {
    let config = use_hook(get_global_config);

    let mut state = use_signal(|| RegistrationState::new(&config));

    use_effect(move || {
        console_info!("[Registration] Form ready");
    });

    // Dispatch function for actions - using in-place reduction to preserve Dioxus Signal reactivity
    let dispatch = EventHandler::new(move |action: RegistrationAction| {
        state.with_mut(|s| {
            s.reduce_in_place(action);
        });
    });

    rsx! {
        document::Title { "{config.page.title}" }
        document::Link { rel: "stylesheet", href: REGISTRATION_CSS }

        div {
            class: "registration-container",
            style: "background-color: {config.page.background_color}; padding: {config.page.padding_px}px;",

            RegistrationFormView {
                state: state,
                dispatch: dispatch,
                border_color: config.page.border_color.clone(),
            }

            {render_dialog(state, dispatch)}
        }
    }
}
