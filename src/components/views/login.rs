use super::auth_form::{FormField, PrimaryButton};
use crate::components::{use_navigation, FlowAction, TextKind, ThemedText, ThemedView};
use dioxus::prelude::*;

#[component]
pub fn Login() -> Element {
    let navigation = use_navigation();
    let email = use_signal(String::new);
    let password = use_signal(String::new);

    let on_login = {
        let navigation = navigation.clone();
        move |_: MouseEvent| {
            // Any input is accepted; there is no account backend.
            log::debug!("login submitted for {}", email.peek().as_str());
            navigation.dispatch(FlowAction::LoggedIn);
        }
    };

    rsx! {
        ThemedView { class: "screen screen-form".to_string(),
            ThemedText { kind: TextKind::Title, "Login" }
            ThemedText { class: "text-muted form-subtitle".to_string(), "Welcome back" }

            div { class: "form",
                FormField {
                    value: email,
                    placeholder: "Email".to_string(),
                    input_type: "email".to_string(),
                }
                FormField {
                    value: password,
                    placeholder: "Password".to_string(),
                    input_type: "password".to_string(),
                }
                PrimaryButton { label: "Login".to_string(), onclick: on_login }

                div { class: "form-row",
                    ThemedText { "Don't have an account? " }
                    button {
                        class: "link-button",
                        r#type: "button",
                        onclick: move |_| navigation.dispatch(FlowAction::OpenSignup),
                        ThemedText { kind: TextKind::Link, "Sign up" }
                    }
                }
            }
        }
    }
}
