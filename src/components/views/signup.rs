use super::auth_form::{FormField, PrimaryButton};
use crate::components::{use_navigation, FlowAction, TextKind, ThemedText, ThemedView};
use dioxus::prelude::*;

#[component]
pub fn Signup() -> Element {
    let navigation = use_navigation();
    let name = use_signal(String::new);
    let email = use_signal(String::new);
    let password = use_signal(String::new);

    let on_create = {
        let navigation = navigation.clone();
        move |_: MouseEvent| {
            log::debug!("signup submitted for {} <{}>", name.peek().as_str(), email.peek().as_str());
            navigation.dispatch(FlowAction::SignedUp);
        }
    };

    rsx! {
        ThemedView { class: "screen screen-form".to_string(),
            ThemedText { kind: TextKind::Title, "Sign up" }
            ThemedText { class: "text-muted form-subtitle".to_string(), "Create your account" }

            div { class: "form",
                FormField { value: name, placeholder: "Full name".to_string() }
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
                PrimaryButton { label: "Create account".to_string(), onclick: on_create }

                div { class: "form-row",
                    ThemedText { "Already have an account? " }
                    button {
                        class: "link-button",
                        r#type: "button",
                        onclick: move |_| navigation.dispatch(FlowAction::OpenLogin),
                        ThemedText { kind: TextKind::Link, "Login" }
                    }
                }
            }
        }
    }
}
