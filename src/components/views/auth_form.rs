use crate::components::{use_appearance, ColorKey};
use dioxus::prelude::*;

/// Bordered text input bound to a local signal.
#[component]
pub fn FormField(
    value: Signal<String>,
    placeholder: String,
    #[props(default = "text".to_string())] input_type: String,
) -> Element {
    let appearance = use_appearance();
    let border = appearance.color(ColorKey::Icon);
    let text = appearance.color(ColorKey::Text);
    let mut value = value;

    rsx! {
        input {
            class: "form-input",
            r#type: "{input_type}",
            style: "border-color: {border}; color: {text};",
            placeholder: "{placeholder}",
            value: "{value}",
            oninput: move |evt| value.set(evt.value()),
        }
    }
}

/// Full-width tint button used to submit the login and signup forms.
#[component]
pub fn PrimaryButton(label: String, onclick: EventHandler<MouseEvent>) -> Element {
    let appearance = use_appearance();
    let tint = appearance.color(ColorKey::Tint);
    let on_tint = appearance.on_tint();

    rsx! {
        button {
            class: "primary-button",
            r#type: "button",
            style: "background-color: {tint}; color: {on_tint};",
            onclick: move |evt| onclick.call(evt),
            "{label}"
        }
    }
}
