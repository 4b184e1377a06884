use crate::components::{use_appearance, ColorKey, TextKind, ThemedText};
use dioxus::prelude::*;

/// "Upload PDF" sheet. Both buttons are inert while a pick is running.
#[component]
pub fn UploadModal(busy: bool, on_choose: EventHandler<()>, on_close: EventHandler<()>) -> Element {
    let appearance = use_appearance();
    let tint = appearance.color(ColorKey::Tint);
    let icon = appearance.color(ColorKey::Icon);
    let background = appearance.color(ColorKey::Background);
    let on_tint = appearance.on_tint();

    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| {
                if !busy {
                    on_close.call(());
                }
            },
            div {
                class: "modal-card",
                style: "background-color: {background}; border-color: {icon};",
                onclick: move |evt| evt.stop_propagation(),
                ThemedText { kind: TextKind::Subtitle, "Upload PDF" }
                ThemedText { class: "modal-hint".to_string(), "Select a PDF file to add to your uploads." }
                button {
                    class: "primary-button",
                    r#type: "button",
                    style: "background-color: {tint}; color: {on_tint};",
                    disabled: busy,
                    onclick: move |_| on_choose.call(()),
                    if busy {
                        "Opening…"
                    } else {
                        "Choose PDF"
                    }
                }
                button {
                    class: "secondary-button",
                    r#type: "button",
                    style: "border-color: {icon};",
                    disabled: busy,
                    onclick: move |_| on_close.call(()),
                    ThemedText { "Cancel" }
                }
            }
        }
    }
}
