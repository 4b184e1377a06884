use super::details::InfoRow;
use crate::components::{
    use_appearance, use_navigation, ColorKey, FlowAction, Icon, TextKind, ThemedText, ThemedView,
};
use dioxus::prelude::*;

#[component]
pub fn Profile() -> Element {
    let navigation = use_navigation();
    let appearance = use_appearance();
    let icon = appearance.color(ColorKey::Icon);
    let tint = appearance.color(ColorKey::Tint);

    let on_back = {
        let navigation = navigation.clone();
        move |_| navigation.dispatch(FlowAction::Back)
    };

    rsx! {
        ThemedView { class: "screen screen-profile".to_string(),
            div { class: "screen-header",
                button {
                    class: "icon-button header-button",
                    r#type: "button",
                    style: "color: {icon};",
                    aria_label: "Go back",
                    onclick: on_back,
                    Icon {
                        name: "chevron-back".to_string(),
                        class: "w-6 h-6".to_string(),
                    }
                }
                ThemedText { kind: TextKind::DefaultSemiBold, class: "header-title".to_string(),
                    "Profile"
                }
                div { class: "header-button" }
            }

            div { class: "profile-avatar", style: "background-color: {tint};" }
            ThemedText { kind: TextKind::Title, class: "profile-name".to_string(), "Your Name" }
            ThemedText { class: "text-muted profile-meta".to_string(), "you@example.com" }

            ThemedView {
                class: "card".to_string(),
                style: format!("border-color: {icon};"),
                InfoRow { label: "Plan".to_string(), value: "Free".to_string() }
                InfoRow { label: "Uploads".to_string(), value: "2".to_string() }
            }

            button {
                class: "secondary-button logout-button",
                r#type: "button",
                style: "border-color: {icon}; color: {icon};",
                onclick: move |_| navigation.dispatch(FlowAction::Logout),
                Icon { name: "log-out".to_string(), class: "w-5 h-5".to_string() }
                ThemedText { kind: TextKind::DefaultSemiBold, "Logout" }
            }
        }
    }
}
