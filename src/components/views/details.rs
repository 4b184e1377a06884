use crate::components::{
    use_appearance, use_navigation, ColorKey, FlowAction, Icon, MiniPlayerBar, TextKind,
    ThemedText, ThemedView,
};
use crate::uploads::{DetailsParams, QueryText};
use dioxus::prelude::*;

const DETAILS_INITIAL_PROGRESS: f64 = 0.18;

#[component]
pub fn Details(
    id: String,
    file_name: QueryText,
    uploaded_at: QueryText,
    status: QueryText,
) -> Element {
    let navigation = use_navigation();
    let appearance = use_appearance();
    let icon = appearance.color(ColorKey::Icon);
    let tint = appearance.color(ColorKey::Tint);

    let params = DetailsParams::from_route_fields(
        &id,
        file_name.as_str(),
        uploaded_at.as_str(),
        status.as_str(),
    );
    let title = params.title();

    rsx! {
        ThemedView { class: "screen screen-details".to_string(),
            div { class: "screen-header",
                button {
                    class: "icon-button header-button",
                    r#type: "button",
                    style: "color: {icon};",
                    aria_label: "Go back",
                    onclick: move |_| navigation.dispatch(FlowAction::Back),
                    Icon {
                        name: "chevron-back".to_string(),
                        class: "w-6 h-6".to_string(),
                    }
                }
                ThemedText {
                    kind: TextKind::DefaultSemiBold,
                    class: "header-title header-title-centered truncate".to_string(),
                    "Details"
                }
                // Placeholder affordance; there is no menu behind it.
                span {
                    class: "icon-button header-button",
                    style: "color: {icon};",
                    aria_hidden: "true",
                    Icon { name: "ellipsis".to_string(), class: "w-6 h-6".to_string() }
                }
            }

            div { class: "details-content",
                ThemedText { kind: TextKind::Title, class: "details-title".to_string(), "{title}" }

                div { class: "card", style: "border-color: {tint};",
                    InfoRow { label: "File Name".to_string(), value: title.clone() }
                    InfoRow { label: "Uploaded At".to_string(), value: params.uploaded_at_label() }
                    InfoRow { label: "Status".to_string(), value: params.status_label() }
                }
            }

            MiniPlayerBar {
                title: title.clone(),
                subtitle: "Audiobook".to_string(),
                initial_progress: DETAILS_INITIAL_PROGRESS,
            }
        }
    }
}

#[component]
pub(super) fn InfoRow(label: String, value: String) -> Element {
    rsx! {
        div { class: "info-row",
            ThemedText { class: "text-muted".to_string(), "{label}" }
            ThemedText { kind: TextKind::DefaultSemiBold, class: "truncate info-value".to_string(), "{value}" }
        }
    }
}
