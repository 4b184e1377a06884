use crate::components::{use_theme_color, ColorKey};
use dioxus::prelude::*;

const LINK_COLOR: &str = "#0a7ea4";

#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum TextKind {
    #[default]
    Default,
    DefaultSemiBold,
    Title,
    Subtitle,
    Link,
}

impl TextKind {
    fn class(self) -> &'static str {
        match self {
            TextKind::Default => "text-default",
            TextKind::DefaultSemiBold => "text-default text-semibold",
            TextKind::Title => "text-title",
            TextKind::Subtitle => "text-subtitle",
            TextKind::Link => "text-link",
        }
    }
}

/// Text in the current appearance's text color.
#[component]
pub fn ThemedText(
    #[props(default)] kind: TextKind,
    #[props(default)] class: String,
    #[props(default)] style: String,
    children: Element,
) -> Element {
    let text = use_theme_color(ColorKey::Text);
    let color = if kind == TextKind::Link { LINK_COLOR } else { text };

    rsx! {
        span {
            class: "themed-text {kind.class()} {class}",
            style: "color: {color}; {style}",
            {children}
        }
    }
}

#[component]
pub fn ThemedView(
    #[props(default)] class: String,
    #[props(default)] style: String,
    children: Element,
) -> Element {
    let background = use_theme_color(ColorKey::Background);

    rsx! {
        div {
            class: "themed-view {class}",
            style: "background-color: {background}; {style}",
            {children}
        }
    }
}
