use crate::components::{use_appearance, ColorKey, Route};
use dioxus::prelude::*;

pub const APP_LOGO: Asset = asset!("/assets/icon.svg");

/// Layout wrapping every route: themed page background and the document title.
#[component]
pub fn AppShell() -> Element {
    let route = use_route::<Route>();
    let appearance = use_appearance();
    let background = appearance.color(ColorKey::Background);
    let text = appearance.color(ColorKey::Text);
    let title = route.title();

    rsx! {
        document::Title { "{title} · Audiobook" }
        div {
            class: "app-container",
            style: "background-color: {background}; color: {text};",
            main { class: "page-shell", Outlet::<Route> {} }
        }
    }
}
