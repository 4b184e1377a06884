use dioxus::prelude::*;

mod components;
mod config;
mod diagnostics;
mod uploads;
mod utils;

use components::{AppearanceSignal, Route};
use config::AppConfig;

const FAVICON: Asset = asset!("/assets/icon.svg");
const APP_CSS: Asset = asset!("/assets/styling/app.css");

fn main() {
    diagnostics::init_logging();
    log::info!("starting Audiobook");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(AppConfig::load_or_default);
    let appearance = use_signal(|| config.appearance.resolve());

    use_context_provider(|| config.clone());
    use_context_provider(|| AppearanceSignal(appearance));

    rsx! {
        document::Link { rel: "icon", r#type: "image/svg+xml", href: FAVICON }
        document::Meta { name: "theme-color", content: "#0a7ea4" }
        document::Meta { name: "mobile-web-app-capable", content: "yes" }
        document::Meta { name: "apple-mobile-web-app-title", content: "Audiobook" }
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1, viewport-fit=cover",
        }

        document::Stylesheet { href: APP_CSS }

        Router::<Route> {}
    }
}
