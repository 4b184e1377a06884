use crate::components::{use_navigation, FlowAction, TextKind, ThemedText, ThemedView, APP_LOGO};
use crate::config::AppConfig;
use crate::utils::delay_ms;
use dioxus::prelude::*;

#[component]
pub fn Splash() -> Element {
    let config = use_context::<AppConfig>();
    let navigation = use_navigation();
    let delay = config.splash_delay_ms;

    // The future belongs to this scope, so leaving the screen early drops the timer.
    use_future(move || {
        let navigation = navigation.clone();
        async move {
            delay_ms(delay).await;
            navigation.dispatch(FlowAction::SplashElapsed);
        }
    });

    rsx! {
        ThemedView { class: "screen screen-centered".to_string(),
            div { class: "splash-logo",
                img { src: APP_LOGO, alt: "Audiobook" }
            }
            ThemedText { kind: TextKind::Title, class: "text-center".to_string(), "Audiobook" }
            ThemedText { class: "text-center text-muted splash-tagline".to_string(),
                "Upload and manage your PDF audiobooks"
            }
        }
    }
}
