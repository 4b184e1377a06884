mod state;

pub use state::*;

use crate::components::{use_appearance, ColorKey, Icon, ThemedText, TextKind};
use dioxus::prelude::*;

/// Persistent bottom bar with a progress track, track metadata and play/skip controls.
#[component]
pub fn MiniPlayerBar(
    title: String,
    subtitle: Option<String>,
    #[props(default = DEFAULT_INITIAL_PROGRESS)] initial_progress: f64,
) -> Element {
    let appearance = use_appearance();
    let tint = appearance.color(ColorKey::Tint);
    let icon = appearance.color(ColorKey::Icon);
    let background = appearance.color(ColorKey::Background);

    // Progress is fixed for the lifetime of the bar; nothing advances it yet.
    let mut playback = use_signal(|| PlaybackState::new(initial_progress));
    let state = playback();
    let (filled, unfilled) = state.segments();
    let progress = state.progress();
    let (toggle_icon, toggle_label) = if state.is_playing() {
        ("pause", "Pause")
    } else {
        ("play", "Play")
    };

    rsx! {
        div {
            class: "mini-player",
            style: "background-color: {background}; border-top-color: {icon};",
            div {
                class: "mini-player-track",
                style: "background-color: {icon};",
                role: "progressbar",
                aria_valuemin: "0",
                aria_valuemax: "1",
                aria_valuenow: "{progress}",
                div {
                    class: "mini-player-segment",
                    style: "flex-grow: {filled}; background-color: {tint};",
                }
                div {
                    class: "mini-player-segment",
                    style: "flex-grow: {unfilled}; background-color: transparent;",
                }
            }
            div { class: "mini-player-row",
                div {
                    class: "mini-player-artwork",
                    style: "background-color: {tint};",
                }
                div { class: "mini-player-meta",
                    ThemedText {
                        kind: TextKind::DefaultSemiBold,
                        class: "truncate".to_string(),
                        "{title}"
                    }
                    if let Some(subtitle) = subtitle.as_ref() {
                        ThemedText {
                            class: "truncate mini-player-subtitle".to_string(),
                            "{subtitle}"
                        }
                    }
                }
                div { class: "mini-player-controls",
                    button {
                        class: "icon-button",
                        r#type: "button",
                        style: "color: {icon};",
                        aria_label: toggle_label,
                        onclick: move |_| playback.write().toggle_play(),
                        Icon {
                            name: toggle_icon.to_string(),
                            class: "w-6 h-6".to_string(),
                        }
                    }
                    button {
                        class: "icon-button",
                        r#type: "button",
                        style: "color: {icon};",
                        aria_label: "Skip forward",
                        onclick: move |_| playback.write().skip_forward(),
                        Icon {
                            name: "skip-forward".to_string(),
                            class: "w-5 h-5".to_string(),
                        }
                    }
                }
            }
        }
    }
}
