// Light/dark palette and the semantic color lookup every screen uses.

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    System,
    Light,
    Dark,
}

impl ThemeMode {
    pub fn resolve(self) -> Appearance {
        match self {
            ThemeMode::Light => Appearance::Light,
            ThemeMode::Dark => Appearance::Dark,
            ThemeMode::System => detect_system_appearance(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Appearance {
    Light,
    Dark,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorKey {
    Text,
    Background,
    Tint,
    Icon,
}

impl Appearance {
    pub fn color(self, key: ColorKey) -> &'static str {
        match (self, key) {
            (Appearance::Light, ColorKey::Text) => "#11181C",
            (Appearance::Light, ColorKey::Background) => "#fff",
            (Appearance::Light, ColorKey::Tint) => "#0a7ea4",
            (Appearance::Light, ColorKey::Icon) => "#687076",
            (Appearance::Dark, ColorKey::Text) => "#ECEDEE",
            (Appearance::Dark, ColorKey::Background) => "#151718",
            (Appearance::Dark, ColorKey::Tint) => "#fff",
            (Appearance::Dark, ColorKey::Icon) => "#9BA1A6",
        }
    }

    /// Foreground for content drawn on top of the tint color.
    pub fn on_tint(self) -> &'static str {
        match self {
            Appearance::Light => "#fff",
            Appearance::Dark => "#11181C",
        }
    }
}

/// Context wrapper so the appearance signal is not confused with other `Signal`s.
#[derive(Clone, Copy, PartialEq)]
pub struct AppearanceSignal(pub Signal<Appearance>);

pub fn use_appearance() -> Appearance {
    let appearance = use_context::<AppearanceSignal>().0;
    appearance()
}

pub fn use_theme_color(key: ColorKey) -> &'static str {
    use_appearance().color(key)
}

#[cfg(any(target_os = "windows", target_os = "macos", target_os = "linux"))]
fn detect_system_appearance() -> Appearance {
    match dark_light::detect() {
        Ok(dark_light::Mode::Dark) => Appearance::Dark,
        Ok(_) => Appearance::Light,
        Err(err) => {
            log::warn!("could not detect system appearance: {err}");
            Appearance::Light
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn detect_system_appearance() -> Appearance {
    let prefers_dark = web_sys::window()
        .and_then(|win| win.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false);
    if prefers_dark {
        Appearance::Dark
    } else {
        Appearance::Light
    }
}

#[cfg(not(any(
    target_os = "windows",
    target_os = "macos",
    target_os = "linux",
    target_arch = "wasm32"
)))]
fn detect_system_appearance() -> Appearance {
    Appearance::Light
}
