#[cfg(not(target_arch = "wasm32"))]
use log::LevelFilter;

/// Installs the stderr logger. `RUST_LOG` overrides the default `info` level.
#[cfg(not(target_arch = "wasm32"))]
pub fn init_logging() {
    let result = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .filter_module("dioxus_core", LevelFilter::Warn)
        .filter_module("dioxus_desktop", LevelFilter::Warn)
        .filter_module("wry", LevelFilter::Warn)
        .filter_module("tao", LevelFilter::Warn)
        .try_init();
    if let Err(err) = result {
        eprintln!("[log] logger already installed: {err}");
    }
}

#[cfg(target_arch = "wasm32")]
pub fn init_logging() {}
