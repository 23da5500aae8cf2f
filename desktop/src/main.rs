#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

use std::path::PathBuf;

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::prelude::*;

use ui::components::AppNavbar;
use ui::core::config::CONFIG;
use ui::core::source::DataSource;
use ui::views::Explorer;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopNavbar)]
    #[route("/")]
    Home {},
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Embedded shared theme (ui/assets/theme/main.css); no separate desktop /assets needed.

#[cfg(feature = "desktop")]
fn main() {
    dioxus::logger::initialize_default();

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!("Fairlens – v{}", env!("CARGO_PKG_VERSION")))
                        .with_maximized(true),
                )
                .with_resource_directory(resolve_resource_dir()),
        )
        .launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // Global language code; AppNavbar updates it on locale selection.
    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);

    rsx! {
        // Always inline embedded CSS (no external file dependency for desktop builds)
        document::Style { "{MAIN_CSS_INLINE}" }

        // Keyed wrapper forces a full remount on language change.
        div {
            key: "{lang_code()}",
            Router::<Route> { }
        }
    }
}

fn resolve_resource_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        // During `cargo run` / `dx serve` load straight from the shared ui crate.
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/../ui/assets"))
    }

    #[cfg(not(debug_assertions))]
    {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
            .unwrap_or_else(|| PathBuf::from("assets"))
    }
}

/// Dataset file inside the resource directory, as named by the configuration.
fn dataset_path() -> PathBuf {
    resolve_resource_dir().join("data").join(&CONFIG.dataset)
}

#[component]
fn Home() -> Element {
    rsx! {
        Explorer { source: DataSource::File(dataset_path()) }
    }
}

/// A desktop-specific layout around the shared `AppNavbar` component
/// which allows us to use the desktop-specific `Route` enum.
#[component]
fn DesktopNavbar() -> Element {
    rsx! {
        AppNavbar {}
        Outlet::<Route> {}
    }
}
