use dioxus::prelude::*;

use ui::components::AppNavbar;
use ui::core::source::DataSource;
use ui::views::Explorer;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Home {},
}

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // Global language code; AppNavbar updates it on locale selection.
    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);

    rsx! {
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }

        div {
            key: "{lang_code()}",
            Router::<Route> {}
        }
    }
}

/// Explorer fed from the dataset bundled with the web build.
#[component]
fn Home() -> Element {
    rsx! {
        Explorer { source: DataSource::Url(ui::DATASET_CSV.to_string()) }
    }
}

/// A web-specific layout around the shared `AppNavbar` component
/// which allows us to use the web-specific `Route` enum.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        AppNavbar {}
        Outlet::<Route> {}
    }
}
