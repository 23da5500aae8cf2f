use crate::i18n::{self};
use crate::t;
use dioxus::prelude::*;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Application header: brand and locale switcher.
///
/// Picking a language updates the global language code signal when the
/// platform provides one, so routed views remount with fresh strings.
#[component]
pub fn AppNavbar() -> Element {
    i18n::init();

    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    // Seed from the global code: a language switch remounts this component.
    let mut current_lang = use_signal(move || {
        lang_code_ctx
            .map(|code| code.peek().clone())
            .unwrap_or_else(|| "en-US".to_string())
    });
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;
    // Reactive dependency on the global language code (if provided).
    let _lang_marker = lang_code_ctx.as_ref().map(|c| c()).unwrap_or_default();

    let on_change = move |evt: dioxus::events::FormEvent| {
        let val = evt.value();
        match i18n::set_language(&val) {
            Ok(()) => {
                tracing::debug!(lang = %val, "language switched");
                current_lang.set(val.clone());
                if let Some(mut code) = lang_code_ctx {
                    code.set(val);
                }
            }
            Err(err) => tracing::warn!("Failed switching language to {val}: {err}"),
        }
    };

    let tagline = t!("tagline");
    let title = t!("app-title");

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header {
            id: "navbar",
            class: "navbar",
            div { style: "display:none", "{_lang_marker}" }
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-link",
                        span { class: "navbar__brand-spark", aria_hidden: "true" }
                        span { class: "navbar__brand-mark", "{title}" }
                    }
                    span { class: "navbar__brand-subtitle", "{tagline}" }
                }

                if show_switcher {
                    div { class: "navbar__locale",
                        label {
                            class: "visually-hidden",
                            r#for: "locale-select",
                            {t!("nav-language-label")}
                        }
                        select {
                            id: "locale-select",
                            value: "{current_lang()}",
                            oninput: on_change,
                            { langs().iter().map(|code| {
                                let c = code.clone();
                                rsx!{
                                    option { key: "{c}", value: "{c}", "{c}" }
                                }
                            })}
                        }
                    }
                }
            }
        }
    }
}
