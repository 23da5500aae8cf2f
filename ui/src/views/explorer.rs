use dioxus::prelude::*;

use crate::benchmarks::BenchmarksPanel;
use crate::controls::AttributeToggles;
use crate::core::config::{ExplorerConfig, CONFIG};
use crate::core::report::BenchmarkReport;
use crate::core::selection::SelectionState;
use crate::core::session::{SelectionChange, Session};
use crate::core::source::{load_dataset, DataSource};

/// Explorer page: loads the dataset once, then hosts toggles and results.
///
/// Until the load succeeds both regions stay empty. A failed load is logged and
/// the page is left that way.
#[component]
pub fn Explorer(source: DataSource) -> Element {
    let mut session = use_signal(|| Option::<Session>::None);

    use_future(move || {
        let source = source.clone();
        async move {
            match load_dataset(&source).await {
                Ok(dataset) => session.set(Some(Session::new(dataset, CONFIG.clone()))),
                Err(err) => tracing::error!("Failed to load {}: {err}", source.label()),
            }
        }
    });

    let on_select = move |change: SelectionChange| {
        session.with_mut(|slot| {
            if let Some(active) = slot.as_mut() {
                active.apply(&change);
            }
        });
    };

    let loaded = session.with(|slot| slot.as_ref().map(Snapshot::of));

    rsx! {
        section { class: "page page-explorer",
            h1 { {crate::t!("explorer-title")} }
            p { {crate::t!("explorer-intro")} }

            div { class: "explorer__panels",
                aside { class: "explorer__attributes",
                    h2 { {crate::t!("attributes-heading")} }
                    div { id: "attributes",
                        if let Some(view) = loaded.as_ref() {
                            AttributeToggles {
                                config: view.config.clone(),
                                selection: view.selection.clone(),
                                on_select,
                            }
                        }
                    }
                }
                div { class: "explorer__results",
                    h2 { {crate::t!("benchmarks-heading")} }
                    div { id: "benchmarks",
                        if let Some(view) = loaded.as_ref() {
                            span { class: "explorer__meta", {crate::t!("dataset-rows", count = view.rows)} }
                            BenchmarksPanel { report: view.report.clone() }
                        }
                    }
                }
            }
        }
    }
}

/// Render-time copy of the session state the page needs.
struct Snapshot {
    config: ExplorerConfig,
    selection: SelectionState,
    report: BenchmarkReport,
    rows: usize,
}

impl Snapshot {
    fn of(session: &Session) -> Self {
        Self {
            config: session.config().clone(),
            selection: session.selection().clone(),
            report: session.report(),
            rows: session.dataset().len(),
        }
    }
}
