use dioxus::prelude::*;

use crate::core::report::BenchmarkReport;
use crate::t;

/// Per-race metrics table; a no-match report renders the single no-data row.
#[component]
pub fn BenchmarkTable(report: BenchmarkReport) -> Element {
    rsx! {
        div { class: "table-wrap",
            table { class: "table",
                thead {
                    tr {
                        th { {t!("column-race")} }
                        th { {t!("column-accuracy")} }
                        th { {t!("column-fraction-given")} }
                        th { {t!("column-fraction-given-original")} }
                    }
                }
                tbody {
                    match report {
                        BenchmarkReport::Matched { groups, .. } => rsx! {
                            for row in groups.into_iter() {
                                tr { key: "{row.race}",
                                    td { "{row.race}" }
                                    td { class: "table__metric", "{row.accuracy}" }
                                    td { class: "table__metric", "{row.fraction_given}" }
                                    td { class: "table__metric", "{row.fraction_given_original}" }
                                }
                            }
                        },
                        BenchmarkReport::NoMatch => rsx! {
                            tr { class: "table__placeholder",
                                td { colspan: "4", {t!("benchmarks-no-data")} }
                            }
                        },
                    }
                }
            }
        }
    }
}
