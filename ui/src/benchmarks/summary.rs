use dioxus::prelude::*;

use crate::core::report::{SummaryMetric, SummaryRow};
use crate::t;

fn summary_label(metric: SummaryMetric) -> String {
    match metric {
        SummaryMetric::EqualizedOdds => t!("summary-equalized-odds"),
        SummaryMetric::PredictedParity => t!("summary-predicted-parity"),
    }
}

#[component]
pub fn SummaryTable(summary: Vec<SummaryRow>) -> Element {
    rsx! {
        div { class: "table-wrap summary-table",
            table { class: "table",
                tbody {
                    for row in summary.into_iter() {
                        tr {
                            td { strong { {summary_label(row.metric)} } }
                            td { class: "table__metric", "{row.value}" }
                        }
                    }
                }
            }
        }
    }
}
