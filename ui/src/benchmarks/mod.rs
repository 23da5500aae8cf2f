mod table;
pub use table::BenchmarkTable;

mod summary;
pub use summary::SummaryTable;

use dioxus::prelude::*;

use crate::core::report::BenchmarkReport;

/// Full results region. Re-rendered from scratch whenever the report changes;
/// the summary table only exists for a match.
#[component]
pub fn BenchmarksPanel(report: BenchmarkReport) -> Element {
    let summary = match &report {
        BenchmarkReport::Matched { summary, .. } => Some(summary.clone()),
        BenchmarkReport::NoMatch => None,
    };

    rsx! {
        BenchmarkTable { report }
        if let Some(summary) = summary {
            SummaryTable { summary }
        }
    }
}
