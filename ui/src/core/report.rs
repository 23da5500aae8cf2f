//! View model for the benchmark tables.
//!
//! Building a report is pure: the same record and configuration always give
//! the same strings, and components only lay the strings out.

use super::config::ExplorerConfig;
use super::dataset::Record;
use super::format::format_metric;

const FRACTION_GIVEN_SUFFIX: &str = "_fraction_given";
const FRACTION_GIVEN_ORIGINAL_SUFFIX: &str = "_fraction_given_original";

/// Metrics for one race group, already formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupRow {
    pub race: String,
    pub accuracy: String,
    pub fraction_given: String,
    pub fraction_given_original: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryMetric {
    EqualizedOdds,
    PredictedParity,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    pub metric: SummaryMetric,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BenchmarkReport {
    /// The selection has no record. Not an error.
    NoMatch,
    Matched {
        groups: Vec<GroupRow>,
        summary: Vec<SummaryRow>,
    },
}

impl BenchmarkReport {
    pub fn build(record: Option<&Record>, config: &ExplorerConfig) -> Self {
        let Some(record) = record else {
            return Self::NoMatch;
        };

        let groups = config
            .groups
            .iter()
            .map(|race| GroupRow {
                race: race.clone(),
                accuracy: format_metric(record.get(race)),
                fraction_given: format_metric(
                    record.get(&format!("{race}{FRACTION_GIVEN_SUFFIX}")),
                ),
                fraction_given_original: format_metric(
                    record.get(&format!("{race}{FRACTION_GIVEN_ORIGINAL_SUFFIX}")),
                ),
            })
            .collect();

        let summary = vec![
            SummaryRow {
                metric: SummaryMetric::EqualizedOdds,
                value: format_metric(record.get(&config.summary.equalized_odds)),
            },
            SummaryRow {
                metric: SummaryMetric::PredictedParity,
                value: format_metric(record.get(&config.summary.predicted_parity)),
            },
        ];

        Self::Matched { groups, summary }
    }

    pub fn is_match(&self) -> bool {
        matches!(self, Self::Matched { .. })
    }
}
