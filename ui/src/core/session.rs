//! Explorer session: the single owner of dataset, selection and configuration.

use super::config::ExplorerConfig;
use super::dataset::{Dataset, Record};
use super::matcher::{duplicate_keys, find_match};
use super::report::BenchmarkReport;
use super::selection::SelectionState;

/// A toggle activation: write `code` into `attribute`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionChange {
    pub attribute: String,
    pub code: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    config: ExplorerConfig,
    dataset: Dataset,
    selection: SelectionState,
}

impl Session {
    pub fn new(dataset: Dataset, config: ExplorerConfig) -> Self {
        tracing::info!(
            rows = dataset.len(),
            columns = dataset.headers().len(),
            "dataset loaded"
        );
        for (key, rows) in duplicate_keys(dataset.records(), &config.attributes) {
            tracing::warn!(?key, ?rows, "duplicate key combination; first row wins");
        }

        let selection = SelectionState::new(&config);
        Self {
            config,
            dataset,
            selection,
        }
    }

    pub fn config(&self) -> &ExplorerConfig {
        &self.config
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Apply one activation; returns the code previously held.
    pub fn apply(&mut self, change: &SelectionChange) -> Option<u32> {
        tracing::debug!(attribute = %change.attribute, code = change.code, "selection changed");
        self.selection.set(&change.attribute, change.code)
    }

    pub fn current_record(&self) -> Option<&Record> {
        find_match(
            self.dataset.records(),
            &self.selection,
            &self.config.attributes,
        )
    }

    pub fn report(&self) -> BenchmarkReport {
        BenchmarkReport::build(self.current_record(), &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(text: &str) -> Session {
        Session::new(Dataset::parse(text), ExplorerConfig::builtin())
    }

    fn change(attribute: &str, code: u32) -> SelectionChange {
        SelectionChange {
            attribute: attribute.to_string(),
            code,
        }
    }

    #[test]
    fn default_selection_finds_unchanged_row() {
        let s = session(
            "race_geo,annual_inc,int_rate,dti,zip_code,White alone\n3,3,3,3,3,0.5\n1,3,3,3,3,0.6",
        );
        let record = s.current_record().unwrap();
        assert_eq!(record.number("White alone"), Some(0.5));
    }

    #[test]
    fn apply_rematches() {
        let mut s = session(
            "race_geo,annual_inc,int_rate,dti,zip_code,White alone\n3,3,3,3,3,0.5\n1,3,3,3,3,0.6",
        );
        assert_eq!(s.apply(&change("race_geo", 1)), Some(3));
        assert_eq!(s.current_record().and_then(|r| r.number("White alone")), Some(0.6));

        s.apply(&change("dti", 2));
        assert!(s.current_record().is_none());
        assert_eq!(s.report(), BenchmarkReport::NoMatch);
    }

    #[test]
    fn empty_dataset_reports_no_match() {
        let s = session("");
        assert!(s.dataset().is_empty());
        assert_eq!(s.report(), BenchmarkReport::NoMatch);
    }
}
