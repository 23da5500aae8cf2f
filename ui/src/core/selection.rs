//! Active toggle code per attribute.

use std::collections::BTreeMap;

use super::config::ExplorerConfig;

/// Attribute name -> active option code.
///
/// Seeded with the default option for every configured attribute; afterwards
/// only [`SelectionState::set`] changes it, one attribute at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    codes: BTreeMap<String, u32>,
}

impl SelectionState {
    pub fn new(config: &ExplorerConfig) -> Self {
        let Some(default) = config.default_option() else {
            return Self::default();
        };
        Self {
            codes: config
                .attributes
                .iter()
                .map(|attr| (attr.clone(), default.code))
                .collect(),
        }
    }

    pub fn code(&self, attribute: &str) -> Option<u32> {
        self.codes.get(attribute).copied()
    }

    /// Overwrite the code for `attribute`, returning the previous one.
    /// Codes are not checked against the option set.
    pub fn set(&mut self, attribute: &str, code: u32) -> Option<u32> {
        self.codes.insert(attribute.to_string(), code)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.codes.iter().map(|(attr, code)| (attr.as_str(), *code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_attribute_starts_unchanged() {
        let config = ExplorerConfig::builtin();
        let state = SelectionState::new(&config);
        for attr in &config.attributes {
            assert_eq!(state.code(attr), Some(3), "{attr}");
        }
        assert_eq!(state.iter().count(), config.attributes.len());
    }

    #[test]
    fn setting_one_attribute_leaves_others_alone() {
        let config = ExplorerConfig::builtin();
        let mut state = SelectionState::new(&config);
        let before = state.clone();

        assert_eq!(state.set("dti", 1), Some(3));
        assert_eq!(state.code("dti"), Some(1));
        for (attr, code) in before.iter().filter(|(attr, _)| *attr != "dti") {
            assert_eq!(state.code(attr), Some(code));
        }
    }

    #[test]
    fn set_overwrites_without_validation() {
        let mut state = SelectionState::new(&ExplorerConfig::builtin());
        state.set("zip_code", 4);
        state.set("zip_code", 99);
        assert_eq!(state.code("zip_code"), Some(99));
    }

    #[test]
    fn no_options_means_empty_selection() {
        let mut config = ExplorerConfig::builtin();
        config.options.clear();
        assert_eq!(SelectionState::new(&config).iter().count(), 0);
    }
}
