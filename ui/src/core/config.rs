//! Static explorer configuration: key attributes, toggle options, race groups.
//!
//! The configuration ships embedded (`config/explorer.toml`) and is parsed once.
//! A parse failure is logged and the built-in defaults are used instead, so the
//! page never fails to start because of it.

use once_cell::sync::Lazy;
use serde::Deserialize;

use super::error::Result;

const EMBEDDED_CONFIG: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/config/explorer.toml"
));

/// Position of the option used as default when none is flagged.
const FALLBACK_DEFAULT_INDEX: usize = 2;

/// Process-wide configuration, parsed from the embedded TOML on first use.
pub static CONFIG: Lazy<ExplorerConfig> = Lazy::new(ExplorerConfig::embedded);

/// One of the fixed toggle choices offered for every attribute.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ToggleOption {
    /// Button text.
    pub label: String,
    /// Stable token exposed as the button's `data-value`.
    pub token: String,
    /// Code stored in the dataset's key columns.
    pub code: u32,
    #[serde(default)]
    pub default: bool,
}

impl ToggleOption {
    fn new(label: &str, token: &str, code: u32, default: bool) -> Self {
        Self {
            label: label.to_string(),
            token: token.to_string(),
            code,
            default,
        }
    }
}

/// Dataset columns holding the two overall metrics.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SummaryColumns {
    pub equalized_odds: String,
    pub predicted_parity: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExplorerConfig {
    /// Dataset file name, relative to the page (web) or asset directory (desktop).
    pub dataset: String,
    /// Key attributes, in display order. Also the dataset's key columns.
    pub attributes: Vec<String>,
    pub options: Vec<ToggleOption>,
    /// Race groups, in display order.
    pub groups: Vec<String>,
    pub summary: SummaryColumns,
}

impl ExplorerConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    /// Parse the embedded configuration, falling back to [`ExplorerConfig::builtin`].
    pub fn embedded() -> Self {
        match Self::from_toml_str(EMBEDDED_CONFIG) {
            Ok(config) => config,
            Err(err) => {
                tracing::error!("{err}; using built-in explorer configuration");
                Self::builtin()
            }
        }
    }

    pub fn builtin() -> Self {
        Self {
            dataset: "mock.csv".to_string(),
            attributes: ["race_geo", "annual_inc", "int_rate", "dti", "zip_code"]
                .into_iter()
                .map(String::from)
                .collect(),
            options: vec![
                ToggleOption::new("Decrease", "decrease", 1, false),
                ToggleOption::new("Mute", "mute", 2, false),
                ToggleOption::new("Unchanged", "unchanged", 3, true),
                ToggleOption::new("Increase", "increase", 4, false),
            ],
            groups: [
                "White alone",
                "Black or African American alone",
                "American Indian and Alaska Native alone",
                "Asian alone",
                "Native Hawaiian and Other Pacific Islander alone",
                "Some other race alone",
                "Two or more races",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            summary: SummaryColumns {
                equalized_odds: "equalized_odds".to_string(),
                predicted_parity: "predicted_parity".to_string(),
            },
        }
    }

    /// The option every attribute starts on: the flagged default, else the
    /// third option, else the first.
    pub fn default_option(&self) -> Option<&ToggleOption> {
        self.options
            .iter()
            .find(|opt| opt.default)
            .or_else(|| self.options.get(FALLBACK_DEFAULT_INDEX))
            .or_else(|| self.options.first())
    }
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_config_matches_builtin() {
        let parsed = ExplorerConfig::from_toml_str(EMBEDDED_CONFIG).unwrap();
        assert_eq!(parsed, ExplorerConfig::builtin());
    }

    #[test]
    fn flagged_option_is_default() {
        let config = ExplorerConfig::builtin();
        let default = config.default_option().unwrap();
        assert_eq!(default.token, "unchanged");
        assert_eq!(default.code, 3);
    }

    #[test]
    fn third_option_is_default_when_none_flagged() {
        let mut config = ExplorerConfig::builtin();
        config.options.iter_mut().for_each(|opt| opt.default = false);
        config.options[2].code = 7;
        assert_eq!(config.default_option().map(|o| o.code), Some(7));
    }

    #[test]
    fn short_option_list_falls_back_to_first() {
        let mut config = ExplorerConfig::builtin();
        config.options.truncate(2);
        config.options.iter_mut().for_each(|opt| opt.default = false);
        assert_eq!(config.default_option().map(|o| o.code), Some(1));
    }

    #[test]
    fn malformed_toml_is_a_config_error() {
        let err = ExplorerConfig::from_toml_str("attributes = 3").unwrap_err();
        assert!(err.to_string().starts_with("invalid explorer configuration"));
    }
}
