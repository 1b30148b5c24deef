use serde::{Deserialize, Serialize};
use tracing::info;

use crate::casing::{CaseBoundary, CaseStyle, Converter};

/// Represents configuration settings for the converters, deserialized from a JSON file.
///
/// Fields are deserialized using `serde`, with custom default functions specified for each.
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct ConfigurationJson {
    /// Where words are split besides explicit delimiters.
    /// Renamed in JSON as `caseBoundary` and defaults to `delimiters`.
    #[serde(rename = "caseBoundary", default = "delimiters_by_default")]
    pub case_boundary: CaseBoundary,

    /// Style used when a caller does not name one.
    /// Renamed in JSON as `defaultStyle` and defaults to `camel`.
    #[serde(rename = "defaultStyle", default = "camel_by_default")]
    pub default_style: CaseStyle,
}

/// Splitting on explicit delimiters only.
fn delimiters_by_default() -> CaseBoundary {
    info!("Setting default case boundary: delimiters");

    CaseBoundary::Delimiters
}

fn camel_by_default() -> CaseStyle {
    info!("Setting default style: camel");

    CaseStyle::Camel
}

/// Holds the converter settings for a runtime.
#[derive(Clone, PartialEq, Debug)]
pub struct Configatron {
    /// Word-splitting policy handed to every converter built from this configuration.
    case_boundary: CaseBoundary,
    /// Target style for `Converter::convert_default`.
    default_style: CaseStyle,
}

impl Default for Configatron {
    fn default() -> Self {
        Self::new(CaseBoundary::Delimiters, CaseStyle::Camel)
    }
}

impl Configatron {
    /// Constructs a new `Configatron` instance with specified configuration parameters.
    ///
    /// # Parameters
    ///
    /// * `case_boundary` - Where words are split besides explicit delimiters.
    /// * `default_style` - Style used when no style is requested.
    pub fn new(case_boundary: CaseBoundary, default_style: CaseStyle) -> Self {
        info!(
            "Initializing Caseforge configurations with case_boundary: {:?}, default_style: {}",
            case_boundary, default_style
        );

        Self {
            case_boundary,
            default_style,
        }
    }

    pub fn get_case_boundary(&self) -> CaseBoundary {
        self.case_boundary
    }

    pub fn get_default_style(&self) -> CaseStyle {
        self.default_style
    }

    pub fn set_case_boundary(&mut self, case_boundary: CaseBoundary) {
        self.case_boundary = case_boundary;
    }

    /// Builds a converter that follows these settings.
    pub fn build_converter(&self) -> Converter {
        Converter::new(self.case_boundary, self.default_style)
    }

    pub fn generate_configs_json(&self) -> ConfigurationJson {
        ConfigurationJson {
            case_boundary: self.case_boundary,
            default_style: self.default_style,
        }
    }
}

impl From<ConfigurationJson> for Configatron {
    fn from(config_json: ConfigurationJson) -> Self {
        Configatron::new(config_json.case_boundary, config_json.default_style)
    }
}
