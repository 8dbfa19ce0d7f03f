//! Style generation settings

use geostyle_core::Result;
use serde::{Deserialize, Serialize};

/// Tunables shared by every style generation call
///
/// Every field has a default, so a partial JSON document (or none at all)
/// is a valid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleSettings {
    /// Minimum vertical gap, in pixels, between stacked circle legend entries
    pub circle_min_legend_height: f64,
    /// Smallest value shown by a linear size legend
    pub size_min_legend_height: f64,
    /// Color of features without a value when nothing else is configured
    pub no_value_fill_color: String,
    /// Stroke color of legacy symbology styles
    pub legacy_stroke_color: String,
}

impl Default for StyleSettings {
    fn default() -> Self {
        Self {
            circle_min_legend_height: 14.0,
            size_min_legend_height: 1.0,
            no_value_fill_color: "#DDDDDD".to_string(),
            legacy_stroke_color: "#ffffff".to_string(),
        }
    }
}

impl StyleSettings {
    /// Parse settings from JSON, missing fields taking their default
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = StyleSettings::default();
        assert_eq!(settings.circle_min_legend_height, 14.0);
        assert_eq!(settings.size_min_legend_height, 1.0);
        assert_eq!(settings.no_value_fill_color, "#DDDDDD");
    }

    #[test]
    fn test_partial_json() {
        let settings = StyleSettings::from_json(r##"{"circle_min_legend_height": 20}"##).unwrap();
        assert_eq!(settings.circle_min_legend_height, 20.0);
        assert_eq!(settings.legacy_stroke_color, "#ffffff");

        assert_eq!(StyleSettings::from_json("{}").unwrap(), StyleSettings::default());
    }

    #[test]
    fn test_malformed_json() {
        let err = StyleSettings::from_json("{\"size_min_legend_height\": \"big\"}").unwrap_err();
        assert!(matches!(err, geostyle_core::Error::Malformed(_)));
    }
}
