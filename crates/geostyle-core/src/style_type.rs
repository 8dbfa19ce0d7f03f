//! Map style (layer) types

use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Rendering type of a map layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum MapStyleType {
    Fill,
    FillExtrusion,
    Circle,
    Line,
    Symbol,
}

impl MapStyleType {
    pub const ALL: [Self; 5] = [
        Self::Fill,
        Self::FillExtrusion,
        Self::Circle,
        Self::Line,
        Self::Symbol,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fill => "fill",
            Self::FillExtrusion => "fill-extrusion",
            Self::Circle => "circle",
            Self::Line => "line",
            Self::Symbol => "symbol",
        }
    }

    /// Property name prefix of this type, `fill_extrusion` written `extrusion`
    fn prefix(&self) -> &'static str {
        match self {
            Self::FillExtrusion => "extrusion",
            other => other.as_str(),
        }
    }

    /// Whether a configured property (e.g. `fill_outline_color`) styles this type
    pub fn owns_property(&self, property: &str) -> bool {
        let property = property
            .replace("fill_extrusion", "extrusion")
            .replace("fill-extrusion", "extrusion");
        property.starts_with(self.prefix())
    }

    /// Configuration key holding the layer color, e.g. `circle_color`
    pub fn color_property(&self) -> String {
        format!("{}_color", self.as_str().replace('-', "_"))
    }

    /// Layout key ordering features, e.g. `circle-sort-key`
    pub fn sort_key_property(&self) -> String {
        format!("{}-sort-key", self.as_str())
    }
}

/// Paint property name of a configured property: `_` becomes `-`
pub fn to_map_style(property: &str) -> String {
    property.replace('_', "-")
}

impl fmt::Display for MapStyleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MapStyleType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| Error::UnknownStyleType(s.to_string()))
    }
}

impl TryFrom<String> for MapStyleType {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<MapStyleType> for &'static str {
    fn from(t: MapStyleType) -> Self {
        t.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("fill-extrusion".parse::<MapStyleType>().unwrap(), MapStyleType::FillExtrusion);
        assert!(matches!(
            "raster".parse::<MapStyleType>(),
            Err(Error::UnknownStyleType(_))
        ));
        assert!("fill_extrusion".parse::<MapStyleType>().is_err());
    }

    #[test]
    fn test_owns_property() {
        assert!(MapStyleType::Fill.owns_property("fill_color"));
        assert!(MapStyleType::Fill.owns_property("fill_outline_color"));
        assert!(!MapStyleType::Fill.owns_property("fill_extrusion_color"));
        assert!(!MapStyleType::Fill.owns_property("circle_radius"));
        assert!(MapStyleType::FillExtrusion.owns_property("fill_extrusion_height"));
        assert!(MapStyleType::Circle.owns_property("circle_stroke_width"));
        assert!(MapStyleType::Symbol.owns_property("symbol_sort_key"));
        assert!(!MapStyleType::Symbol.owns_property("text_size"));
        assert!(!MapStyleType::Symbol.owns_property("icon_opacity"));
    }

    #[test]
    fn test_derived_names() {
        assert_eq!(MapStyleType::FillExtrusion.color_property(), "fill_extrusion_color");
        assert_eq!(MapStyleType::Circle.sort_key_property(), "circle-sort-key");
        assert_eq!(to_map_style("fill_outline_color"), "fill-outline-color");
    }

    #[test]
    fn test_serde() {
        let t: MapStyleType = serde_json::from_str("\"circle\"").unwrap();
        assert_eq!(t, MapStyleType::Circle);
        assert_eq!(serde_json::to_string(&MapStyleType::FillExtrusion).unwrap(), "\"fill-extrusion\"");
    }
}
