//! Wizard style configuration
//!
//! Configuration arrives as loosely-typed JSON. It is first deserialized
//! into the `Raw*` structs, which mirror the JSON shape, then converted
//! into [`WizardConfig`], where every `(type, analysis)` combination is its
//! own variant. Unknown tags and missing keys are rejected during the
//! conversion with the matching [`Error`] variant.

use geostyle_classify::ClassificationMethod;
use geostyle_core::{Boundaries, Category, Error, MapStyleType, Result};
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

/// Wizard configuration as written by clients
#[derive(Debug, Clone, Deserialize)]
pub struct RawWizardConfig {
    pub map_style_type: String,
    #[serde(default)]
    pub style: IndexMap<String, RawPropertyConfig>,
}

/// Configuration of one style property as written by clients
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPropertyConfig {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub field: Option<String>,
    pub value: Option<Value>,
    pub no_value: Option<Value>,
    pub analysis: Option<String>,
    pub method: Option<String>,
    pub boundaries: Option<Vec<f64>>,
    pub values: Option<Vec<Value>>,
    pub max_radius: Option<f64>,
    pub max_value: Option<f64>,
    pub categories: Option<Vec<Category>>,
    #[serde(default)]
    pub generate_legend: bool,
}

/// What a variable property changes, derived from its name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariationKind {
    /// `*color*`
    Color,
    /// `*width*` or `*height*`, scaled linearly
    Value,
    /// `*radius*` or `*size*`, scaled by area
    Radius,
}

impl VariationKind {
    pub fn from_property(property: &str) -> Option<Self> {
        if property.contains("color") {
            Some(Self::Color)
        } else if property.contains("width") || property.contains("height") {
            Some(Self::Value)
        } else if property.contains("radius") || property.contains("size") {
            Some(Self::Radius)
        } else {
            None
        }
    }
}

/// Where graduated class boundaries come from
#[derive(Debug, Clone, PartialEq)]
pub enum ClassSource {
    Explicit(Boundaries),
    Method(ClassificationMethod),
}

/// Classed style: one output value per class
#[derive(Debug, Clone, PartialEq)]
pub struct Graduated {
    pub classes: ClassSource,
    pub values: Vec<Value>,
    pub no_value: Option<Value>,
}

/// Symbol size proportional to the property value
#[derive(Debug, Clone, PartialEq)]
pub struct Proportional {
    /// `max_radius` of a radius, `max_value` of a linear size
    pub max_size: f64,
    pub no_value: Option<f64>,
}

/// How a variable property maps data to style
#[derive(Debug, Clone, PartialEq)]
pub enum Analysis {
    Graduated(Graduated),
    Categorized(Vec<Category>),
    Proportional(Proportional),
}

impl Analysis {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Graduated(_) => "graduated",
            Self::Categorized(_) => "categorized",
            Self::Proportional(_) => "proportional",
        }
    }
}

/// Style of one property
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyStyle {
    /// Constant value, optionally replaced where `field` has no value
    Fixed {
        value: Value,
        no_value: Option<(String, Value)>,
    },
    /// Value driven by a data field
    Variable {
        field: String,
        kind: VariationKind,
        analysis: Analysis,
        generate_legend: bool,
    },
}

/// Validated wizard configuration
#[derive(Debug, Clone, PartialEq)]
pub struct WizardConfig {
    pub map_style_type: MapStyleType,
    /// Properties styling `map_style_type`, in configuration order
    pub properties: IndexMap<String, PropertyStyle>,
}

impl WizardConfig {
    /// Parse and validate a JSON configuration
    pub fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value::<RawWizardConfig>(value)?.try_into()
    }

    /// Parse and validate a JSON configuration string
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str::<RawWizardConfig>(json)?.try_into()
    }
}

fn require<T>(value: Option<T>, property: &str, key: &str) -> Result<T> {
    value.ok_or_else(|| Error::missing_key(property, key))
}

fn parse_analysis(name: &str) -> Result<&'static str> {
    match name {
        "graduated" => Ok("graduated"),
        "categorized" => Ok("categorized"),
        "proportional" | "proportionnal" => Ok("proportional"),
        other => Err(Error::UnknownAnalysis(other.to_string())),
    }
}

fn graduated(property: &str, raw: RawPropertyConfig) -> Result<Graduated> {
    let values = require(raw.values, property, "values")?;
    if values.is_empty() {
        return Err(Error::InvalidConfig(format!(
            "\"{property}\" requires at least one value"
        )));
    }
    let classes = match (raw.boundaries, raw.method) {
        (Some(boundaries), _) => ClassSource::Explicit(Boundaries::try_new(boundaries)?),
        (None, Some(method)) => ClassSource::Method(method.parse()?),
        (None, None) => {
            return Err(Error::InvalidConfig(
                "With \"graduated\" analysis, \"boundaries\" or \"method\" should be provided"
                    .to_string(),
            ))
        }
    };
    if let ClassSource::Explicit(boundaries) = &classes {
        if boundaries.class_count() > values.len() {
            return Err(Error::InvalidConfig(format!(
                "\"{property}\" has {} classes but only {} values",
                boundaries.class_count(),
                values.len()
            )));
        }
    }
    Ok(Graduated {
        classes,
        values,
        no_value: raw.no_value,
    })
}

fn proportional(property: &str, kind: VariationKind, raw: RawPropertyConfig) -> Result<Proportional> {
    let max_size = match kind {
        VariationKind::Radius => require(raw.max_radius, property, "max_radius")?,
        _ => require(raw.max_value, property, "max_value")?,
    };
    if !(max_size.is_finite() && max_size > 0.0) {
        return Err(Error::InvalidConfig(format!(
            "\"{property}\" maximum size must be a positive number, got {max_size}"
        )));
    }
    let no_value = raw
        .no_value
        .map(|v| {
            v.as_f64().ok_or_else(|| {
                Error::InvalidConfig(format!("\"{property}\" no_value must be a number, got {v}"))
            })
        })
        .transpose()?;
    Ok(Proportional { max_size, no_value })
}

impl PropertyStyle {
    /// Validate the configuration of the property named `property`
    pub fn from_raw(property: &str, raw: RawPropertyConfig) -> Result<Self> {
        let style_type = require(raw.kind.clone(), property, "type")?;
        match style_type.as_str() {
            "fixed" => {
                let value = require(raw.value, property, "value")?;
                let no_value = match (raw.field, raw.no_value) {
                    (Some(field), Some(no_value)) => Some((field, no_value)),
                    (None, Some(_)) => return Err(Error::missing_key(property, "field")),
                    (_, None) => None,
                };
                Ok(Self::Fixed { value, no_value })
            }
            "variable" => {
                let field = require(raw.field.clone(), property, "field")?;
                let analysis_name = parse_analysis(&require(raw.analysis.clone(), property, "analysis")?)?;
                let unsupported = || Error::UnsupportedProperty {
                    property: property.to_string(),
                    analysis: analysis_name.to_string(),
                };
                let kind = VariationKind::from_property(property).ok_or_else(unsupported)?;
                let generate_legend = raw.generate_legend;

                let analysis = match (analysis_name, kind) {
                    ("graduated", _) => Analysis::Graduated(graduated(property, raw)?),
                    ("categorized", _) => {
                        Analysis::Categorized(require(raw.categories, property, "categories")?)
                    }
                    ("proportional", VariationKind::Radius | VariationKind::Value) => {
                        Analysis::Proportional(proportional(property, kind, raw)?)
                    }
                    _ => return Err(unsupported()),
                };
                Ok(Self::Variable {
                    field,
                    kind,
                    analysis,
                    generate_legend,
                })
            }
            other => Err(Error::InvalidConfig(format!(
                "\"{property}\" has unknown type \"{other}\""
            ))),
        }
    }
}

impl TryFrom<RawWizardConfig> for WizardConfig {
    type Error = Error;

    fn try_from(raw: RawWizardConfig) -> Result<Self> {
        let map_style_type: MapStyleType = raw.map_style_type.parse()?;
        let mut properties = IndexMap::with_capacity(raw.style.len());
        for (property, config) in raw.style {
            if !map_style_type.owns_property(&property) {
                debug!(%property, %map_style_type, "ignoring property of another style type");
                continue;
            }
            let style = PropertyStyle::from_raw(&property, config)?;
            properties.insert(property, style);
        }
        Ok(Self {
            map_style_type,
            properties,
        })
    }
}
