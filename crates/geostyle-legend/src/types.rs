//! Legend data model

use geostyle_core::{json_number, MapStyleType};
use serde::{Serialize, Serializer};
use serde_json::Value;

/// Shape drawn next to a legend entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendShape {
    Square,
    Circle,
    Line,
    Symbol,
}

impl From<MapStyleType> for LegendShape {
    fn from(t: MapStyleType) -> Self {
        match t {
            MapStyleType::Fill | MapStyleType::FillExtrusion => Self::Square,
            MapStyleType::Circle => Self::Circle,
            MapStyleType::Line => Self::Line,
            MapStyleType::Symbol => Self::Symbol,
        }
    }
}

fn serialize_number<S: Serializer>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error> {
    match value {
        Some(v) => json_number(*v).serialize(serializer),
        None => serializer.serialize_none(),
    }
}

/// One end of a legend interval
///
/// A `None` value is the "no value" entry. Proportional legends only carry
/// a value, so `included` is omitted there.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bound {
    #[serde(serialize_with = "serialize_number")]
    pub value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub included: Option<bool>,
}

impl Bound {
    pub fn new(value: f64, included: bool) -> Self {
        Self {
            value: Some(value),
            included: Some(included),
        }
    }

    /// Bound of a proportional legend entry
    pub fn value(value: f64) -> Self {
        Self {
            value: Some(value),
            included: None,
        }
    }

    /// Included null bound of the "no value" entry
    pub fn no_value() -> Self {
        Self {
            value: None,
            included: Some(true),
        }
    }
}

/// Interval a legend entry stands for
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LegendBoundaries {
    pub lower: Bound,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upper: Option<Bound>,
}

impl LegendBoundaries {
    pub fn between(lower: Bound, upper: Bound) -> Self {
        Self {
            lower,
            upper: Some(upper),
        }
    }

    pub fn lower_only(lower: Bound) -> Self {
        Self { lower, upper: None }
    }

    /// Null bounds, both included
    pub fn no_value() -> Self {
        Self::between(Bound::no_value(), Bound::no_value())
    }
}

/// A legend entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<Value>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_number"
    )]
    pub diameter: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boundaries: Option<LegendBoundaries>,
    pub shape: LegendShape,
    /// Category label; `Some(Value::Null)` labels the fallback category
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<Value>,
}

impl LegendItem {
    pub fn new(shape: LegendShape) -> Self {
        Self {
            color: None,
            size: None,
            diameter: None,
            boundaries: None,
            shape,
            label: None,
        }
    }

    pub fn with_color(mut self, color: impl Into<Value>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_size(mut self, size: impl Into<Value>) -> Self {
        self.size = Some(size.into());
        self
    }

    /// Set a computed size, integral values written as integers
    pub fn with_size_number(self, size: f64) -> Self {
        self.with_size(json_number(size))
    }

    /// Set the diameter and the matching size of a stacked circle
    pub fn with_diameter(mut self, diameter: f64) -> Self {
        self.diameter = Some(diameter);
        self.with_size_number(diameter)
    }

    pub fn with_boundaries(mut self, boundaries: LegendBoundaries) -> Self {
        self.boundaries = Some(boundaries);
        self
    }

    pub fn with_label(mut self, label: impl Into<Value>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// Legend of one styled property
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Legend {
    pub items: Vec<LegendItem>,
    #[serde(rename = "stackedCircles", skip_serializing_if = "Option::is_none")]
    pub stacked_circles: Option<bool>,
}

impl Legend {
    pub fn new(items: Vec<LegendItem>) -> Self {
        Self {
            items,
            stacked_circles: None,
        }
    }

    /// Legend whose circles are drawn on top of each other
    pub fn stacked(items: Vec<LegendItem>) -> Self {
        Self {
            items,
            stacked_circles: Some(true),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn to_value(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }
}
