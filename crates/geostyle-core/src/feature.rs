//! Feature sources the statistics are computed over
//!
//! A [`FeatureSource`] is the read-only view of one geographic layer: an
//! identifier plus a set of features carrying a JSON `properties` object.
//! The only thing style generation ever asks of it is the numeric value of a
//! named property for every feature, so that is the one required method.
//! Aggregates have default implementations that a database-backed store can
//! override with native queries.

use crate::stats::MinMax;
use crate::Result;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Identifier of a layer in the feature store
pub type LayerId = u64;

/// Read-only access to the features of one layer
pub trait FeatureSource {
    /// Identifier of the layer
    fn layer_id(&self) -> LayerId;

    /// Numeric value of `field` for every feature, in storage order
    ///
    /// `None` marks a feature whose property is missing, null or not numeric.
    fn numeric_values(&self, field: &str) -> Result<Vec<Option<f64>>>;

    /// Null presence and range of `field` over all features
    fn min_max(&self, field: &str) -> Result<MinMax> {
        Ok(MinMax::aggregate(self.numeric_values(field)?))
    }

    /// Null presence and range of `field` over features whose value is > 0
    fn positive_min_max(&self, field: &str) -> Result<MinMax> {
        let positive = self
            .numeric_values(field)?
            .into_iter()
            .filter(|v| matches!(v, Some(x) if *x > 0.0));
        Ok(MinMax::aggregate(positive))
    }

    /// Non-null numeric values of `field`, sorted ascending
    fn sorted_numeric_values(&self, field: &str) -> Result<Vec<f64>> {
        let mut values: Vec<f64> = self.numeric_values(field)?.into_iter().flatten().collect();
        values.sort_by_key(|v| OrderedFloat(*v));
        Ok(values)
    }
}

/// Cast a JSON property to a number the way a text-to-numeric cast would
///
/// Numbers pass through, strings are parsed after trimming, everything else
/// (null, booleans, arrays, objects, unparsable text) has no numeric value.
pub fn numeric_cast(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    number.is_finite().then_some(number)
}

/// A single feature with its JSON properties
///
/// Geometry plays no part in style generation and is not carried.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    /// Property bag of the feature
    pub properties: Map<String, Value>,
}

impl Feature {
    /// Create a feature from a JSON object; any other value yields no properties
    pub fn new(properties: Value) -> Self {
        match properties {
            Value::Object(map) => Self { properties: map },
            _ => Self::default(),
        }
    }

    /// Numeric value of a property
    pub fn numeric(&self, field: &str) -> Option<f64> {
        self.properties.get(field).and_then(numeric_cast)
    }
}

/// In-memory layer of features
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoLayer {
    id: LayerId,
    features: Vec<Feature>,
}

impl GeoLayer {
    /// Create an empty layer
    pub fn new(id: LayerId) -> Self {
        Self {
            id,
            features: Vec::new(),
        }
    }

    /// Create a layer from its features
    pub fn with_features(id: LayerId, features: Vec<Feature>) -> Self {
        Self { id, features }
    }

    /// Add a feature built from a JSON properties object
    pub fn push(&mut self, properties: Value) {
        self.features.push(Feature::new(properties));
    }

    /// Get the features
    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    /// Get the number of features
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Check if the layer has no features
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

impl FeatureSource for GeoLayer {
    fn layer_id(&self) -> LayerId {
        self.id
    }

    fn numeric_values(&self, field: &str) -> Result<Vec<Option<f64>>> {
        Ok(self.features.iter().map(|f| f.numeric(field)).collect())
    }
}

impl<S: FeatureSource + ?Sized> FeatureSource for &S {
    fn layer_id(&self) -> LayerId {
        (**self).layer_id()
    }

    fn numeric_values(&self, field: &str) -> Result<Vec<Option<f64>>> {
        (**self).numeric_values(field)
    }

    fn min_max(&self, field: &str) -> Result<MinMax> {
        (**self).min_max(field)
    }

    fn positive_min_max(&self, field: &str) -> Result<MinMax> {
        (**self).positive_min_max(field)
    }

    fn sorted_numeric_values(&self, field: &str) -> Result<Vec<f64>> {
        (**self).sorted_numeric_values(field)
    }
}
