//! Statistics accessor
//!
//! Null presence and numeric range of one property, the `bool_or/min/max`
//! aggregate every classification and proportional legend starts from.

use crate::feature::FeatureSource;
use crate::Result;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Null presence and range of a property
///
/// `has_null` is `None` when no row was aggregated at all, `min`/`max` are
/// `None` when no row carried a numeric value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MinMax {
    pub has_null: Option<bool>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl MinMax {
    /// Aggregate a column of optional numeric values
    pub fn aggregate<I>(values: I) -> Self
    where
        I: IntoIterator<Item = Option<f64>>,
    {
        values.into_iter().fold(Self::default(), |acc, value| {
            let has_null = Some(acc.has_null.unwrap_or(false) || value.is_none());
            match value {
                Some(v) => Self {
                    has_null,
                    min: Some(acc.min.map_or(v, |m| m.min(v))),
                    max: Some(acc.max.map_or(v, |m| m.max(v))),
                },
                None => Self { has_null, ..acc },
            }
        })
    }

    /// Both ends of the range, when known
    pub fn range(&self) -> Option<(f64, f64)> {
        self.min.zip(self.max)
    }
}

/// Null presence and range of `field` over every feature of the source
pub fn get_min_max<S: FeatureSource + ?Sized>(source: &S, field: &str) -> Result<MinMax> {
    let result = source.min_max(field)?;
    trace!(layer = source.layer_id(), field, ?result, "min/max");
    Ok(result)
}

/// Null presence and range of `field` over features whose value is strictly positive
pub fn get_positive_min_max<S: FeatureSource + ?Sized>(source: &S, field: &str) -> Result<MinMax> {
    let result = source.positive_min_max(field)?;
    trace!(layer = source.layer_id(), field, ?result, "positive min/max");
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feature::GeoLayer;
    use serde_json::json;

    fn layer(values: &[serde_json::Value]) -> GeoLayer {
        let mut layer = GeoLayer::new(1);
        for v in values {
            layer.push(json!({ "a": v }));
        }
        layer
    }

    #[test]
    fn test_min_max() {
        let l = layer(&[json!(3), json!(1), json!(2)]);
        let r = get_min_max(&l, "a").unwrap();
        assert_eq!(r.has_null, Some(false));
        assert_eq!(r.range(), Some((1.0, 3.0)));
    }

    #[test]
    fn test_min_max_with_null() {
        let l = layer(&[json!(3), json!(null), json!(-2)]);
        let r = get_min_max(&l, "a").unwrap();
        assert_eq!(r.has_null, Some(true));
        assert_eq!(r.min, Some(-2.0));
        assert_eq!(r.max, Some(3.0));
    }

    #[test]
    fn test_min_max_empty_dataset() {
        let l = GeoLayer::new(1);
        let r = get_min_max(&l, "a").unwrap();
        assert_eq!(r, MinMax { has_null: None, min: None, max: None });
    }

    #[test]
    fn test_min_max_all_null() {
        let l = layer(&[json!(null), json!("x")]);
        let r = get_min_max(&l, "a").unwrap();
        assert_eq!(r.has_null, Some(true));
        assert_eq!(r.range(), None);
    }

    #[test]
    fn test_positive_min_max() {
        let l = layer(&[json!(0), json!(1), json!(129)]);
        let r = get_positive_min_max(&l, "a").unwrap();
        assert_eq!(r.has_null, Some(false));
        assert_eq!(r.min, Some(1.0));
        assert_eq!(r.max, Some(129.0));
    }

    #[test]
    fn test_positive_min_max_nothing_positive() {
        let l = layer(&[json!(0), json!(-4), json!(null)]);
        let r = get_positive_min_max(&l, "a").unwrap();
        assert_eq!(r, MinMax::default());
    }
}
