//! Equal interval classification

use crate::traits::Classifier;
use geostyle_core::{Boundaries, Error, FeatureSource, Result};

/// Classes of identical width between the minimum and the maximum
#[derive(Debug, Clone, Copy, Default)]
pub struct EqualInterval;

impl EqualInterval {
    /// `class_count + 1` evenly spaced values from `min` to `max`
    pub fn boundaries(min: f64, max: f64, class_count: usize) -> Result<Boundaries> {
        if class_count == 0 {
            return Err(Error::InvalidParameter(
                "class count must be at least 1".to_string(),
            ));
        }
        let k = class_count as f64;
        // Scale each end first: `max - min` overflows over the whole f64 range.
        let (min_part, max_part) = (min / k, max / k);
        let mut values: Vec<f64> = (0..=class_count)
            .map(|i| min_part * (class_count - i) as f64 + max_part * i as f64)
            .collect();
        values[0] = min;
        values[class_count] = max;
        Boundaries::try_new(values)
    }
}

impl Classifier for EqualInterval {
    fn classify_sorted(&self, sorted: &[f64], class_count: usize) -> Result<Option<Boundaries>> {
        match (sorted.first(), sorted.last()) {
            (Some(&min), Some(&max)) => Self::boundaries(min, max, class_count).map(Some),
            _ => Ok(None),
        }
    }

    // Only the range is needed, so let the source aggregate it.
    fn classify<S: FeatureSource + ?Sized>(
        &self,
        source: &S,
        field: &str,
        class_count: usize,
    ) -> Result<Option<Boundaries>> {
        source
            .min_max(field)?
            .range()
            .map(|(min, max)| Self::boundaries(min, max, class_count))
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_equal_interval() {
        let b = EqualInterval.classify_sorted(&[1.0, 2.0], 4).unwrap().unwrap();
        assert_eq!(&b[..], &[1.0, 1.25, 1.5, 1.75, 2.0]);
    }

    #[test]
    fn test_equal_interval_range() {
        let b = EqualInterval::boundaries(-10.0, 20.0, 3).unwrap();
        assert_eq!(b.len(), 4);
        assert_relative_eq!(b[1], 0.0);
        assert_relative_eq!(b[2], 10.0);
        assert_relative_eq!(b.last(), 20.0);
    }

    #[test]
    fn test_equal_interval_full_f64_range() {
        let b = EqualInterval::boundaries(f64::MIN, f64::MAX, 4).unwrap();
        assert!(b.iter().all(|v| v.is_finite()));
        assert_eq!(b.first(), f64::MIN);
        assert_eq!(b[2], 0.0);
        assert_eq!(b.last(), f64::MAX);

        let b = EqualInterval.classify_sorted(&[f64::MIN, 0.0, f64::MAX], 1).unwrap().unwrap();
        assert_eq!(&b[..], &[f64::MIN, f64::MAX]);
    }

    #[test]
    fn test_equal_interval_single_value() {
        let b = EqualInterval.classify_sorted(&[5.0], 2).unwrap().unwrap();
        assert_eq!(&b[..], &[5.0, 5.0, 5.0]);
    }

    #[test]
    fn test_equal_interval_empty() {
        assert!(EqualInterval.classify_sorted(&[], 4).unwrap().is_none());
    }

    #[test]
    fn test_equal_interval_zero_classes() {
        assert!(matches!(
            EqualInterval.classify_sorted(&[1.0, 2.0], 0),
            Err(Error::InvalidParameter(_))
        ));
    }
}
