//! Core trait for class boundary computation

use geostyle_core::{Boundaries, FeatureSource, Result};

/// Trait for computing class boundaries of a numeric property
///
/// `Ok(None)` means the data cannot be classified (no numeric value at all);
/// callers substitute a default style rather than failing.
pub trait Classifier {
    /// Compute boundaries from the non-null values, sorted ascending
    fn classify_sorted(&self, sorted: &[f64], class_count: usize) -> Result<Option<Boundaries>>;

    /// Compute boundaries of `field` over a feature source
    ///
    /// Default implementation sorts the numeric values and calls
    /// [`classify_sorted`](Self::classify_sorted).
    fn classify<S: FeatureSource + ?Sized>(
        &self,
        source: &S,
        field: &str,
        class_count: usize,
    ) -> Result<Option<Boundaries>>
    where
        Self: Sized,
    {
        let sorted = source.sorted_numeric_values(field)?;
        self.classify_sorted(&sorted, class_count)
    }
}
