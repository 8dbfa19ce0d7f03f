//! Quantile classification
//!
//! Rows are split the way the SQL `ntile(k)` window function splits them:
//! with `n` rows and `k` buckets, every bucket holds `n / k` rows and the
//! first `n % k` buckets hold one more. With fewer rows than buckets each
//! row is its own bucket.

use crate::traits::Classifier;
use geostyle_core::{Boundaries, Error, Result};

/// Classes holding the same number of features
#[derive(Debug, Clone, Copy, Default)]
pub struct Quantile;

/// Split sorted values into `k` ordered buckets, `ntile` style
pub fn ntile_buckets(sorted: &[f64], k: usize) -> Vec<&[f64]> {
    if sorted.is_empty() || k == 0 {
        return Vec::new();
    }
    let k = k.min(sorted.len());
    let (base, extra) = (sorted.len() / k, sorted.len() % k);

    let mut buckets = Vec::with_capacity(k);
    let mut start = 0;
    for bucket in 0..k {
        let len = base + usize::from(bucket < extra);
        buckets.push(&sorted[start..start + len]);
        start += len;
    }
    buckets
}

/// Each bucket's minimum followed by the last bucket's maximum
pub(crate) fn bucket_boundaries<I>(buckets: I) -> Result<Option<Boundaries>>
where
    I: IntoIterator<Item = (f64, f64)>,
{
    let mut values = Vec::new();
    let mut last_max = None;
    for (min, max) in buckets {
        values.push(min);
        last_max = Some(max);
    }
    match last_max {
        Some(max) => {
            values.push(max);
            Boundaries::try_new(values).map(Some)
        }
        None => Ok(None),
    }
}

impl Classifier for Quantile {
    fn classify_sorted(&self, sorted: &[f64], class_count: usize) -> Result<Option<Boundaries>> {
        if class_count == 0 {
            return Err(Error::InvalidParameter(
                "class count must be at least 1".to_string(),
            ));
        }
        bucket_boundaries(
            ntile_buckets(sorted, class_count)
                .into_iter()
                .map(|b| (b[0], b[b.len() - 1])),
        )
    }
}
